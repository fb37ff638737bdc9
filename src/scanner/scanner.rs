//! Scanner for Command-Line Input
//!
//! Splits a command line into words, pipes, redirections and quoted strings.
//! Each step matches an ordered table of anchored patterns against the front
//! of the unconsumed input; the first pattern that matches wins. Leading
//! whitespace is absorbed into the token that follows it, so the raw spans of
//! all tokens always add up to the original input.
//!
//! Input that no pattern recognizes is kept, in full, as a single `Invalid`
//! token. Scanning never fails.

use regex_lite::Regex;

use crate::scanner::token::{Token, TokenKind, WHITESPACE_CLASS};
use crate::scanner::types::{ScanError, ScanResult};

lazy_static::lazy_static! {
    /// Nothing left but (possibly) whitespace
    static ref END_OF_INPUT: Regex = rule(r"$");

    /// Lexeme patterns in priority order. `>>` must precede `>`, and the quoted
    /// forms must precede words.
    static ref RULES: Vec<(Regex, TokenKind)> = vec![
        (rule(r"\|"), TokenKind::Pipe),
        (rule(r">>"), TokenKind::AppendingOutputRedirection),
        (rule(r"<"), TokenKind::InputRedirection),
        (rule(r">"), TokenKind::OutputRedirection),
        (rule(r#""(?:\\"|[^"])*""#), TokenKind::DoubleQuotedStringLiteral),
        (rule(r"'(?:\\'|[^'])*'"), TokenKind::SingleQuotedStringLiteral),
        (
            rule(&format!(r"(?:\\[{}]|[a-zA-Z0-9=_/~.-])+", WHITESPACE_CLASS)),
            TokenKind::Word,
        ),
    ];
}

/// Anchor `lexeme` at the start of the input, after optional whitespace.
fn rule(lexeme: &str) -> Regex {
    Regex::new(&format!("^[{}]*{}", WHITESPACE_CLASS, lexeme)).unwrap()
}

/// Scanner over a complete command line
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            tokens: Vec::new(),
        }
    }

    /// Scan the entire input. The result always ends with exactly one EOF token.
    #[tracing::instrument(level = "trace", skip_all, fields(len = self.input.len()))]
    pub fn tokenize(mut self) -> Vec<Token> {
        let input = self.input;
        loop {
            let rest = &input[self.pos..];

            if END_OF_INPUT.is_match(rest) {
                self.push(TokenKind::EndOfInput, rest.len());
                return self.tokens;
            }

            match match_lexeme(rest) {
                Some((kind, len)) => self.push(kind, len),
                None => {
                    tracing::debug!(offset = self.pos, "capturing unrecognized remainder");
                    self.push(TokenKind::Invalid, rest.len());
                }
            }
        }
    }

    fn push(&mut self, kind: TokenKind, len: usize) {
        let end = self.pos + len;
        let raw = &self.input[self.pos..end];
        tracing::trace!(kind = kind.as_str(), start = self.pos, end, "token");
        self.tokens.push(Token::new(kind, raw));
        self.pos = end;
    }
}

/// Find the highest-priority lexeme at the front of `rest`.
fn match_lexeme(rest: &str) -> Option<(TokenKind, usize)> {
    RULES
        .iter()
        .find_map(|(re, kind)| re.find(rest).map(|m| (*kind, m.end())))
}

/// Scan `input` into tokens.
pub fn scan(input: &str) -> Vec<Token> {
    Scanner::new(input).tokenize()
}

/// Scan `input`, rejecting it if any part was not recognized.
pub fn scan_strict(input: &str) -> ScanResult<Vec<Token>> {
    let tokens = scan(input);
    validate(&tokens)?;
    Ok(tokens)
}

/// Fail with the first `Invalid` token found, reporting its byte offset.
pub fn validate(tokens: &[Token]) -> ScanResult<()> {
    let mut offset = 0;
    for token in tokens {
        if token.is_invalid() {
            return Err(ScanError::UnrecognizedInput {
                offset,
                fragment: token.raw().to_string(),
            });
        }
        offset += token.raw().len();
    }
    Ok(())
}
