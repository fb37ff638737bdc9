//! Tokens for Command-Line Input
//!
//! Every token keeps the exact text it was scanned from (`raw`), including any
//! whitespace that preceded it. Two views are derived from the raw text on
//! demand:
//! - `value` - the content a parser interprets (trimmed, unquoted, unescaped)
//! - `escaped_value` - shell text suitable for rebuilding a command line

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

use crate::shell::EscapedShellWord;

/// Whitespace recognized by the scanner, as the body of a regex character
/// class: ASCII whitespace plus the Unicode space separators, line and
/// paragraph separators, and the byte order mark.
pub(crate) const WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

lazy_static::lazy_static! {
    /// A backslash followed by one whitespace character inside a word.
    static ref ESCAPED_WHITESPACE: regex_lite::Regex =
        regex_lite::Regex::new(&format!(r"\\[{}]", WHITESPACE_CLASS)).unwrap();
}

/// Token kinds produced by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Word,
    Pipe,                       // |
    InputRedirection,           // <
    OutputRedirection,          // >
    AppendingOutputRedirection, // >>
    SingleQuotedStringLiteral,  // '...'
    DoubleQuotedStringLiteral,  // "..."
    Invalid,
    EndOfInput,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Word => "WORD",
            Self::Pipe => "PIPE",
            Self::InputRedirection => "LESS",
            Self::OutputRedirection => "GREAT",
            Self::AppendingOutputRedirection => "DGREAT",
            Self::SingleQuotedStringLiteral => "SQUOTE_STRING",
            Self::DoubleQuotedStringLiteral => "DQUOTE_STRING",
            Self::Invalid => "INVALID",
            Self::EndOfInput => "EOF",
        }
    }

    pub fn is_redirection(&self) -> bool {
        matches!(
            self,
            Self::InputRedirection | Self::OutputRedirection | Self::AppendingOutputRedirection
        )
    }

    pub fn is_string_literal(&self) -> bool {
        matches!(
            self,
            Self::SingleQuotedStringLiteral | Self::DoubleQuotedStringLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Membership test for [`WHITESPACE_CLASS`].
pub(crate) fn is_shell_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\x0B'
            | '\x0C'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// A token produced by the scanner
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    /// Matched input, leading whitespace included
    raw: String,
}

impl Token {
    pub fn new(kind: TokenKind, raw: impl Into<String>) -> Self {
        Self {
            kind,
            raw: raw.into(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    pub fn is_invalid(&self) -> bool {
        self.kind == TokenKind::Invalid
    }

    fn trimmed(&self) -> &str {
        self.raw.trim_matches(is_shell_whitespace)
    }

    /// The semantic content of the token.
    ///
    /// Words have their first escaped whitespace sequence turned into a plain
    /// space; any later ones are left untouched. String literals lose their
    /// outer quotes. Everything else is the trimmed raw text.
    pub fn value(&self) -> String {
        match self.kind {
            TokenKind::Word => ESCAPED_WHITESPACE
                .replacen(self.trimmed(), 1, " ")
                .into_owned(),
            TokenKind::SingleQuotedStringLiteral | TokenKind::DoubleQuotedStringLiteral => {
                strip_outer_quotes(self.trimmed()).to_string()
            }
            TokenKind::Pipe
            | TokenKind::InputRedirection
            | TokenKind::OutputRedirection
            | TokenKind::AppendingOutputRedirection
            | TokenKind::Invalid
            | TokenKind::EndOfInput => self.trimmed().to_string(),
        }
    }

    /// Shell text that re-creates this token when spliced into a command line.
    #[deprecated(note = "only meant for rebuilding a displayable command line; use `value` to interpret tokens")]
    pub fn escaped_value(&self) -> EscapedShellWord {
        match self.kind {
            TokenKind::SingleQuotedStringLiteral => {
                EscapedShellWord::new(format!("'{}'", self.value()))
            }
            TokenKind::DoubleQuotedStringLiteral => {
                EscapedShellWord::new(format!("\"{}\"", self.value()))
            }
            TokenKind::Word
            | TokenKind::Pipe
            | TokenKind::InputRedirection
            | TokenKind::OutputRedirection
            | TokenKind::AppendingOutputRedirection
            | TokenKind::Invalid
            | TokenKind::EndOfInput => EscapedShellWord::new(self.trimmed()),
        }
    }
}

/// Drop the first and last character, whatever they are.
fn strip_outer_quotes(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.value())
    }
}

impl Serialize for Token {
    #[allow(deprecated)]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Token", 4)?;
        state.serialize_field("kind", self.kind.as_str())?;
        state.serialize_field("raw", &self.raw)?;
        state.serialize_field("value", &self.value())?;
        state.serialize_field("escapedValue", &self.escaped_value())?;
        state.end()
    }
}

#[cfg(test)]
#[allow(deprecated)]
mod tests {
    use super::*;

    #[test]
    fn test_word_value_is_trimmed() {
        let token = Token::new(TokenKind::Word, "  ls");
        assert_eq!(token.value(), "ls");
        assert_eq!(token.escaped_value().as_str(), "ls");
    }

    #[test]
    fn test_word_unescapes_only_first_escaped_space() {
        let token = Token::new(TokenKind::Word, r" a\ b\ c");
        assert_eq!(token.value(), r"a b\ c");
        assert_eq!(token.escaped_value().as_str(), r"a\ b\ c");
    }

    #[test]
    fn test_word_escaped_tab_becomes_space() {
        let token = Token::new(TokenKind::Word, "a\\\tb");
        assert_eq!(token.value(), "a b");
    }

    #[test]
    fn test_word_escaped_nbsp_becomes_space() {
        let token = Token::new(TokenKind::Word, "\u{3000}a\\\u{A0}b");
        assert_eq!(token.value(), "a b");
        assert_eq!(token.escaped_value().as_str(), "a\\\u{A0}b");
    }

    #[test]
    fn test_unicode_whitespace_is_trimmed() {
        assert_eq!(Token::new(TokenKind::EndOfInput, "\u{3000}\u{FEFF}").value(), "");
        assert_eq!(Token::new(TokenKind::Pipe, "\u{2009}|").value(), "|");
        assert!(!is_shell_whitespace('\u{85}'));
    }

    #[test]
    fn test_string_literals_strip_quotes() {
        let single = Token::new(TokenKind::SingleQuotedStringLiteral, " 'a b'");
        assert_eq!(single.value(), "a b");
        assert_eq!(single.escaped_value().as_str(), "'a b'");

        let double = Token::new(TokenKind::DoubleQuotedStringLiteral, "\"c \\\" d\"");
        assert_eq!(double.value(), "c \\\" d");
        assert_eq!(double.escaped_value().as_str(), "\"c \\\" d\"");
    }

    #[test]
    fn test_operators_and_markers_use_trimmed_raw() {
        assert_eq!(Token::new(TokenKind::Pipe, " |").value(), "|");
        assert_eq!(Token::new(TokenKind::AppendingOutputRedirection, "\t>>").value(), ">>");
        assert_eq!(Token::new(TokenKind::Invalid, " && grep").value(), "&& grep");
        assert_eq!(Token::new(TokenKind::EndOfInput, "   ").value(), "");
        assert_eq!(Token::new(TokenKind::EndOfInput, "").escaped_value().as_str(), "");
    }

    #[test]
    fn test_accessors_are_repeatable() {
        let token = Token::new(TokenKind::Word, r" x\ y");
        assert_eq!(token.value(), token.value());
        assert_eq!(token.escaped_value(), token.escaped_value());
    }

    #[test]
    fn test_accessors_tolerate_degenerate_raw() {
        assert_eq!(Token::new(TokenKind::SingleQuotedStringLiteral, "").value(), "");
        assert_eq!(Token::new(TokenKind::DoubleQuotedStringLiteral, "\"").value(), "");
    }

    #[test]
    fn test_display_and_kind_names() {
        assert_eq!(Token::new(TokenKind::Word, " foo").to_string(), "WORD(foo)");
        assert_eq!(TokenKind::EndOfInput.as_str(), "EOF");
        assert!(TokenKind::AppendingOutputRedirection.is_redirection());
        assert!(!TokenKind::Pipe.is_redirection());
        assert!(TokenKind::DoubleQuotedStringLiteral.is_string_literal());
    }

    #[test]
    fn test_serialize_includes_both_views() {
        let token = Token::new(TokenKind::SingleQuotedStringLiteral, " 'hi'");
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "SQUOTE_STRING",
                "raw": " 'hi'",
                "value": "hi",
                "escapedValue": "'hi'",
            })
        );
    }
}
