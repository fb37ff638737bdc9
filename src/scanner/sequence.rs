//! Token List Splicing
//!
//! Helpers for re-scanning input incrementally while it is being edited: an
//! already scanned prefix loses its EOF marker and is joined with a freshly
//! scanned suffix that carries its own.

use crate::scanner::token::Token;
use crate::scanner::types::{ScanError, ScanResult};

/// All tokens except the last.
///
/// The last token is assumed to be EOF and is not checked; whatever it is gets
/// dropped. Use [`try_without_end_of_input`] to have the assumption verified.
pub fn without_end_of_input(tokens: &[Token]) -> Vec<Token> {
    match tokens.split_last() {
        Some((_, rest)) => rest.to_vec(),
        None => Vec::new(),
    }
}

/// Like [`without_end_of_input`], but fails unless the last token is EOF.
pub fn try_without_end_of_input(tokens: &[Token]) -> ScanResult<Vec<Token>> {
    match tokens.last() {
        Some(last) if last.is_end_of_input() => Ok(without_end_of_input(tokens)),
        last => Err(ScanError::MissingEndOfInput {
            found: last.map(|t| t.kind()),
        }),
    }
}

/// `left` without its EOF, followed by every token of `right`.
///
/// No overlap detection or span validation happens here; the caller decides
/// that the two lists describe adjacent text.
pub fn concat_tokens(left: &[Token], right: &[Token]) -> Vec<Token> {
    let mut tokens = without_end_of_input(left);
    tokens.extend_from_slice(right);
    tokens
}

/// Concatenate the raw text of every token.
pub fn reconstruct(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.raw()).collect()
}

/// Join the escaped form of every non-empty token into one command line.
#[allow(deprecated)]
pub fn join_escaped(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter(|t| !t.is_end_of_input())
        .map(|t| t.escaped_value())
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scanner::scan;
    use crate::scanner::token::TokenKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_without_end_of_input_drops_last() {
        let tokens = scan("ls -l");
        let trimmed = without_end_of_input(&tokens);
        assert_eq!(trimmed, tokens[..2].to_vec());
    }

    #[test]
    fn test_without_end_of_input_does_not_check() {
        let tokens = vec![
            Token::new(TokenKind::Word, "a"),
            Token::new(TokenKind::Word, " b"),
        ];
        assert_eq!(without_end_of_input(&tokens), vec![Token::new(TokenKind::Word, "a")]);
        assert!(without_end_of_input(&[]).is_empty());
    }

    #[test]
    fn test_try_without_end_of_input() {
        let tokens = scan("ls");
        assert_eq!(try_without_end_of_input(&tokens).unwrap().len(), 1);

        let err = try_without_end_of_input(&tokens[..1]).unwrap_err();
        assert_eq!(
            err,
            ScanError::MissingEndOfInput {
                found: Some(TokenKind::Word)
            }
        );
        assert_eq!(
            try_without_end_of_input(&[]).unwrap_err(),
            ScanError::MissingEndOfInput { found: None }
        );
    }

    #[test]
    fn test_concat_tokens_splices_runs() {
        let left = scan("ls -la ");
        let right = scan(" | grep foo");
        let joined = concat_tokens(&left, &right);

        let mut expected = without_end_of_input(&left);
        expected.extend(right.iter().cloned());
        assert_eq!(joined, expected);
        assert_eq!(reconstruct(&joined), "ls -la | grep foo");
        assert_eq!(joined.iter().filter(|t| t.is_end_of_input()).count(), 1);
    }

    #[test]
    fn test_reconstruct_round_trips() {
        let input = "  cat <in 'x y' >> \"out\" && rm";
        assert_eq!(reconstruct(&scan(input)), input);
    }

    #[test]
    fn test_join_escaped() {
        let tokens = scan(r#"  echo 'a b'  "c"   | tr a\ b x >> log"#);
        assert_eq!(join_escaped(&tokens), r#"echo 'a b' "c" | tr a\ b x >> log"#);
        assert_eq!(join_escaped(&scan("   ")), "");
    }
}
