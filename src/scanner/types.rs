//! Scanner Error Types
//!
//! `scan` itself never fails. These errors come from the opt-in strict helpers
//! that turn an `Invalid` token or a broken token list into a `Result`.

use thiserror::Error;

use crate::scanner::token::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("unrecognized input at byte {offset}: {fragment:?}")]
    UnrecognizedInput { offset: usize, fragment: String },

    #[error("token list does not end with EOF (last token: {})", kind_name(.found))]
    MissingEndOfInput { found: Option<TokenKind> },
}

pub type ScanResult<T> = Result<T, ScanError>;

fn kind_name(kind: &Option<TokenKind>) -> &'static str {
    kind.map(|k| k.as_str()).unwrap_or("none")
}
