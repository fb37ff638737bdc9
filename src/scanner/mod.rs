//! Scanner module for command lines
//!
//! This module contains the token model, the scanner and the helpers used to
//! splice token lists together.

pub mod types;
pub mod token;
pub mod scanner;
pub mod sequence;

// Re-exports
pub use types::{ScanError, ScanResult};
pub use token::{Token, TokenKind};
pub use scanner::{scan, scan_strict, validate, Scanner};
pub use sequence::{concat_tokens, join_escaped, reconstruct, try_without_end_of_input, without_end_of_input};
