//! shell-scanner - A lexical scanner for shell-like command lines
//!
//! This library turns a command line into words, pipes, redirections and
//! quoted strings, ending with an explicit end-of-input token. It does no
//! parsing or execution.

pub mod logging;
pub mod render;
pub mod scanner;
pub mod shell;

pub use scanner::{
    concat_tokens, reconstruct, scan, scan_strict, without_end_of_input, ScanError, Token,
    TokenKind,
};
pub use shell::EscapedShellWord;
