//! Shell text helpers shared by the scanner and its consumers.

pub mod escaped_shell_word;

pub use escaped_shell_word::EscapedShellWord;
