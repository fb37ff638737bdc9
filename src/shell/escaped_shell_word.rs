//! Escaped Shell Words
//!
//! Text that is already safe to splice back into a shell command line.

use serde::Serialize;
use std::fmt;

/// A string whose contents can be re-embedded in a shell command line as-is.
///
/// Values are only produced by the scanner; nothing in this crate validates
/// externally supplied text, so there is no public constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EscapedShellWord(String);

impl EscapedShellWord {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for EscapedShellWord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EscapedShellWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EscapedShellWord> for String {
    fn from(word: EscapedShellWord) -> Self {
        word.0
    }
}
