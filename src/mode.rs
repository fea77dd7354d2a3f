use std::{fmt, str::FromStr};
use thiserror::Error;

/// Output encoding of a typograph run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputMode {
    /// Typographic characters as Unicode glyphs.
    Unicode,
    /// Unicode output with the typographic characters spelled as HTML entities.
    #[default]
    Html,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown output mode `{0}` (expected `unicode` or `html`)")]
pub struct ParseModeError(pub String);

impl OutputMode {
    /// The copy-action switch: a held modifier asks for plain Unicode,
    /// otherwise HTML entities are produced.
    #[inline]
    pub fn from_modifier(modifier: bool) -> Self {
        if modifier {
            OutputMode::Unicode
        } else {
            OutputMode::Html
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Unicode => "unicode",
            OutputMode::Html => "html",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unicode" => Ok(OutputMode::Unicode),
            "html" => Ok(OutputMode::Html),
            _ => Err(ParseModeError(s.to_owned())),
        }
    }
}
