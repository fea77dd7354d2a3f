pub mod data;

use crate::unicode::is_cyrillic;
use std::{fmt, str::FromStr};
use thiserror::Error;

pub use data::{EN_GLYPHS, QuoteGlyphs, RU_GLYPHS};

/// Script-driven locale. Detected from the text, never configured globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    Ru,
    #[default]
    En,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown locale `{0}` (expected `ru` or `en`)")]
pub struct ParseLocaleError(pub String);

impl Locale {
    /// `Ru` as soon as one code point falls in the Cyrillic block, `En` otherwise
    /// (including the empty string).
    #[inline]
    pub fn detect(text: &str) -> Self {
        if text.chars().any(is_cyrillic) {
            Locale::Ru
        } else {
            Locale::En
        }
    }

    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }

    #[inline(always)]
    pub fn glyphs(&self) -> &'static QuoteGlyphs {
        match self {
            Locale::Ru => &RU_GLYPHS,
            Locale::En => &EN_GLYPHS,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ru" => Ok(Locale::Ru),
            "en" => Ok(Locale::En),
            _ => Err(ParseLocaleError(s.to_owned())),
        }
    }
}
