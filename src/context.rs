// src/context.rs
// Per-invocation settings handed to every stage. Tiny, Copy, 'static data only.

use crate::locale::{Locale, QuoteGlyphs};

/// Runtime context passed to every typography stage.
///
/// Contains:
/// - `locale`: detected (or overridden) once per invocation, constant afterwards
/// - `glyphs`: the quote table for that locale, resolved up front
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub locale: Locale,
    pub glyphs: &'static QuoteGlyphs,
}

impl Default for Context {
    #[inline(always)]
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl Context {
    #[inline(always)]
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            glyphs: locale.glyphs(),
        }
    }

    /// Build the context for `text` by running locale detection on it.
    #[inline]
    pub fn detect(text: &str) -> Self {
        Self::new(Locale::detect(text))
    }

    #[inline(always)]
    pub fn is_ru(&self) -> bool {
        self.locale == Locale::Ru
    }
}
