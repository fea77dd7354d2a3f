//! Constant quote-glyph tables, one per locale.

/// Punctuation marks a locale uses for quotations.
///
/// `primary` marks are used at nesting depth 0, `secondary` ones inside an
/// already open quotation. The `single_*` marks serve straight `'` quotes,
/// which are never depth-tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteGlyphs {
    pub open_primary: char,
    pub open_secondary: char,
    pub close_primary: char,
    pub close_secondary: char,
    pub single_open: char,
    pub single_close: char,
}

impl QuoteGlyphs {
    /// Whether `c` is one of this locale's opening marks.
    #[inline(always)]
    pub fn is_opening(&self, c: char) -> bool {
        c == self.open_primary || c == self.open_secondary || c == self.single_open
    }

    /// Whether `c` is one of this locale's closing marks.
    #[inline(always)]
    pub fn is_closing(&self, c: char) -> bool {
        c == self.close_primary || c == self.close_secondary || c == self.single_close
    }
}

pub static RU_GLYPHS: QuoteGlyphs = QuoteGlyphs {
    open_primary: '«',
    open_secondary: '„',
    close_primary: '»',
    close_secondary: '“',
    single_open: '„',
    single_close: '“',
};

pub static EN_GLYPHS: QuoteGlyphs = QuoteGlyphs {
    open_primary: '“',
    open_secondary: '‘',
    close_primary: '”',
    close_secondary: '’',
    single_open: '‘',
    single_close: '’',
};

/// Right single quotation mark used for contractions and possessives in every locale.
pub const APOSTROPHE: char = '’';
