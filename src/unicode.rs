// Code-point classification used by the quote scanner and the spacing rules.
// Everything here is a pure `char -> bool` test with no allocation.

use crate::locale::QuoteGlyphs;

pub const NBSP: char = '\u{00A0}';
pub const EM_DASH: char = '\u{2014}';
pub const EN_DASH: char = '\u{2013}';

/// Cyrillic block, U+0400..=U+04FF.
#[inline(always)]
pub const fn is_cyrillic(c: char) -> bool {
    matches!(c as u32, 0x0400..=0x04FF)
}

#[inline(always)]
pub fn is_letter_or_digit(c: char) -> bool {
    c.is_alphanumeric()
}

/// Opening quotation marks whose direction is the same in every locale.
#[inline(always)]
pub const fn is_opening_quote(c: char) -> bool {
    matches!(c, '«' | '„' | '‘' | '‹' | '‚')
}

/// Closing quotation marks whose direction is the same in every locale.
///
/// `“` is in neither set: it closes a nested `ru` quotation and opens an `en`
/// one. [`QuoteGlyphs::is_opening`] and [`QuoteGlyphs::is_closing`] decide it.
#[inline(always)]
pub const fn is_closing_quote(c: char) -> bool {
    matches!(c, '»' | '”' | '’' | '›')
}

#[inline(always)]
pub const fn is_opening_bracket(c: char) -> bool {
    matches!(c, '(' | '[' | '{' | '<')
}

#[inline(always)]
pub const fn is_closing_bracket(c: char) -> bool {
    matches!(c, ')' | ']' | '}' | '>')
}

/// Sentence and clause punctuation that can only follow a quotation.
#[inline(always)]
pub const fn is_sentence_punct(c: char) -> bool {
    matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | '…')
}

/// Anything after which a quote mark must be an opening one.
#[inline(always)]
pub fn opens_quotation(c: char, glyphs: &QuoteGlyphs) -> bool {
    matches!(c, '¡' | '¿' | EM_DASH | EN_DASH)
        || is_opening_bracket(c)
        || (is_opening_quote(c) && !glyphs.is_closing(c))
        || glyphs.is_opening(c)
}

/// Anything before which a quote mark must be a closing one.
#[inline(always)]
pub fn closes_quotation(c: char, glyphs: &QuoteGlyphs) -> bool {
    is_closing_bracket(c)
        || is_sentence_punct(c)
        || (is_closing_quote(c) && !glyphs.is_opening(c))
        || glyphs.is_closing(c)
}

/// Characters that may sit directly before a bound Russian preposition.
#[inline(always)]
pub fn starts_word_group(c: char) -> bool {
    c.is_whitespace() || is_opening_bracket(c) || is_opening_quote(c) || c == '"'
}

/// Nearest non-whitespace character at the end of `text`.
#[inline]
pub fn last_non_whitespace(text: &str) -> Option<char> {
    text.chars().rev().find(|c| !c.is_whitespace())
}

#[inline]
pub fn first_non_whitespace(text: &str) -> Option<char> {
    text.chars().find(|c| !c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyrillic_block_bounds() {
        assert!(is_cyrillic('\u{0400}'));
        assert!(is_cyrillic('я'));
        assert!(is_cyrillic('\u{04FF}'));
        assert!(!is_cyrillic('\u{0500}'));
        assert!(!is_cyrillic('z'));
    }

    use crate::locale::{EN_GLYPHS, RU_GLYPHS};

    #[test]
    fn quote_sets_are_disjoint() {
        for c in ['«', '„', '‘', '‹', '‚'] {
            assert!(!is_closing_quote(c), "{c} must not be closing");
        }
        for glyphs in [&EN_GLYPHS, &RU_GLYPHS] {
            for c in ['«', '»', '„', '“', '”', '‘', '’'] {
                assert!(
                    !(opens_quotation(c, glyphs) && closes_quotation(c, glyphs)),
                    "{c} is both opening and closing"
                );
            }
        }
    }

    #[test]
    fn left_double_quote_direction_follows_locale() {
        assert!(opens_quotation('“', &EN_GLYPHS));
        assert!(!closes_quotation('“', &EN_GLYPHS));
        assert!(closes_quotation('“', &RU_GLYPHS));
        assert!(!opens_quotation('“', &RU_GLYPHS));
    }

    #[test]
    fn non_whitespace_neighbours() {
        assert_eq!(last_non_whitespace("ab  \t"), Some('b'));
        assert_eq!(last_non_whitespace("   "), None);
        assert_eq!(first_non_whitespace("\n x"), Some('x'));
    }
}
