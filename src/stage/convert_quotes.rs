use crate::{
    context::Context,
    locale::{QuoteGlyphs, data::APOSTROPHE},
    stage::Stage,
    unicode::{
        closes_quotation, first_non_whitespace, is_letter_or_digit, last_non_whitespace,
        opens_quotation,
    },
};
use memchr::memchr2;
use std::borrow::Cow;

/// Turn straight `"` and `'` into the locale's curly quotation marks.
///
/// A single left-to-right scan implemented as a fold over code points. The fold
/// carries a [`QuoteScan`]: the output built so far plus the current nesting
/// depth of double quotes, which picks primary vs. secondary glyphs:
///
/// | input | en          | ru          |
/// |-------|-------------|-------------|
/// | `"a "b" c"` | `“a ‘b’ c”` | `«a „b“ c»` |
/// | `it's`      | `it’s`      | `it’s`      |
/// | `'a'`       | `‘a’`       | `„a“`       |
///
/// Single quotes are never depth-tracked. An apostrophe between two letters is
/// always `’`, whatever the locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertQuotes;

/// Fold state: emitted text and the open double-quote count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteScan {
    pub depth: usize,
    pub out: String,
}

impl QuoteScan {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            depth: 0,
            out: String::with_capacity(capacity),
        }
    }

    fn push_double(&mut self, opening: bool, glyphs: &QuoteGlyphs) {
        if opening {
            self.out.push(if self.depth == 0 {
                glyphs.open_primary
            } else {
                glyphs.open_secondary
            });
            self.depth += 1;
        } else {
            self.out.push(if self.depth <= 1 {
                glyphs.close_primary
            } else {
                glyphs.close_secondary
            });
            self.depth = self.depth.saturating_sub(1);
        }
    }

    fn push_single(&mut self, opening: bool, glyphs: &QuoteGlyphs) {
        self.out.push(if opening {
            glyphs.single_open
        } else {
            glyphs.single_close
        });
    }
}

/// Decide whether a quote between `before` and `after` opens a quotation.
///
/// `before` is the text already emitted, `after` the raw text still to scan.
/// The checks are ordered; the first one that applies wins. Curly marks are
/// classified with `glyphs`, since `“` opens in `en` but closes in `ru`.
pub fn is_opening(before: &str, after: &str, glyphs: &QuoteGlyphs) -> bool {
    let Some(prev) = last_non_whitespace(before) else {
        return true;
    };
    let Some(next) = first_non_whitespace(after) else {
        return false;
    };
    if opens_quotation(prev, glyphs) {
        return true;
    }
    if closes_quotation(next, glyphs) {
        return false;
    }
    // Word boundary on exactly one side settles it.
    if before.ends_with(char::is_whitespace) {
        return true;
    }
    if after.starts_with(char::is_whitespace) {
        return false;
    }
    !is_letter_or_digit(prev)
}

/// Run the quote fold over `text`.
pub fn scan_quotes(text: &str, glyphs: &QuoteGlyphs) -> QuoteScan {
    text.char_indices().fold(
        QuoteScan::with_capacity(text.len() + 8),
        |mut scan, (i, c)| {
            let rest = &text[i + c.len_utf8()..];
            match c {
                '"' => {
                    let opening = is_opening(&scan.out, rest, glyphs);
                    scan.push_double(opening, glyphs);
                }
                '\'' => {
                    let between_letters =
                        scan.out.chars().next_back().is_some_and(char::is_alphabetic)
                            && rest.chars().next().is_some_and(char::is_alphabetic);
                    if between_letters {
                        scan.out.push(APOSTROPHE);
                    } else {
                        let opening = is_opening(&scan.out, rest, glyphs);
                        scan.push_single(opening, glyphs);
                    }
                }
                _ => scan.out.push(c),
            }
            scan
        },
    )
}

impl Stage for ConvertQuotes {
    fn name(&self) -> &'static str {
        "convert_quotes"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        memchr2(b'"', b'\'', text.as_bytes()).is_some()
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        Cow::Owned(scan_quotes(&text, ctx.glyphs).out)
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{assert_stage_contract, locale::Locale, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for ConvertQuotes {
        fn samples(_locale: Locale) -> &'static [&'static str] {
            &[
                "He said \"hi\" now.",
                "\"a \"b\" c\"",
                "it's",
                "'single'",
                "\"\"",
                "Он сказал: \"Привет\".",
                "",
            ]
        }

        fn should_transform(locale: Locale) -> &'static [(&'static str, &'static str)] {
            match locale {
                Locale::En => &[
                    ("He said \"hi\" now.", "He said “hi” now."),
                    ("\"a \"b\" c\"", "“a ‘b’ c”"),
                    ("'quoted'", "‘quoted’"),
                    ("(\"x\")", "(“x”)"),
                    ("\"Hi,\" he said.", "“Hi,” he said."),
                    ("rock 'n' roll", "rock ‘n’ roll"),
                ],
                Locale::Ru => &[
                    ("Он сказал \"привет\".", "Он сказал «привет»."),
                    (
                        "\"Книга \"Война и мир\" лежит\"",
                        "«Книга „Война и мир“ лежит»",
                    ),
                    ("'слово'", "„слово“"),
                    ("д'Артаньян", "д’Артаньян"),
                    ("\"Книга \"Война и мир\"\".", "«Книга „Война и мир“»."),
                    ("Он сказал: \"Читай 'Войну'\".", "Он сказал: «Читай „Войну“»."),
                ],
            }
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(ConvertQuotes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{EN_GLYPHS, RU_GLYPHS};

    #[test]
    fn contraction_is_right_single_quote_in_both_locales() {
        assert_eq!(scan_quotes("it's", &EN_GLYPHS).out, "it’s");
        assert_eq!(scan_quotes("it's", &RU_GLYPHS).out, "it’s");
    }

    #[test]
    fn apostrophe_does_not_touch_depth() {
        let scan = scan_quotes("\"it's", &EN_GLYPHS);
        assert_eq!(scan.depth, 1);
        assert_eq!(scan.out, "“it’s");
    }

    #[test]
    fn balanced_quotes_return_to_zero() {
        let scan = scan_quotes("\"a \"b\" c\" and \"d\"", &EN_GLYPHS);
        assert_eq!(scan.depth, 0);
    }

    #[test]
    fn stray_closing_quote_never_underflows() {
        let scan = scan_quotes("end\"", &EN_GLYPHS);
        assert_eq!(scan.out, "end”");
        assert_eq!(scan.depth, 0);
    }

    #[test]
    fn quote_at_start_opens_and_at_end_closes() {
        assert!(is_opening("", "x", &EN_GLYPHS));
        assert!(!is_opening("x", "", &EN_GLYPHS));
        assert!(!is_opening("x", "   ", &EN_GLYPHS));
    }

    #[test]
    fn punctuation_neighbours_win_over_letters() {
        // opening bracket before, even with a letter after
        assert!(is_opening("(", "a", &EN_GLYPHS));
        // em dash before
        assert!(is_opening("a —", "b", &EN_GLYPHS));
        // sentence punctuation after
        assert!(!is_opening("a", ".", &EN_GLYPHS));
        // closing bracket after
        assert!(!is_opening("a", ")", &EN_GLYPHS));
    }

    #[test]
    fn letter_before_closes_digit_before_closes() {
        assert!(!is_opening("abc", "def", &EN_GLYPHS));
        assert!(!is_opening("42", "x", &EN_GLYPHS));
        assert!(is_opening("#", "x", &EN_GLYPHS));
    }

    #[test]
    fn nested_ru_close_is_followed_by_outer_close() {
        let scan = scan_quotes("\"Книга \"Война и мир\"\".", &RU_GLYPHS);
        assert_eq!(scan.out, "«Книга „Война и мир“».");
        assert_eq!(scan.depth, 0);

        let scan = scan_quotes("Он сказал: \"Читай 'Войну'\".", &RU_GLYPHS);
        assert_eq!(scan.out, "Он сказал: «Читай „Войну“».");
        assert_eq!(scan.depth, 0);
    }

    #[test]
    fn left_double_quote_before_quote_depends_on_locale() {
        // `“` was emitted by a previous mark: it opened in en, it closed in ru.
        assert!(is_opening("a “", ".", &EN_GLYPHS));
        assert!(!is_opening("a “", ".", &RU_GLYPHS));
    }

    #[test]
    fn english_nested_close_is_followed_by_outer_close() {
        let scan = scan_quotes("She said \"read 'War'\".", &EN_GLYPHS);
        assert_eq!(scan.out, "She said “read ‘War’”.");
        assert_eq!(scan.depth, 0);
    }

    #[test]
    fn each_call_starts_at_depth_zero() {
        let first = scan_quotes("\"open", &EN_GLYPHS);
        assert_eq!(first.depth, 1);
        let second = scan_quotes("\"again", &EN_GLYPHS);
        assert_eq!(second.out, "“again");
    }
}
