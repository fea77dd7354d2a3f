use crate::{
    context::Context,
    locale::data::APOSTROPHE,
    rewrite::{Flanks, replace_flanked},
    stage::Stage,
};
use memchr::memchr;
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

static STRAIGHT_APOSTROPHE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'").expect("valid regex"));

/// Letter, `'`, letter → letter, `’`, letter.
///
/// Re-applies the contraction rule of [`ConvertQuotes`](super::convert_quotes::ConvertQuotes)
/// for straight apostrophes that reach this point of the chain, e.g. when a
/// caller builds a pipeline without quote conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixApostrophes;

#[inline]
fn is_inside_word(f: Flanks) -> bool {
    f.before.is_some_and(char::is_alphabetic) && f.after.is_some_and(char::is_alphabetic)
}

impl Stage for FixApostrophes {
    fn name(&self) -> &'static str {
        "fix_apostrophes"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        memchr(b'\'', text.as_bytes()).is_some()
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        replace_flanked(
            text,
            &STRAIGHT_APOSTROPHE,
            |_, f| is_inside_word(f),
            |_, out| out.push(APOSTROPHE),
        )
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{assert_stage_contract, locale::Locale, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for FixApostrophes {
        fn should_pass_through(_locale: Locale) -> &'static [&'static str] {
            &["'quoted'", "it’s", "5'", "a ' b", ""]
        }

        fn should_transform(_locale: Locale) -> &'static [(&'static str, &'static str)] {
            &[
                ("it's", "it’s"),
                ("don't won't", "don’t won’t"),
                ("O'Neil's", "O’Neil’s"),
                ("д'Артаньян", "д’Артаньян"),
                ("'rock'n'roll'", "'rock’n’roll'"),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(FixApostrophes);
    }
}
