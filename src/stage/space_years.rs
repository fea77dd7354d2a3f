use crate::{context::Context, rewrite::replace_flanked, stage::Stage};
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

static YEAR_ABBREVIATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{3,4})[ \t]*г\.").expect("valid regex"));

/// `1999   г.` and `1999г.` → `1999 г.` (ru only).
///
/// Only 3- and 4-digit years qualify; longer digit runs are left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceYears;

impl Stage for SpaceYears {
    fn name(&self) -> &'static str {
        "space_years"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        ctx.is_ru() && text.contains("г.")
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        replace_flanked(
            text,
            &YEAR_ABBREVIATION,
            |_, f| !f.before.is_some_and(|c| c.is_ascii_digit()),
            |caps, out| {
                out.push_str(&caps[1]);
                out.push_str(" г.");
            },
        )
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{assert_stage_contract, locale::Locale, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for SpaceYears {
        fn locales() -> &'static [Locale] {
            &[Locale::Ru]
        }

        fn should_pass_through(_locale: Locale) -> &'static [&'static str] {
            &["в 1999 г.", "12345 г.", "12 г.", ""]
        }

        fn should_transform(_locale: Locale) -> &'static [(&'static str, &'static str)] {
            &[
                ("в 1999   г.", "в 1999 г."),
                ("в 1999г.", "в 1999 г."),
                ("в 988\tг.", "в 988 г."),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(SpaceYears);
    }
}
