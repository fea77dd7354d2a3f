use crate::{context::Context, rewrite::replace_all, stage::Stage};
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

static AMOUNT_CURRENCY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9])[ \t]*([₽€£$])").expect("valid regex"));

/// `100₽`, `100   €` → `100 ₽`, `100 €`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceCurrency;

impl Stage for SpaceCurrency {
    fn name(&self) -> &'static str {
        "space_currency"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        text.contains(['₽', '€', '£', '$'])
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        replace_all(text, &AMOUNT_CURRENCY, "$1 $2")
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{assert_stage_contract, locale::Locale, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for SpaceCurrency {
        fn should_pass_through(_locale: Locale) -> &'static [&'static str] {
            &["100 ₽", "$100", "costs €", ""]
        }

        fn should_transform(_locale: Locale) -> &'static [(&'static str, &'static str)] {
            &[
                ("100₽", "100 ₽"),
                ("5   €", "5 €"),
                ("20£ and 30$", "20 £ and 30 $"),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(SpaceCurrency);
    }
}
