use crate::{context::Context, rewrite::replace_all, stage::Stage};
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

// `N` + Latin `o` or Cyrillic `о`, any case, optional period.
static NUMERO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bN[oо]\.?[ \t]*(\d)").expect("valid regex"));

/// `No. 5`, `No5`, `Nо 5` → `№ 5` (ru only).
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplaceNumero;

impl Stage for ReplaceNumero {
    fn name(&self) -> &'static str {
        "replace_numero"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        ctx.is_ru() && text.contains(['N', 'n'])
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        replace_all(text, &NUMERO, "№ $1")
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{assert_stage_contract, locale::Locale, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for ReplaceNumero {
        fn locales() -> &'static [Locale] {
            &[Locale::Ru]
        }

        fn should_pass_through(_locale: Locale) -> &'static [&'static str] {
            &["Nokia 3310", "Nord 5", "No doubt", "CNo 5", ""]
        }

        fn should_transform(_locale: Locale) -> &'static [(&'static str, &'static str)] {
            &[
                ("дом No. 5", "дом № 5"),
                ("дом No5", "дом № 5"),
                ("дом NO  12", "дом № 12"),
                ("дом Nо.7", "дом № 7"),
                ("дом nо 7", "дом № 7"),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(ReplaceNumero);
    }
}
