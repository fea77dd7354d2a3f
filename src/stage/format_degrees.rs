use crate::{context::Context, rewrite::replace_all, stage::Stage};
use regex::{Captures, Regex};
use std::{borrow::Cow, sync::LazyLock};

static TEMPERATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9])[ \t]*(?:°|º|deg)[ \t]*([cf])\b").expect("valid regex")
});

/// `25°c`, `25 º C`, `77deg F` → `25 °C`, `77 °F`.
///
/// The ordinal indicator `º` is accepted as a mistyped degree sign.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatDegrees;

fn temperature(caps: &Captures<'_>) -> String {
    format!("{} °{}", &caps[1], caps[2].to_ascii_uppercase())
}

impl Stage for FormatDegrees {
    fn name(&self) -> &'static str {
        "format_degrees"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        text.contains(['°', 'º'])
            || text
                .as_bytes()
                .windows(3)
                .any(|w| w.eq_ignore_ascii_case(b"deg"))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        replace_all(text, &TEMPERATURE, temperature)
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{assert_stage_contract, locale::Locale, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for FormatDegrees {
        fn should_pass_through(_locale: Locale) -> &'static [&'static str] {
            &["25 °C", "90°", "degree", "5 deg celsius", ""]
        }

        fn should_transform(_locale: Locale) -> &'static [(&'static str, &'static str)] {
            &[
                ("25°c", "25 °C"),
                ("25 º C", "25 °C"),
                ("77deg F", "77 °F"),
                ("-40 DEGf", "-40 °F"),
                ("от 5°C до 10°C", "от 5 °C до 10 °C"),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(FormatDegrees);
    }
}
