use crate::{context::Context, rewrite::replace_all, stage::Stage};
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

static SPACED_PLUS_MINUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"±[ \t]+([0-9])").expect("valid regex"));

/// `± 5` → `±5`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TightenPlusMinus;

impl Stage for TightenPlusMinus {
    fn name(&self) -> &'static str {
        "tighten_plus_minus"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        text.contains('±')
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        replace_all(text, &SPACED_PLUS_MINUS, "±$1")
    }
}
