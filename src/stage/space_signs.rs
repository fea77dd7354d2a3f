use crate::{context::Context, rewrite::replace_all, stage::Stage};
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

static SIGN_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([§№])[ \t]*(\d)").expect("valid regex"));

/// Exactly one space between `§`/`№` and the number after it (ru only).
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceSigns;

impl Stage for SpaceSigns {
    fn name(&self) -> &'static str {
        "space_signs"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        ctx.is_ru() && text.contains(['§', '№'])
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        replace_all(text, &SIGN_NUMBER, "$1 $2")
    }
}
