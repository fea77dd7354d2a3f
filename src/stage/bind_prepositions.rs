use crate::{
    context::Context,
    rewrite::{Flanks, replace_flanked},
    stage::Stage,
    unicode::starts_word_group,
};
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

/// Closed set of short Russian prepositions and conjunctions that must not be
/// left hanging at the end of a line.
pub const PREPOSITIONS: &[&str] = &[
    "обо", "для", "без", "при", "над", "под", "про", "но", "на", "по", "за", "из", "от", "до",
    "со", "ко", "об", "во", "в", "к", "с", "у", "о", "и", "а",
];

static PREPOSITION_GAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)({})[ \t]+", PREPOSITIONS.join("|"))).expect("valid regex")
});

/// Bind a short preposition or conjunction to the following word (ru only).
///
/// The word must stand at the start of the text or right after whitespace, an
/// opening bracket or an opening quote. Any run of spaces after it collapses to
/// a single space: `в   доме` → `в доме`, `(на  столе)` → `(на столе)`.
///
/// The binding space is a plain U+0020, not a no-break space.
#[derive(Debug, Clone, Copy, Default)]
pub struct BindPrepositions;

#[inline]
fn is_standalone_word(f: Flanks) -> bool {
    f.before.is_none_or(starts_word_group) && f.after.is_some_and(|c| !c.is_whitespace())
}

impl Stage for BindPrepositions {
    fn name(&self) -> &'static str {
        "bind_prepositions"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        ctx.is_ru() && !text.is_empty()
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        replace_flanked(
            text,
            &PREPOSITION_GAP,
            |_, f| is_standalone_word(f),
            |caps, out| {
                out.push_str(&caps[1]);
                out.push(' ');
            },
        )
    }
}
