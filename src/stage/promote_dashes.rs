use crate::{
    context::Context,
    rewrite::{Flanks, replace_all, replace_flanked},
    stage::Stage,
    unicode::EM_DASH,
};
use memchr::memchr;
use regex::{Captures, Regex};
use std::{borrow::Cow, sync::LazyLock};

static SPACED_HYPHEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*-[ \t]+").expect("valid regex"));
// Horizontal whitespace only: a dash at a line edge keeps its line break.
static DASH_PADDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^\S\n]+)?—([^\S\n]+)?").expect("valid regex"));

/// Promote a spaced hyphen to an em dash, then normalise the padding around
/// every em dash to one plain space per side.
///
/// `a - b` and `a  -  b` both become `a — b`; `a -b`, `well-known` and
/// `2010-2020` keep their hyphen. `a —  b` is tightened to `a — b`, while
/// `a—b` stays unspaced.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromoteDashes;

#[inline]
fn is_flanked_by_words(f: Flanks) -> bool {
    let solid = |c: char| !c.is_whitespace() && c != '-';
    f.before.is_some_and(solid) && f.after.is_some_and(solid)
}

fn pad_dash(caps: &Captures<'_>) -> String {
    let mut out = String::with_capacity(5);
    if caps.get(1).is_some() {
        out.push(' ');
    }
    out.push(EM_DASH);
    if caps.get(2).is_some() {
        out.push(' ');
    }
    out
}

impl Stage for PromoteDashes {
    fn name(&self) -> &'static str {
        "promote_dashes"
    }

    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        memchr(b'-', text.as_bytes()).is_some() || text.contains(EM_DASH)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        let text = replace_flanked(
            text,
            &SPACED_HYPHEN,
            |_, f| is_flanked_by_words(f),
            |_, out| out.push_str(" — "),
        );
        replace_all(text, &DASH_PADDING, pad_dash)
    }
}
