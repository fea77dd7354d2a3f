use crate::{context::Context, rewrite::replace_flanked, stage::Stage, unicode::NBSP};
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

static DIGIT_GROUPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{1,3}(?:[ \u{00A0}][0-9]{3})+").expect("valid regex"));

/// Join the thousands groups of a number with no-break spaces.
///
/// `12 345` and `1 234 567` only: the number must already be spaced into
/// 3-digit groups (plain or no-break space), and the token must not continue
/// with more digits on either side. This is the only rule of the whole chain
/// that emits U+00A0.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupDigits;

impl Stage for GroupDigits {
    fn name(&self) -> &'static str {
        "group_digits"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        text.bytes().any(|b| b.is_ascii_digit())
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        let not_digit = |c: Option<char>| !c.is_some_and(|c| c.is_ascii_digit());
        replace_flanked(
            text,
            &DIGIT_GROUPS,
            |_, f| not_digit(f.before) && not_digit(f.after),
            |caps, out| {
                out.extend(caps[0].chars().map(|c| if c == ' ' { NBSP } else { c }));
            },
        )
    }
}
