use crate::{context::Context, stage::Stage};
use memchr::memchr;
use std::borrow::Cow;

/// Rewrite `\r\n` and lone `\r` to `\n`.
///
/// Text pasted from a UI field arrives with whatever the platform used; every
/// later rule only has to know about `\n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeLineBreaks;

impl Stage for NormalizeLineBreaks {
    fn name(&self) -> &'static str {
        "normalize_line_breaks"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        memchr(b'\r', text.as_bytes()).is_some()
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }

        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\r' {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            } else {
                out.push(c);
            }
        }
        Cow::Owned(out)
    }
}
