use crate::{
    context::Context,
    rewrite::{Flanks, replace_all, replace_flanked},
    stage::Stage,
};
use memchr::memchr2;
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

// Latin `c` or Cyrillic `с`, any case, optional inner spaces.
static COPYRIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\([ \t]*[cс][ \t]*\)").expect("valid regex"));
static REGISTERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\([ \t]*r[ \t]*\)").expect("valid regex"));
static TRADEMARK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\([ \t]*tm[ \t]*\)").expect("valid regex"));
static PLUS_MINUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+/?-").expect("valid regex"));

/// Replace ASCII stand-ins with the real symbols.
///
/// | Input                         | Output |
/// |-------------------------------|--------|
/// | `(c)`, `(C)`, `(с)`, `( c )`  | `©`    |
/// | `(r)`, `(R)`                  | `®`    |
/// | `(tm)`, `(TM)`                | `™`    |
/// | `+/-`, `+-`                   | `±`    |
///
/// `+-` only becomes `±` as a standalone token or before a number, so
/// `C++-style` and `+--` are left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplaceSymbols;

#[inline]
fn is_plus_minus_token(f: Flanks) -> bool {
    f.before != Some('+') && f.after.is_none_or(|c| c.is_whitespace() || c.is_ascii_digit())
}

impl Stage for ReplaceSymbols {
    fn name(&self) -> &'static str {
        "replace_symbols"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        memchr2(b'(', b'+', text.as_bytes()).is_some()
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        let text = replace_all(text, &COPYRIGHT, "©");
        let text = replace_all(text, &REGISTERED, "®");
        let text = replace_all(text, &TRADEMARK, "™");
        replace_flanked(
            text,
            &PLUS_MINUS,
            |_, f| is_plus_minus_token(f),
            |_, out| out.push('±'),
        )
    }
}
