//! Allocation-aware regex rewriting shared by the spacing and symbol stages.
//!
//! Every helper takes a `Cow<str>` and hands it back untouched (same pointer)
//! when the rewrite leaves the text identical, so a chain of rules that finds
//! nothing to do never allocates.
//!
//! The `regex` crate has no look-around. Rules that depend on the character
//! just before or just after a match go through [`replace_flanked`], which
//! matches the core of the pattern and then inspects the neighbours itself.

use regex::{Captures, Regex, Replacer};
use std::borrow::Cow;

/// The characters directly adjacent to a match in the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flanks {
    pub before: Option<char>,
    pub after: Option<char>,
}

/// `Regex::replace_all` that returns the input `Cow` when nothing changed.
pub fn replace_all<'a, R: Replacer>(text: Cow<'a, str>, re: &Regex, rep: R) -> Cow<'a, str> {
    let replaced = match re.replace_all(&text, rep) {
        Cow::Owned(s) if s != *text => Some(s),
        _ => None,
    };
    replaced.map_or(text, Cow::Owned)
}

/// Replace every match of `re` whose neighbours satisfy `accept`.
///
/// A rejected match does not consume input: scanning resumes one character
/// after the rejected match start, so a valid match overlapping a rejected one
/// is still found. Accepted matches are consumed as usual.
pub fn replace_flanked<'a, A, W>(
    text: Cow<'a, str>,
    re: &Regex,
    accept: A,
    mut rewrite: W,
) -> Cow<'a, str>
where
    A: Fn(&Captures<'_>, Flanks) -> bool,
    W: FnMut(&Captures<'_>, &mut String),
{
    let rewritten = {
        let src: &str = &text;
        let mut out: Option<String> = None;
        let mut last = 0;
        let mut pos = 0;

        while pos <= src.len() {
            let Some(caps) = re.captures_at(src, pos) else {
                break;
            };
            let Some(m) = caps.get(0) else {
                break;
            };
            let flanks = Flanks {
                before: src[..m.start()].chars().next_back(),
                after: src[m.end()..].chars().next(),
            };

            if !accept(&caps, flanks) {
                pos = m.start() + char_len_at(src, m.start());
                continue;
            }

            let buf = out.get_or_insert_with(|| String::with_capacity(src.len() + 8));
            buf.push_str(&src[last..m.start()]);
            rewrite(&caps, buf);
            last = m.end();
            pos = if m.end() > m.start() {
                m.end()
            } else {
                m.end() + char_len_at(src, m.end())
            };
        }

        out.and_then(|mut buf| {
            buf.push_str(&src[last..]);
            (buf != src).then_some(buf)
        })
    };

    rewritten.map_or(text, Cow::Owned)
}

/// Byte length of the character starting at `at`, or 1 past the end.
#[inline(always)]
fn char_len_at(src: &str, at: usize) -> usize {
    src[at..].chars().next().map_or(1, char::len_utf8)
}
