use crate::{context::Context, stage::Stage};
use phf::{Map, phf_map};
use std::borrow::Cow;

/// Typographic code points and their HTML entity spelling.
///
/// The numeric forms for `„ “ ” ’` are the legacy Windows-1252 positions.
/// Downstream consumers expect exactly these strings, so they are kept as is.
pub static ENTITIES: Map<char, &'static str> = phf_map! {
    '\u{00A0}' => "&nbsp;",
    '\u{2014}' => "&mdash;",
    '\u{2013}' => "&ndash;",
    '«' => "&laquo;",
    '»' => "&raquo;",
    '„' => "&#132;",
    '“' => "&#147;",
    '”' => "&#148;",
    '’' => "&#146;",
};

/// Rewrite the typographic code points of [`ENTITIES`] as HTML entities.
///
/// Works per Unicode scalar value, so a character is never split. Every other
/// character, including `&`, `<` and `>`, passes through unchanged: the result
/// is shown as plain text, not parsed as markup.
///
/// Idempotent: entity strings are pure ASCII and contain no table key.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeEntities;

#[inline(always)]
pub fn entity_for(c: char) -> Option<&'static str> {
    ENTITIES.get(&c).copied()
}

impl Stage for EncodeEntities {
    fn name(&self) -> &'static str {
        "encode_entities"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        // Every table key is outside ASCII.
        !text.is_ascii() && text.chars().any(|c| ENTITIES.contains_key(&c))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        let first = text
            .char_indices()
            .find(|&(_, c)| ENTITIES.contains_key(&c))
            .map(|(i, _)| i);
        let Some(first) = first else {
            return text;
        };

        let mut out = String::with_capacity(text.len() + 16);
        out.push_str(&text[..first]);
        for c in text[first..].chars() {
            match entity_for(c) {
                Some(entity) => out.push_str(entity),
                None => out.push(c),
            }
        }
        Cow::Owned(out)
    }
}
