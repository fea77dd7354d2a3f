//! Core typography stage abstraction.
//!
//! A typograph run is an ordered list of stages. Each stage is one total
//! `text -> text` rewrite: it never fails, it never reads anything but the
//! text and the per-call [`Context`], and it hands the input back untouched
//! (no allocation) when it has nothing to change.
//!
//! Order matters. Later stages assume the shape produced by earlier ones,
//! e.g. dash promotion runs after quotes are already curly. The canonical
//! order lives in [`crate::profile::preset`].

pub mod bind_particles;
pub mod bind_prepositions;
pub mod convert_quotes;
pub mod encode_entities;
pub mod fix_apostrophes;
pub mod format_degrees;
pub mod group_digits;
pub mod normalize_line_breaks;
pub mod promote_dashes;
pub mod replace_numero;
pub mod replace_symbols;
pub mod space_currency;
pub mod space_signs;
pub mod space_years;
pub mod tighten_plus_minus;

use crate::context::Context;
use std::borrow::Cow;

/// A single typography rule.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in trace logs.
    fn name(&self) -> &'static str;

    /// Cheap pre-check. Returning `false` guarantees `apply` would be a no-op,
    /// so the whole stage is skipped.
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool;

    /// The rewrite itself. Must return `text` unchanged (same allocation, or
    /// the same borrow) when the result would be identical to the input.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str>;
}
