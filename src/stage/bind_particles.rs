use crate::{
    context::Context,
    rewrite::{Flanks, replace_flanked},
    stage::Stage,
};
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

pub const PARTICLES: &[&str] = &["же", "ли", "ль", "бы", "б"];

static PARTICLE_GAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"[ \t]+({})", PARTICLES.join("|"))).expect("valid regex")
});

/// Bind a trailing particle to the preceding word (ru only).
///
/// `он  же`, `так ли`, `если  бы` get exactly one space before the particle.
/// The particle must end the word: `он быстро` is untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct BindParticles;

#[inline]
fn is_trailing_particle(f: Flanks) -> bool {
    f.before.is_some_and(|c| !c.is_whitespace()) && f.after.is_none_or(|c| !c.is_alphanumeric())
}

impl Stage for BindParticles {
    fn name(&self) -> &'static str {
        "bind_particles"
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
            &PARTICLE_GAP,
            |_, f| is_trailing_particle(f),
            |caps, out| {
                out.push(' ');
                out.push_str(&caps[1]);
            },
        )
    }
}
