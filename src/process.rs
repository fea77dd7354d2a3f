//! Process abstraction
//! ChainedProcess is monomorphised: the compiler knows the concrete type of
//! every stage and can inline the whole rule chain. DynamicProcess is the
//! run-time list used for caller-supplied stages.
use crate::{context::Context, stage::Stage};
use smallvec::SmallVec;
use std::{borrow::Cow, sync::Arc};
use tracing::trace;

pub trait Process: Send + Sync {
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str>;
}

#[inline(always)]
fn run_stage<'a, S: Stage + ?Sized>(stage: &S, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
    if !stage.needs_apply(&text, ctx) {
        return text;
    }
    let out = stage.apply(text, ctx);
    trace!(stage = stage.name(), owned = matches!(out, Cow::Owned(_)), "stage applied");
    out
}

pub struct EmptyProcess;
impl Process for EmptyProcess {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        text
    }
}

pub struct ChainedProcess<S: Stage, P: Process> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Process> Process for ChainedProcess<S, P> {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        let current = self.previous.process(text, ctx);
        run_stage(&self.stage, current, ctx)
    }
}

#[derive(Default)]
pub struct DynamicProcess {
    pub(crate) stages: SmallVec<[Arc<dyn Stage>; 4]>,
}

impl DynamicProcess {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|s| s.name())
    }
}

impl Process for DynamicProcess {
    #[inline(always)]
    fn process<'a>(&self, mut text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        for stage in &self.stages {
            text = run_stage(stage.as_ref(), text, ctx);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::{promote_dashes::PromoteDashes, replace_symbols::ReplaceSymbols};

    #[test]
    fn chained_runs_previous_first() {
        let chain = ChainedProcess {
            stage: PromoteDashes,
            previous: ChainedProcess {
                stage: ReplaceSymbols,
                previous: EmptyProcess,
            },
        };
        let out = chain.process(Cow::Borrowed("(c) - Acme"), &Context::default());
        assert_eq!(out, "© — Acme");
    }

    #[test]
    fn dynamic_keeps_insertion_order() {
        let process = DynamicProcess::new().push(ReplaceSymbols).push(PromoteDashes);
        let names: Vec<_> = process.stage_names().collect();
        assert_eq!(names, ["replace_symbols", "promote_dashes"]);
        let out = process.process(Cow::Borrowed("(tm) - x"), &Context::default());
        assert_eq!(out, "™ — x");
    }

    #[test]
    fn empty_dynamic_is_zero_copy() {
        let input = "a - b";
        let out = DynamicProcess::new().process(Cow::Borrowed(input), &Context::default());
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }
}
