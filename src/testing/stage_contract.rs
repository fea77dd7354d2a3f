use crate::{context::Context, locale::Locale, stage::Stage};
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// Locales in which the stage is active. Locale-gated stages return `&[Locale::Ru]`.
    fn locales() -> &'static [Locale] {
        crate::all_locales()
    }

    /// General test samples (may or may not trigger changes).
    fn samples(_locale: Locale) -> &'static [&'static str] {
        &["Hello World 123", " déjà-vu ", "TEST", "", "Привет, мир"]
    }

    /// Samples that must come back borrowed and unchanged.
    fn should_pass_through(_locale: Locale) -> &'static [&'static str] {
        &["hello", "world", "test123", "abc def", ""]
    }

    /// Input/output pairs that verify the rewrite itself.
    fn should_transform(_locale: Locale) -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies the universal stage contracts.
///
/// 1. `zero_copy_when_no_changes`: an unchanged result is the very same borrow
/// 2. `stage_is_idempotent`: applying twice yields the same result as once
/// 3. `needs_apply_is_sound`: `needs_apply == false` implies `apply` is a no-op
/// 4. `handles_empty_string`: empty in, empty out
/// 5. `no_panic_on_mixed_scripts`: survives pathological real-world input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::needs_apply_is_sound($stage);
        $crate::testing::stage_contract::handles_empty_string($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    for &locale in S::locales() {
        let ctx = Context::new(locale);

        for &input in S::samples(locale) {
            let out = stage.apply(Cow::Borrowed(input), &ctx);
            if out == input {
                assert!(
                    matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()),
                    "`{}` allocated without changing `{input}` ({locale})",
                    stage.name()
                );
            }
        }

        for &pass_through in S::should_pass_through(locale) {
            let out = stage.apply(Cow::Borrowed(pass_through), &ctx);
            assert_eq!(out.as_ref(), pass_through);
            assert!(
                matches!(out, Cow::Borrowed(s) if s.as_ptr() == pass_through.as_ptr()),
                "zero-copy violated on pass-through sample ({locale}, input: `{pass_through}`)"
            );
        }

        for &(input, expected) in S::should_transform(locale) {
            let out = stage.apply(Cow::Borrowed(input), &ctx);
            assert_eq!(
                out.as_ref(),
                expected,
                "`{}` in {locale} on `{input}`",
                stage.name()
            );
        }
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    for &locale in crate::all_locales() {
        let ctx = Context::new(locale);
        let inputs = S::samples(locale)
            .iter()
            .copied()
            .chain(S::should_transform(locale).iter().map(|(i, _)| *i));
        for input in inputs {
            let once = stage.apply(Cow::Borrowed(input), &ctx).into_owned();
            let twice = stage.apply(Cow::Borrowed(once.as_str()), &ctx);
            assert_eq!(
                once,
                twice.as_ref(),
                "`{}` not idempotent in {locale} on `{input}`",
                stage.name()
            );
        }
    }
}

pub fn needs_apply_is_sound<S: StageTestConfig>(stage: S) {
    for &locale in crate::all_locales() {
        let ctx = Context::new(locale);
        let inputs = S::samples(locale)
            .iter()
            .chain(S::should_pass_through(locale))
            .copied()
            .chain(S::should_transform(locale).iter().map(|(i, _)| *i));
        for input in inputs {
            let predicted = stage.needs_apply(input, &ctx);
            let output = stage.apply(Cow::Owned(input.to_owned()), &ctx);
            if !predicted {
                assert_eq!(
                    output.as_ref(),
                    input,
                    "needs_apply() said no for `{}` in {locale}, but apply() changed `{input}`",
                    stage.name()
                );
            }
        }
    }
}

pub fn handles_empty_string<S: StageTestConfig>(stage: S) {
    for &locale in crate::all_locales() {
        let ctx = Context::new(locale);
        assert!(!stage.needs_apply("", &ctx));
        assert_eq!(stage.apply(Cow::Borrowed(""), &ctx).as_ref(), "");
    }
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    for &locale in crate::all_locales() {
        let ctx = Context::new(locale);
        let _ = stage.apply(
            Cow::Borrowed("Hello 世界 \"русский\" - Türkçe 'العربية' 1 000 € 简体中文 🇫🇷\r\n"),
            &ctx,
        );
    }
}
