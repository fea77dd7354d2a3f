use crate::{
    context::Context,
    locale::Locale,
    mode::OutputMode,
    process::{DynamicProcess, Process},
    profile::preset,
    stage::Stage,
};
use std::borrow::Cow;
use tracing::debug;

/// Configured typograph.
///
/// The locale is detected from every input unless pinned with
/// [`TypographBuilder::locale`]. Extra stages run after the built-in rules
/// and before entity encoding.
pub struct Typograph {
    mode: OutputMode,
    locale: Option<Locale>,
    extra: DynamicProcess,
}

impl Default for Typograph {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Typograph {
    pub fn builder() -> TypographBuilder {
        TypographBuilder::default()
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Context for one invocation: pinned locale or detection on `text`.
    pub fn context_for(&self, text: &str) -> Context {
        match self.locale {
            Some(locale) => Context::new(locale),
            None => Context::detect(text),
        }
    }

    /// Typograph `text` in the configured output mode.
    pub fn process<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.process_as(text, self.mode)
    }

    pub fn to_unicode<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.process_as(text, OutputMode::Unicode)
    }

    pub fn to_html<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.process_as(text, OutputMode::Html)
    }

    pub fn process_as<'a>(&self, text: &'a str, mode: OutputMode) -> Cow<'a, str> {
        if text.is_empty() {
            return Cow::Borrowed(text);
        }
        let ctx = self.context_for(text);
        debug!(locale = %ctx.locale, %mode, "typographing");

        if self.extra.is_empty() {
            return match mode {
                OutputMode::Unicode => preset::unicode().run(Cow::Borrowed(text), &ctx),
                OutputMode::Html => preset::html().run(Cow::Borrowed(text), &ctx),
            };
        }

        let out = preset::unicode().run(Cow::Borrowed(text), &ctx);
        let out = self.extra.process(out, &ctx);
        match mode {
            OutputMode::Unicode => out,
            OutputMode::Html => preset::entities().run(out, &ctx),
        }
    }
}

pub struct TypographBuilder {
    mode: OutputMode,
    locale: Option<Locale>,
    extra: DynamicProcess,
}

impl Default for TypographBuilder {
    fn default() -> Self {
        Self {
            mode: OutputMode::default(),
            locale: None,
            extra: DynamicProcess::new(),
        }
    }
}

impl TypographBuilder {
    pub fn mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Pin the locale instead of detecting it per input.
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn add_stage<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.extra = self.extra.push(stage);
        self
    }

    pub fn build(self) -> Typograph {
        Typograph {
            mode: self.mode,
            locale: self.locale,
            extra: self.extra,
        }
    }
}
