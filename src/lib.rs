pub mod context;
pub mod locale;
pub mod mode;
pub mod process;
pub mod profile;
pub mod rewrite;
pub mod stage;
pub mod typograph;
pub mod unicode;

pub use context::Context;
pub use locale::{Locale, ParseLocaleError, QuoteGlyphs};
pub use mode::{OutputMode, ParseModeError};
pub use stage::Stage;
pub use stage::convert_quotes::{ConvertQuotes, QuoteScan, scan_quotes};
pub use stage::encode_entities::EncodeEntities;
pub use typograph::{Typograph, TypographBuilder};

use std::borrow::Cow;

static ALL_LOCALES: &[Locale] = &[Locale::Ru, Locale::En];

pub fn all_locales() -> &'static [Locale] {
    ALL_LOCALES
}

/// Typograph `text` to Unicode glyphs, detecting the locale from the text.
///
/// ```
/// assert_eq!(typograph::to_unicode("He said \"hi\" now."), "He said “hi” now.");
/// assert_eq!(typograph::to_unicode("a - b"), "a — b");
/// ```
pub fn to_unicode(text: &str) -> Cow<'_, str> {
    Typograph::default().to_unicode(text)
}

/// [`to_unicode`], then the typographic characters as HTML entities.
///
/// ```
/// assert_eq!(typograph::to_html("«x»"), "&laquo;x&raquo;");
/// assert_eq!(typograph::to_html("a — b"), "a &mdash; b");
/// ```
pub fn to_html(text: &str) -> Cow<'_, str> {
    Typograph::default().to_html(text)
}

/// Entity-encode already typographed text.
pub fn encode_entities(text: &str) -> Cow<'_, str> {
    profile::preset::entities().run(Cow::Borrowed(text), &Context::default())
}
