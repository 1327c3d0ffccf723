//! String tables for the storefront chrome.
//!
//! Wires together:
//! - `i18n-embed` (bundle loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile-time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/vintage-ui.ftl
//! ```
//!
//! The chrome is English only: `init` always loads en-US, whatever the host
//! locale, and the navbar's "EN" indicator is static. Footer menu labels and
//! social labels are storefront content and render as configured.
use std::sync::Once;

use dioxus::logger::tracing::{debug, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation macro routed through the shared loader.
///
/// ```ignore
/// t!("nav-login")
/// t!("footer-copyright", year = "2025")
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; must match `domain` in `i18n.toml`.
const DOMAIN: &str = "vintage-ui";

/// The only language the chrome renders in.
const CHROME_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    FluentLanguageLoader::new(DOMAIN, chrome_language())
});

static INIT: Once = Once::new();

fn chrome_language() -> LanguageIdentifier {
    CHROME_LANGUAGE.parse().expect("valid chrome language identifier")
}

/// Load the en-US bundle. Idempotent.
pub fn init() {
    INIT.call_once(|| {
        match i18n_embed::select(&*LOADER, &Localizations, &[chrome_language()]) {
            Ok(selected) => debug!(?selected, "i18n bundle loaded"),
            Err(err) => warn!("loading the {CHROME_LANGUAGE} bundle failed ({err})"),
        }
        // Applies to the bundle loaded above: plain text, no bidi isolation
        // marks around placeables such as `{ $year }`.
        LOADER.set_use_isolating(false);
    });
}

/// Embedded language identifiers, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}
