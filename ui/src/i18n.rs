//! Localization of the shell's chrome strings.
//!
//! Built on `i18n-embed` (language selection + asset loading), `fluent`
//! (message formatting), `rust-embed` (the `.ftl` files are compiled in) and
//! `i18n-embed-fl` (compile-time checked `fl!` lookups).
//!
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/folio-ui.ftl   (fallback/reference)
//!   es-ES/folio-ui.ftl
//! ```
//!
//! Call `init()` once before rendering (it is idempotent), then use `t!` for
//! literal ids or `label()` for ids that come from data such as the nav list.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation lookup through the shared loader.
///
/// ```ignore
/// t!("skip-to-content")
/// t!("footer-rights", year = 2021, name = "Manu Arora")
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

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
pub const DOMAIN: &str = "folio-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load bundles for the user's requested languages (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => tracing::debug!("i18n selected {selected:?}"),
            Err(err) => tracing::warn!("i18n language selection failed ({err}); using fallback"),
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        tracing::debug!("ignoring invalid language tag {tag:?}");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Lookup for a message id only known at runtime.
pub fn label(id: &str) -> String {
    init();
    LOADER.get(id)
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == "en-US"));
    }

    #[test]
    fn runtime_label_lookup_matches_macro() {
        init();
        assert_eq!(label("skip-to-content"), fl!(&*LOADER, "skip-to-content"));
    }

    #[test]
    fn invalid_language_tag_is_ignored() {
        init();
        let before = fl!(&*LOADER, "toggle-dark-mode");
        assert!(set_language("not a tag!").is_ok());
        let after = fl!(&*LOADER, "toggle-dark-mode");
        assert_eq!(before, after);
    }
}
