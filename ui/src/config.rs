//! Site configuration, embedded at compile time from `site.toml`.
//!
//! Every field has a built-in default, so the file only needs to list what
//! differs. A malformed file is logged and the defaults are used instead.

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use crate::core::meta::{
    PageMeta, SiteIdentity, DEFAULT_DESCRIPTION, DEFAULT_IMAGE, DEFAULT_KIND, DEFAULT_TITLE,
};
use crate::core::theme::ThemeMode;

const SITE_TOML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/site.toml"));

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DefaultMeta {
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Default for DefaultMeta {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            image: DEFAULT_IMAGE.to_string(),
            kind: DEFAULT_KIND.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub identity: SiteIdentity,
    pub defaults: DefaultMeta,
    /// Mode used until the client has a stored preference.
    pub theme: ThemeMode,
    pub footer: Vec<FooterLink>,
}

impl SiteConfig {
    pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(src)?)
    }

    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml(SITE_TOML)
    }

    pub fn page_defaults(&self) -> PageMeta {
        PageMeta {
            title: self.defaults.title.clone(),
            description: self.defaults.description.clone(),
            image: self.defaults.image.clone(),
            kind: self.defaults.kind.clone(),
            date: None,
        }
    }
}

static SITE: Lazy<SiteConfig> = Lazy::new(|| match SiteConfig::embedded() {
    Ok(config) => config,
    Err(err) => {
        tracing::error!("{err}; falling back to built-in site defaults");
        SiteConfig::default()
    }
});

/// The site configuration, parsed once on first use.
pub fn site() -> &'static SiteConfig {
    &SITE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_file_parses() {
        let config = SiteConfig::embedded().expect("site.toml should parse");
        assert_eq!(config.identity.origin, "https://manuarora.in");
        assert!(!config.footer.is_empty());
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config = SiteConfig::from_toml("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.page_defaults(), PageMeta::default());
        assert_eq!(config.theme, ThemeMode::Light);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = SiteConfig::from_toml(
            r#"
            theme = "dark"

            [defaults]
            title = "Notes"
            "#,
        )
        .unwrap();

        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.defaults.title, "Notes");
        assert_eq!(config.defaults.kind, DEFAULT_KIND);
        assert_eq!(config.identity, SiteIdentity::default());
    }

    #[test]
    fn theme_is_read_like_a_stored_preference() {
        for (raw, expected) in [("Dark", ThemeMode::Dark), (" LIGHT ", ThemeMode::Light)] {
            let config = SiteConfig::from_toml(&format!("theme = \"{raw}\"")).unwrap();
            assert_eq!(config.theme, expected);
            assert_eq!(raw.parse::<ThemeMode>().unwrap(), expected);
        }
    }

    #[test]
    fn malformed_file_is_an_error() {
        let err = SiteConfig::from_toml("theme = \"sepia\"").unwrap_err();
        assert!(err.to_string().starts_with("invalid site configuration"));
    }
}
