//! Page metadata: default/override merging and head tag generation.

use serde::Deserialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

pub const DEFAULT_TITLE: &str = "Manu Arora – Developer, writer, creator.";
pub const DEFAULT_DESCRIPTION: &str =
    "Full-Stack developer, JavaScript enthusiast, Freelancer and a Learner.";
pub const DEFAULT_IMAGE: &str = "https://manuarora.in/static/images/banner.png";
pub const DEFAULT_KIND: &str = "website";

/// Site-wide identity used for canonical URLs and social cards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteIdentity {
    /// Scheme + host, no trailing slash (`https://manuarora.in`).
    pub origin: String,
    pub site_name: String,
    pub twitter_handle: String,
}

impl Default for SiteIdentity {
    fn default() -> Self {
        Self {
            origin: "https://manuarora.in".to_string(),
            site_name: "Manu Arora".to_string(),
            twitter_handle: "@mannupaaji".to_string(),
        }
    }
}

/// Fully resolved metadata for one rendered page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub image: String,
    /// Open Graph object type (`website`, `article`, ...).
    pub kind: String,
    pub date: Option<OffsetDateTime>,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            image: DEFAULT_IMAGE.to_string(),
            kind: DEFAULT_KIND.to_string(),
            date: None,
        }
    }
}

impl PageMeta {
    /// Field-wise merge: every override that is present replaces the default.
    pub fn merge(&self, overrides: &PageMetaOverrides) -> PageMeta {
        PageMeta {
            title: overrides.title.clone().unwrap_or_else(|| self.title.clone()),
            description: overrides
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            image: overrides.image.clone().unwrap_or_else(|| self.image.clone()),
            kind: overrides.kind.clone().unwrap_or_else(|| self.kind.clone()),
            date: overrides.date.or(self.date),
        }
    }
}

/// Per-page metadata supplied by a view. Unset fields keep the site default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMetaOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub kind: Option<String>,
    pub date: Option<OffsetDateTime>,
}

impl PageMetaOverrides {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Sets the publication date from an RFC 3339 timestamp.
    pub fn published(mut self, rfc3339: &str) -> Result<Self, time::error::Parse> {
        self.date = Some(OffsetDateTime::parse(rfc3339, &Rfc3339)?);
        Ok(self)
    }
}

/// Builds the canonical URL for `path` under `origin`, with exactly one slash
/// between them.
pub fn canonical_url(origin: &str, path: &str) -> String {
    let origin = origin.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{origin}/{path}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAttr {
    Name,
    Property,
}

/// One element destined for the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    Title(String),
    Meta {
        attr: MetaAttr,
        key: &'static str,
        content: String,
    },
    Link {
        rel: &'static str,
        href: String,
    },
}

impl HeadTag {
    fn name(key: &'static str, content: impl Into<String>) -> Self {
        HeadTag::Meta {
            attr: MetaAttr::Name,
            key,
            content: content.into(),
        }
    }

    fn property(key: &'static str, content: impl Into<String>) -> Self {
        HeadTag::Meta {
            attr: MetaAttr::Property,
            key,
            content: content.into(),
        }
    }

    /// Stable identity of the tag within a head, used as a render key.
    pub fn key(&self) -> String {
        match self {
            HeadTag::Title(_) => "title".to_string(),
            HeadTag::Meta {
                attr: MetaAttr::Name,
                key,
                ..
            } => format!("name:{key}"),
            HeadTag::Meta {
                attr: MetaAttr::Property,
                key,
                ..
            } => format!("property:{key}"),
            HeadTag::Link { rel, .. } => format!("link:{rel}"),
        }
    }
}

/// Head tags for `meta` rendered at `path`.
pub fn head_tags(meta: &PageMeta, site: &SiteIdentity, path: &str) -> Vec<HeadTag> {
    let url = canonical_url(&site.origin, path);

    let mut tags = vec![
        HeadTag::Title(meta.title.clone()),
        HeadTag::name("robots", "follow, index"),
        HeadTag::name("description", meta.description.as_str()),
        HeadTag::property("og:url", url.as_str()),
        HeadTag::Link {
            rel: "canonical",
            href: url,
        },
        HeadTag::property("og:type", meta.kind.as_str()),
        HeadTag::property("og:site_name", site.site_name.as_str()),
        HeadTag::property("og:description", meta.description.as_str()),
        HeadTag::property("og:title", meta.title.as_str()),
        HeadTag::property("og:image", meta.image.as_str()),
        HeadTag::name("twitter:card", "summary_large_image"),
        HeadTag::name("twitter:site", site.twitter_handle.as_str()),
        HeadTag::name("twitter:title", meta.title.as_str()),
        HeadTag::name("twitter:description", meta.description.as_str()),
        HeadTag::name("twitter:image", meta.image.as_str()),
    ];

    if let Some(date) = meta.date {
        match date.format(&Rfc3339) {
            Ok(published) => tags.push(HeadTag::property("article:published_time", published)),
            Err(err) => tracing::warn!("skipping article:published_time ({err})"),
        }
    }

    tags
}
