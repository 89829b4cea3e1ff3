//! The site's fixed navigation entries.

pub const HOME_PATH: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    /// Path the entry is meant to open.
    pub link: &'static str,
    /// Fluent message id of the localized label.
    pub label_id: &'static str,
}

impl NavLink {
    /// Anchor target actually rendered. Every entry still points home until the
    /// section pages are published; `link` holds the intended destination.
    pub fn href(&self) -> &'static str {
        HOME_PATH
    }
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        name: "Home",
        link: "/",
        label_id: "nav-home",
    },
    NavLink {
        name: "Blog",
        link: "/blog",
        label_id: "nav-blog",
    },
    NavLink {
        name: "Dashboard",
        link: "/dashboard",
        label_id: "nav-dashboard",
    },
    NavLink {
        name: "Snippets",
        link: "/snippets",
        label_id: "nav-snippets",
    },
    NavLink {
        name: "Projects",
        link: "/projects",
        label_id: "nav-projects",
    },
];
