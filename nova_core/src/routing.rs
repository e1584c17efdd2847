//! Fragment-routed locations.
//!
//! The site is served as a single static page; the route lives after the
//! `#`, so no server rewrite rules are needed. A hash carries a path and an
//! optional in-page anchor:
//!
//! ```text
//! #/            -> "/"
//! #/contact     -> "/contact"
//! #/#skills     -> "/"         anchor "skills"
//! #academic     -> "/"         anchor "academic"   (bare anchor)
//! ```

use crate::types::NavItem;

/// Element id of the Academic Recognition section.
pub const ANCHOR_ACADEMIC: &str = "academic";
/// Element id of the Skill Development section.
pub const ANCHOR_SKILLS: &str = "skills";

/// Top-level pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    /// Landing page, also the catch-all
    Home,
    /// Contact form
    Contact,
}

impl Page {
    /// Route a path. Unknown paths fall back to [`Page::Home`].
    pub fn from_path(path: &str) -> Self {
        match path {
            "/contact" => Self::Contact,
            _ => Self::Home,
        }
    }

    /// Canonical path.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Contact => "/contact",
        }
    }
}

/// Where the visitor is: a path plus an optional in-page anchor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    path: String,
    anchor: Option<String>,
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl Location {
    /// `/` with no anchor.
    pub fn root() -> Self {
        Self {
            path: "/".to_string(),
            anchor: None,
        }
    }

    /// Location from parts. The path is normalized (leading slash, no
    /// trailing slash, no query); an empty anchor counts as none.
    pub fn new(path: &str, anchor: Option<&str>) -> Self {
        let path = path.split('?').next().unwrap_or_default().trim();
        let path = path.trim_end_matches('/');
        let path = if path.is_empty() {
            "/".to_string()
        } else if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        let anchor = anchor
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string);
        Self { path, anchor }
    }

    /// Parse `window.location.hash` (with or without the leading `#`).
    pub fn parse_hash(hash: &str) -> Self {
        let raw = hash.strip_prefix('#').unwrap_or(hash).trim();
        if raw.is_empty() {
            return Self::root();
        }
        if !raw.starts_with('/') {
            return Self::new("/", Some(raw));
        }
        match raw.split_once('#') {
            Some((path, anchor)) => Self::new(path, Some(anchor)),
            None => Self::new(raw, None),
        }
    }

    /// Normalized path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// In-page anchor, if any.
    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    /// Page this location renders.
    pub fn page(&self) -> Page {
        Page::from_path(&self.path)
    }

    /// Link target for this location.
    pub fn href(&self) -> String {
        match &self.anchor {
            Some(anchor) => format!("#{}#{anchor}", self.path),
            None => format!("#{}", self.path),
        }
    }
}

impl NavItem {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }

    /// Where this item leads.
    pub fn target(&self) -> Location {
        Location::parse_hash(&self.href)
    }

    /// Highlight test: the full location must match, anchor included, so
    /// Home is not lit while the visitor sits on one of its sections.
    pub fn is_active(&self, current: &Location) -> bool {
        self.target() == *current
    }
}

/// The fixed primary navigation, in display order.
pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", "#/"),
        NavItem::new("Academic Recognition", "#/#academic"),
        NavItem::new("Skill Development", "#/#skills"),
        NavItem::new("Contact", "#/contact"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_hashes_are_root() {
        for hash in ["", "#", "#/", "  "] {
            assert_eq!(Location::parse_hash(hash), Location::root(), "{hash:?}");
        }
    }

    #[test]
    fn parses_paths_and_anchors() {
        let contact = Location::parse_hash("#/contact");
        assert_eq!(contact.path(), "/contact");
        assert_eq!(contact.anchor(), None);
        assert_eq!(contact.page(), Page::Contact);

        let skills = Location::parse_hash("#/#skills");
        assert_eq!(skills.path(), "/");
        assert_eq!(skills.anchor(), Some("skills"));
        assert_eq!(skills.page(), Page::Home);

        let form = Location::parse_hash("#/contact#form");
        assert_eq!(form.path(), "/contact");
        assert_eq!(form.anchor(), Some("form"));
    }

    #[test]
    fn bare_anchor_lands_on_home() {
        let academic = Location::parse_hash("#academic");
        assert_eq!(academic.path(), "/");
        assert_eq!(academic.anchor(), Some(ANCHOR_ACADEMIC));
    }

    #[test]
    fn trailing_slash_and_query_are_normalized() {
        assert_eq!(Location::parse_hash("#/contact/").path(), "/contact");
        assert_eq!(Location::parse_hash("#/contact?ref=footer").path(), "/contact");
        assert_eq!(Location::parse_hash("#/#").anchor(), None);
    }

    #[test]
    fn unknown_paths_fall_back_to_home() {
        assert_eq!(Location::parse_hash("#/admissions").page(), Page::Home);
        assert_eq!(Page::from_path("/nope/deeper"), Page::Home);
        assert_eq!(Page::from_path("/"), Page::Home);
    }

    #[test]
    fn href_round_trips() {
        for hash in ["#/", "#/contact", "#/#academic", "#/contact#form"] {
            assert_eq!(Location::parse_hash(hash).href(), hash);
        }
    }

    #[test]
    fn nav_has_four_fixed_entries() {
        let labels: Vec<_> = nav_items().into_iter().map(|item| item.label).collect();
        assert_eq!(
            labels,
            ["Home", "Academic Recognition", "Skill Development", "Contact"]
        );
    }

    #[test]
    fn exactly_one_nav_item_is_active_per_known_location() {
        let items = nav_items();
        for (hash, expected) in [
            ("#/", "Home"),
            ("#/#academic", "Academic Recognition"),
            ("#/#skills", "Skill Development"),
            ("#/contact", "Contact"),
        ] {
            let current = Location::parse_hash(hash);
            let active: Vec<_> = items
                .iter()
                .filter(|item| item.is_active(&current))
                .map(|item| item.label.as_str())
                .collect();
            assert_eq!(active, [expected], "{hash}");
        }
    }

    #[test]
    fn nothing_is_active_on_unlisted_locations() {
        let current = Location::parse_hash("#/admissions");
        assert!(nav_items().iter().all(|item| !item.is_active(&current)));
    }
}
