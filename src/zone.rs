//! Structural zone of a link (footer, navigation, header, page).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where on the page a legal document reference was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Header,
    Footer,
    Navigation,
    /// Anywhere outside a landmark.
    Page,
    /// Accepted when reading stored records; the scanner reports `Page` instead.
    Body,
}

impl Zone {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Footer => "footer",
            Self::Navigation => "navigation",
            Self::Page => "page",
            Self::Body => "body",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag, id and class of one element in a link's ancestor chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Landmark {
    /// Lowercase tag name.
    pub tag: String,
    pub id: String,
    pub class: String,
}

impl Landmark {
    #[must_use]
    pub fn new(tag: impl Into<String>, id: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: id.into(),
            class: class.into(),
        }
    }

    /// Element with only a tag name.
    #[must_use]
    pub fn tag(tag: impl Into<String>) -> Self {
        Self::new(tag, "", "")
    }

    /// `<name>` element, or class/id containing `name`.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.tag == name || self.id.contains(name) || self.class.contains(name)
    }
}

/// Resolve the zone of an element from its chain (element first, then
/// ancestors up to the root).
///
/// A footer anywhere in the chain wins over navigation, which wins over a
/// header, regardless of nesting depth.
#[must_use]
pub fn zone_for(chain: &[Landmark]) -> Zone {
    const PRIORITY: [(&str, Zone); 3] = [
        ("footer", Zone::Footer),
        ("nav", Zone::Navigation),
        ("header", Zone::Header),
    ];

    PRIORITY
        .iter()
        .find(|(name, _)| chain.iter().any(|l| l.is(name)))
        .map_or(Zone::Page, |&(_, zone)| zone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_chain_is_page() {
        let chain = [Landmark::tag("a"), Landmark::tag("p"), Landmark::tag("body")];
        assert_eq!(zone_for(&chain), Zone::Page);
        assert_eq!(zone_for(&[]), Zone::Page);
    }

    #[test]
    fn footer_tag_class_and_id() {
        let by_tag = [Landmark::tag("a"), Landmark::tag("footer")];
        let by_class = [Landmark::tag("a"), Landmark::new("div", "", "site-footer dark")];
        let by_id = [Landmark::tag("a"), Landmark::new("div", "page-footer", "")];
        assert_eq!(zone_for(&by_tag), Zone::Footer);
        assert_eq!(zone_for(&by_class), Zone::Footer);
        assert_eq!(zone_for(&by_id), Zone::Footer);
    }

    #[test]
    fn footer_outranks_nearer_nav() {
        let chain = [
            Landmark::tag("a"),
            Landmark::tag("nav"),
            Landmark::tag("footer"),
        ];
        assert_eq!(zone_for(&chain), Zone::Footer);
    }

    #[test]
    fn nav_outranks_header() {
        let chain = [
            Landmark::tag("a"),
            Landmark::new("ul", "", "navbar"),
            Landmark::tag("header"),
        ];
        assert_eq!(zone_for(&chain), Zone::Navigation);
    }

    #[test]
    fn header_zone() {
        let chain = [Landmark::tag("a"), Landmark::tag("header"), Landmark::tag("body")];
        assert_eq!(zone_for(&chain), Zone::Header);
    }

    #[test]
    fn element_itself_counts() {
        let chain = [Landmark::new("a", "", "footer-link"), Landmark::tag("div")];
        assert_eq!(zone_for(&chain), Zone::Footer);
    }

    #[test]
    fn zone_serializes_lowercase() {
        let json = serde_json::to_string(&Zone::Navigation).unwrap_or_default();
        assert_eq!(json, "\"navigation\"");
        let body: Zone = serde_json::from_str("\"body\"").unwrap_or(Zone::Page);
        assert_eq!(body, Zone::Body);
    }
}
