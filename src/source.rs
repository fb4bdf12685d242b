//! Document access boundary.
//!
//! The scanner never parses markup itself. It reads a page through
//! [`PageSource`], which hands out anchors and headings in document order
//! together with the landmark chain needed to place each link in a zone.
//! [`HtmlPage`](crate::page::HtmlPage) implements it over an HTML snapshot;
//! tests and embedders can provide their own.

use crate::error::Result;
use crate::zone::Landmark;

/// An `<a href>` element as seen by the scanner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Anchor {
    /// Raw `href` attribute, possibly relative.
    pub href: String,
    /// Visible text, untrimmed.
    pub text: String,
    /// The anchor itself followed by its ancestors, nearest first.
    pub chain: Vec<Landmark>,
}

/// An `h1`-`h3` element as seen by the scanner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Heading {
    /// Heading level, 1 to 3.
    pub level: u8,
    /// Visible text, untrimmed.
    pub text: String,
}

/// A loaded page the scanner can walk.
///
/// Element accessors return one `Result` per element so that a single
/// unreadable element is skipped instead of failing the whole scan.
pub trait PageSource {
    /// URL of the page, used as the base for relative links.
    fn page_url(&self) -> &str;

    /// Document title, empty when absent.
    fn title(&self) -> &str;

    /// Anchors carrying an `href`, in document order.
    fn anchors(&self) -> Vec<Result<Anchor>>;

    /// Headings of levels 1 to 3, in document order.
    fn headings(&self) -> Vec<Result<Heading>>;
}
