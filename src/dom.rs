//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate, kept in one place so the rest of
//! the crate reads element names, attributes and text the same way.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

use crate::zone::Landmark;

// === Attribute Operations ===

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril`; cloning it is O(1).
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

// === Tree Navigation ===

/// Get parent element
#[inline]
#[must_use]
pub fn parent<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.parent()
}

/// Collect the landmark chain of an element: the element itself, then its
/// ancestors from nearest to furthest.
///
/// Non-element nodes (the document root) are skipped.
#[must_use]
pub fn landmark_chain(sel: &Selection) -> Vec<Landmark> {
    let mut chain = Vec::new();
    let mut current = sel.clone();

    while current.exists() {
        if let Some(tag) = tag_name(&current) {
            chain.push(Landmark::new(
                tag,
                id(&current).unwrap_or_default(),
                class_name(&current).unwrap_or_default(),
            ));
        }
        current = parent(&current);
    }

    chain
}

// === Querying ===

/// Query all elements by CSS selector, in document order
#[inline]
#[must_use]
pub fn query_selector_all<'a>(doc: &'a Document, selector: &str) -> Selection<'a> {
    doc.select(selector)
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_name_is_lowercase() {
        let doc = parse("<html><body><FOOTER id=f>x</FOOTER></body></html>");
        let sel = doc.select("#f");
        assert_eq!(tag_name(&sel).as_deref(), Some("footer"));
    }

    #[test]
    fn attributes() {
        let doc = parse(r#"<a id="x" class="a b" href="/p">t</a>"#);
        let sel = doc.select("a");
        assert_eq!(id(&sel).as_deref(), Some("x"));
        assert_eq!(class_name(&sel).as_deref(), Some("a b"));
        assert_eq!(get_attribute(&sel, "href").as_deref(), Some("/p"));
        assert_eq!(get_attribute(&sel, "title"), None);
    }

    #[test]
    fn text_content_includes_descendants() {
        let doc = parse("<p id=p>Politique <b>de</b> cookies</p>");
        let sel = doc.select("#p");
        assert_eq!(text_content(&sel).to_string(), "Politique de cookies");
    }

    #[test]
    fn landmark_chain_walks_to_root() {
        let doc = parse(
            r#"<html><body><footer class="site"><ul><li><a id="l" class="lnk" href="/x">x</a></li></ul></footer></body></html>"#,
        );
        let chain = landmark_chain(&doc.select("#l"));
        let tags: Vec<&str> = chain.iter().map(|l| l.tag.as_str()).collect();
        assert_eq!(tags, ["a", "li", "ul", "footer", "body", "html"]);
        assert_eq!(chain[0].id, "l");
        assert_eq!(chain[0].class, "lnk");
        assert_eq!(chain[3].class, "site");
    }
}
