//! HTML snapshot implementing [`PageSource`].

use crate::dom::{self, Document};
use crate::encoding;
use crate::error::{Error, Result};
use crate::source::{Anchor, Heading, PageSource};

const ANCHOR_SELECTOR: &str = "a[href]";
const HEADING_SELECTOR: &str = "h1, h2, h3";

/// A parsed HTML page and the URL it was loaded from.
pub struct HtmlPage {
    document: Document,
    url: String,
    title: String,
}

impl HtmlPage {
    /// Parse `html` as the content of `url`.
    #[must_use]
    pub fn new(html: &str, url: impl Into<String>) -> Self {
        let document = dom::parse(html);
        let title = dom::query_selector_all(&document, "title")
            .iter()
            .next()
            .map(|t| collapse_title(&dom::text_content(&t)))
            .unwrap_or_default();

        Self {
            document,
            url: url.into(),
            title,
        }
    }

    /// Parse raw bytes, honoring the charset declared in the page.
    #[must_use]
    pub fn from_bytes(html: &[u8], url: impl Into<String>) -> Self {
        Self::new(&encoding::decode_html(html), url)
    }
}

/// Strip and collapse ASCII whitespace, as browsers do for `document.title`.
fn collapse_title(raw: &str) -> String {
    raw.split_ascii_whitespace().collect::<Vec<_>>().join(" ")
}

impl std::fmt::Debug for HtmlPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlPage")
            .field("url", &self.url)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

impl PageSource for HtmlPage {
    fn page_url(&self) -> &str {
        &self.url
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn anchors(&self) -> Vec<Result<Anchor>> {
        dom::query_selector_all(&self.document, ANCHOR_SELECTOR)
            .iter()
            .map(|sel| {
                let href = dom::get_attribute(&sel, "href")
                    .ok_or_else(|| Error::Element("anchor without href".to_string()))?;
                Ok(Anchor {
                    href,
                    text: dom::text_content(&sel).to_string(),
                    chain: dom::landmark_chain(&sel),
                })
            })
            .collect()
    }

    fn headings(&self) -> Vec<Result<Heading>> {
        dom::query_selector_all(&self.document, HEADING_SELECTOR)
            .iter()
            .map(|sel| {
                let level = match dom::tag_name(&sel).as_deref() {
                    Some("h1") => 1,
                    Some("h2") => 2,
                    Some("h3") => 3,
                    other => {
                        return Err(Error::Element(format!(
                            "unexpected heading element {other:?}"
                        )))
                    }
                };
                Ok(Heading {
                    level,
                    text: dom::text_content(&sel).to_string(),
                })
            })
            .collect()
    }
}
