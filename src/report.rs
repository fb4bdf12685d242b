//! Output surfaces for a scan: badge, JSON export, text listing.

use chrono::NaiveDate;

use crate::error::Result;
use crate::result::ScanResult;

/// Badge colour when documents were found.
pub const BADGE_FOUND_COLOR: &str = "#4CAF50";

/// Badge colour when nothing was found.
pub const BADGE_EMPTY_COLOR: &str = "#FF5722";

/// Counter badge shown on the toolbar icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    /// Count as text, empty when zero.
    pub text: String,
    pub color: &'static str,
}

impl Badge {
    /// Badge for a page with `count` matches.
    #[must_use]
    pub fn for_count(count: usize) -> Self {
        if count > 0 {
            Self {
                text: count.to_string(),
                color: BADGE_FOUND_COLOR,
            }
        } else {
            Self {
                text: String::new(),
                color: BADGE_EMPTY_COLOR,
            }
        }
    }
}

/// Serialize the documents of a scan as pretty JSON (2-space indent).
///
/// # Example
///
/// ```rust
/// use legal_docs_scanner::{report::export_json, scan, HtmlPage};
///
/// let page = HtmlPage::new(r#"<footer><a href="/cgu">CGU</a></footer>"#, "https://shop.example/");
/// let json = export_json(&scan(&page))?;
/// assert!(json.contains(r#""foundIn": "footer""#));
/// # Ok::<(), legal_docs_scanner::Error>(())
/// ```
pub fn export_json(result: &ScanResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(&result.documents)?)
}

/// File name used when saving an export made on `date`.
#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
    format!("legal_documents_{}.json", date.format("%Y-%m-%d"))
}

/// Human-readable listing, one document per line.
#[must_use]
pub fn listing(result: &ScanResult) -> String {
    let mut out = format!("{} document(s) found on {}\n", result.count(), result.page_url);
    for doc in &result.documents {
        out.push_str(&format!(
            "{} {} [{}] {} ({})\n",
            doc.category.icon(),
            doc.category,
            doc.found_in,
            doc.url,
            doc.text
        ));
    }
    out
}
