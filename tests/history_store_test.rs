use chrono::{DateTime, Duration, Utc};
use legal_docs_scanner::{
    record_scan, scan, Category, HistoryEntry, HistoryStore, HtmlPage, JsonFileStore,
    ScanHistory, HISTORY_KEY,
};

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap_or_default()
}

fn scan_entry(tab: i64, url: &str, html: &str, secs: i64) -> HistoryEntry {
    let result = scan(&HtmlPage::new(html, url));
    HistoryEntry::new(Some(tab), result, at(secs))
}

#[test]
fn missing_history_file_reads_as_none() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path());
    assert!(store.get(HISTORY_KEY).expect("get").is_none());
}

#[test]
fn rescans_of_one_tab_replace_each_other_on_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = JsonFileStore::new(dir.path().join("nested"));

    let before = r#"<footer><a href="/cgu">CGU</a></footer>"#;
    let after = r#"<footer><a href="/cgu">CGU</a><a href="/cookies">Cookies</a></footer>"#;

    record_scan(&mut store, HISTORY_KEY, scan_entry(5, "https://a.com", before, 0), 50)
        .expect("first record");
    record_scan(&mut store, HISTORY_KEY, scan_entry(6, "https://b.com", before, 1), 50)
        .expect("second record");
    record_scan(&mut store, HISTORY_KEY, scan_entry(5, "https://a.com", after, 2), 50)
        .expect("rescan");

    let history = store.get(HISTORY_KEY).expect("get").expect("stored");
    assert_eq!(history.len(), 2);

    let a = &history.entries()[1];
    assert_eq!(a.page_identity.page_url, "https://a.com/");
    assert_eq!(a.recorded_at, at(2));
    let categories: Vec<Category> = a.scan_result.documents.iter().map(|d| d.category).collect();
    assert_eq!(categories, [Category::Cgu, Category::Cookies]);
}

#[test]
fn stored_file_is_a_json_array_with_schema_names() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = JsonFileStore::new(dir.path());
    record_scan(
        &mut store,
        HISTORY_KEY,
        scan_entry(1, "https://a.com/", r#"<nav><a href="/privacy">Privacy</a></nav>"#, 0),
        50,
    )
    .expect("record");

    let raw = std::fs::read_to_string(dir.path().join("scan_history.json")).expect("read");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("json");
    let doc = &json[0]["scanResult"]["documents"][0];
    assert_eq!(doc["type"], "Politique de confidentialité");
    assert_eq!(doc["url"], "https://a.com/privacy");
    assert_eq!(doc["text"], "Privacy");
    assert_eq!(doc["foundIn"], "navigation");
    assert!(raw.contains("\n  {"), "expected 2-space indentation");
}

#[test]
fn capacity_bounds_the_stored_history() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = JsonFileStore::new(dir.path());
    for i in 0..5 {
        record_scan(
            &mut store,
            HISTORY_KEY,
            scan_entry(i, &format!("https://s{i}.com/"), "<p>nothing</p>", i),
            3,
        )
        .expect("record");
    }
    let history = store.get(HISTORY_KEY).expect("get").expect("stored");
    assert_eq!(history.len(), 3);
    assert_eq!(history.entries()[0].page_identity.page_url, "https://s4.com/");
    assert_eq!(history.entries()[2].page_identity.page_url, "https://s2.com/");
}

#[test]
fn prune_then_save() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = JsonFileStore::new(dir.path());
    let day = 24 * 3600;
    let history = ScanHistory::new()
        .merge(scan_entry(1, "https://old.com/", "<p/>", 0))
        .merge(scan_entry(2, "https://new.com/", "<p/>", 40 * day));
    store.set(HISTORY_KEY, &history).expect("set");

    let mut loaded = store.get(HISTORY_KEY).expect("get").expect("stored");
    assert_eq!(loaded.prune_older_than(at(41 * day), Duration::days(30)), 1);
    store.set(HISTORY_KEY, &loaded).expect("set");

    let reloaded = store.get(HISTORY_KEY).expect("get").expect("stored");
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.stats().total_scans, 1);
}

#[test]
fn corrupt_history_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("scan_history.json"), "{not json").expect("write");
    let store = JsonFileStore::new(dir.path());
    assert!(matches!(
        store.get(HISTORY_KEY),
        Err(legal_docs_scanner::Error::Json(_))
    ));
}
