//! Command-line front end: scan saved HTML pages, classify links, and manage
//! the scan history on disk.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use legal_docs_scanner::{
    looks_like_legal_url, record_scan,
    report::{self, Badge},
    url_utils, Classifier, HistoryEntry, HistoryStore, HtmlPage, JsonFileStore, Options,
    Scanner, Taxonomy, HISTORY_KEY,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "legal-scan")]
#[command(about = "Find terms, privacy, cookie and legal notice links in web pages")]
#[command(version)]
struct Cli {
    /// Keyword table (JSON) replacing the built-in one
    #[arg(long, global = true, env = "LEGAL_SCAN_TAXONOMY")]
    taxonomy: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a saved HTML page
    Scan {
        /// HTML file
        file: PathBuf,

        /// URL the page was loaded from
        #[arg(short, long)]
        url: String,

        /// Tab the page was open in; rescans of the same tab and URL replace each other
        #[arg(long)]
        tab_id: Option<i64>,

        /// Record the scan in the history stored in this directory
        #[arg(long, env = "LEGAL_SCAN_HISTORY")]
        history: Option<PathBuf>,

        /// Ignore h1-h3 headings
        #[arg(long)]
        no_headings: bool,

        /// Maximum number of scans kept in history
        #[arg(long, default_value_t = legal_docs_scanner::DEFAULT_HISTORY_CAPACITY)]
        capacity: usize,

        /// Print the JSON export instead of a listing
        #[arg(long)]
        export: bool,
    },

    /// Classify a link from its text and optional URL
    Classify {
        text: String,

        #[arg(short, long, default_value = "")]
        url: String,
    },

    /// Quick check whether a single URL looks like a legal document
    CheckUrl { url: String },

    /// Show, summarize or prune the recorded history
    History {
        /// History directory
        #[arg(long, env = "LEGAL_SCAN_HISTORY")]
        history: PathBuf,

        /// Print aggregate statistics as JSON
        #[arg(long)]
        stats: bool,

        /// Remove entries older than the retention window
        #[arg(long)]
        prune: bool,

        /// Retention window in days
        #[arg(long, default_value_t = legal_docs_scanner::DEFAULT_RETENTION_DAYS)]
        retention_days: i64,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_taxonomy(path: Option<&PathBuf>) -> Result<Taxonomy> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading taxonomy {}", path.display()))?;
            Taxonomy::from_json(&json)
                .with_context(|| format!("parsing taxonomy {}", path.display()))
        }
        None => Ok(Taxonomy::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let taxonomy = load_taxonomy(cli.taxonomy.as_ref())?;

    match cli.command {
        Commands::Scan {
            file,
            url,
            tab_id,
            history,
            no_headings,
            capacity,
            export,
        } => {
            if url_utils::parse_url(&url).is_none() {
                bail!("--url must be an absolute http(s) URL, got {url:?}");
            }
            let bytes = fs::read(&file).with_context(|| format!("reading {}", file.display()))?;
            let page = HtmlPage::from_bytes(&bytes, url);

            let options = Options {
                scan_headings: !no_headings,
                history_capacity: capacity,
                ..Options::default()
            };
            let result = Scanner::new(&taxonomy, &options).scan(&page);
            let badge = Badge::for_count(result.count());
            info!(count = result.count(), badge = %badge.text, "scan finished");

            if export {
                println!("{}", report::export_json(&result)?);
            } else {
                print!("{}", report::listing(&result));
            }

            if let Some(dir) = history {
                let mut store = JsonFileStore::new(dir);
                let entry = HistoryEntry::new(tab_id, result, Utc::now());
                let saved = record_scan(&mut store, HISTORY_KEY, entry, options.history_capacity)?;
                info!(entries = saved.len(), "history updated");
            }
        }

        Commands::Classify { text, url } => match Classifier::new(&taxonomy).classify(&text, &url) {
            Some(category) => println!("{} {category}", category.icon()),
            None => println!("no match"),
        },

        Commands::CheckUrl { url } => {
            if looks_like_legal_url(&url) {
                println!("legal document link: {url}");
            } else {
                println!("not a legal document link: {url}");
            }
        }

        Commands::History {
            history,
            stats,
            prune,
            retention_days,
        } => {
            let mut store = JsonFileStore::new(history);
            let mut scans = store.get(HISTORY_KEY)?.unwrap_or_default();

            if prune {
                let options = Options {
                    retention_days,
                    ..Options::default()
                };
                let removed = scans.prune_older_than(Utc::now(), options.retention());
                if removed > 0 {
                    store.set(HISTORY_KEY, &scans)?;
                }
                println!("removed {removed} entries older than {retention_days} days");
            }

            if stats {
                println!("{}", serde_json::to_string_pretty(&scans.stats())?);
            } else {
                for entry in scans.entries() {
                    println!(
                        "{}  tab={}  {}  ({} documents)",
                        entry.recorded_at.format("%Y-%m-%d %H:%M"),
                        entry
                            .page_identity
                            .tab_id
                            .map_or_else(|| "-".to_string(), |t| t.to_string()),
                        entry.page_identity.page_url,
                        entry.scan_result.count()
                    );
                }
            }
        }
    }

    Ok(())
}
