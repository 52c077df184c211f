//! # Steam Scout
//!
//! An interactive Steam store scraper: search by keyword, export the results
//! as JSON and CSV, then drill into individual games.
//!
//! ## Architecture
//!
//! ```text
//! keyword → Fetcher → ListingExtractor → Exporter
//!                                          ↓
//!            link → Fetcher → DetailExtractor → Console
//! ```
//!
//! - [`fetcher`]: HTTP client with request timeout and age-gate cookie
//! - [`extractor`]: Selector-driven field extraction from store pages
//! - [`catalog`]: Tag ID to name resolution
//! - [`export`]: JSON and CSV output
//! - [`session`]: The interactive state machine tying it together
//!
//! ## Quick Start
//!
//! ```bash
//! # Uses data/tags.json and writes to resultfiles/
//! BIRTHTIME=470703601 steam-scout
//!
//! # Custom locations
//! steam-scout --tags ./tags.json --output-dir ./out
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the catalog,
/// extractors, fetcher and exporter.
pub mod app;

/// Tag catalog loaded once at startup.
pub mod catalog;

/// Command-line flags using clap.
pub mod cli;

/// Configuration loaded from `~/.config/steam-scout/config.toml`:
/// store host and timeout, paths, selectors and console colors.
pub mod config;

/// Prompting and colored output.
///
/// - [`Console`](console::Console): Async trait the session talks through
/// - [`TerminalConsole`](console::TerminalConsole): stdin/stdout implementation
pub mod console;

/// Listing and detail records.
pub mod domain;

/// JSON and CSV export of a search batch.
pub mod export;

/// Page extraction.
///
/// - [`ListingExtractor`](extractor::ListingExtractor): search results → listings
/// - [`DetailExtractor`](extractor::DetailExtractor): game page → details
pub mod extractor;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for page fetching
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Opening exported files with the system's default application.
pub mod opener;

/// The interactive session loop.
pub mod session;
