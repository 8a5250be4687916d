//! Text and JSON rendering of a search page.

use std::sync::Arc;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;

use pkg_hub_catalog::CatalogEntry;
use pkg_hub_core::CatalogView;

use crate::nav::PageLinks;

/// "Showing 26-50 of 100 results" summary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ShowingDetails {
    pub count: usize,
    /// The search text, when one is active.
    pub filter: Option<String>,
    pub limit: usize,
    /// Current page index (already in range).
    pub page: usize,
}

impl std::fmt::Display for ShowingDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.count == 0 {
            write!(f, "No results")?;
        } else {
            let first = (self.page * self.limit + 1).min(self.count);
            let last = ((self.page + 1) * self.limit).min(self.count);
            let noun = if self.count == 1 { "result" } else { "results" };
            write!(f, "Showing {}-{} of {} {}", first, last, self.count, noun)?;
        }
        if let Some(filter) = &self.filter {
            write!(f, " for \"{}\"", filter)?;
        }
        Ok(())
    }
}

/// Log the page, its summary, and navigation links.
pub(crate) fn print_page(view: &CatalogView, details: &ShowingDetails, links: &PageLinks) {
    log::info!("{}", details.if_supports_color(Stdout, |t| t.bold()));
    crate::log_blank();

    for entry in &view.displayable {
        print_entry(entry);
    }

    if let Some(prev) = &links.previous {
        log::info!(
            "Previous: {}",
            prev.if_supports_color(Stdout, |t| t.cyan())
        );
    }
    if let Some(next) = &links.next {
        log::info!("Next:     {}", next.if_supports_color(Stdout, |t| t.cyan()));
    }
}

fn print_entry(entry: &CatalogEntry) {
    let languages: Vec<&str> = entry
        .supported_languages()
        .iter()
        .map(|l| l.display_name())
        .collect();

    log::info!(
        "{} {}",
        entry.name.if_supports_color(Stdout, |t| t.bold()),
        entry.version.if_supports_color(Stdout, |t| t.dimmed()),
    );
    if !languages.is_empty() {
        log::info!(
            "  {}",
            languages
                .join(", ")
                .if_supports_color(Stdout, |t| t.green())
        );
    }
    if !entry.description.is_empty() {
        log::info!("  {}", entry.description);
    }
}

/// Machine-readable form of one page.
#[derive(Debug, Serialize)]
pub(crate) struct JsonPage<'a> {
    pub query: &'a str,
    pub language: Option<&'static str>,
    pub page: usize,
    pub page_limit: usize,
    pub total: usize,
    /// Set when the requested offset was out of range.
    pub corrected: Option<&'a str>,
    pub previous: Option<&'a str>,
    pub next: Option<&'a str>,
    pub packages: &'a [Arc<CatalogEntry>],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(count: usize, page: usize, filter: Option<&str>) -> String {
        ShowingDetails {
            count,
            filter: filter.map(str::to_string),
            limit: 25,
            page,
        }
        .to_string()
    }

    #[test]
    fn first_page() {
        assert_eq!(details(100, 0, None), "Showing 1-25 of 100 results");
    }

    #[test]
    fn partial_last_page() {
        assert_eq!(details(60, 2, None), "Showing 51-60 of 60 results");
    }

    #[test]
    fn single_result_with_filter() {
        assert_eq!(
            details(1, 0, Some("nag")),
            "Showing 1-1 of 1 result for \"nag\""
        );
    }

    #[test]
    fn no_results() {
        assert_eq!(details(0, 0, None), "No results");
        assert_eq!(details(0, 0, Some("zzz")), "No results for \"zzz\"");
    }

    #[test]
    fn json_page_serializes_packages() {
        let entries = vec![Arc::new(CatalogEntry::new("cdk-nag", "2.0.0"))];
        let page = JsonPage {
            query: "nag",
            language: Some("python"),
            page: 0,
            page_limit: 0,
            total: 1,
            corrected: None,
            previous: None,
            next: None,
            packages: &entries,
        };
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["packages"][0]["name"], "cdk-nag");
        assert_eq!(value["language"], "python");
        assert_eq!(value["next"], serde_json::Value::Null);
    }
}
