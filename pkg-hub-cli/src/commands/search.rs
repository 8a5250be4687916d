use std::path::PathBuf;
use std::sync::Arc;

use pkg_hub_catalog::load_catalog;
use pkg_hub_core::{CatalogFeed, CatalogView, PageCursor, SearchSession};

use crate::CliError;
use crate::cli_types::SearchArgs;
use crate::display::{self, JsonPage, ShowingDetails};
use crate::nav::{PageLinks, ParamOverrides, build_page_url};
use crate::params::{LANGUAGE_PARAM, OFFSET_PARAM, QUERY_PARAM, SearchParams, parse_page_index};
use crate::settings::Settings;

/// Result of a search after any boundary correction has been applied.
pub(crate) struct SearchOutcome {
    pub params: SearchParams,
    pub view: Arc<CatalogView>,
    /// In-range page index that `view.displayable` shows.
    pub page: usize,
    pub page_size: usize,
    /// URL the page index was corrected to, if it had to be.
    pub corrected_url: Option<String>,
    pub links: PageLinks,
}

pub(crate) fn run_search(args: SearchArgs, settings: &Settings) -> Result<(), CliError> {
    let json = args.json;
    let outcome = execute_search(args, settings)?;

    let details = ShowingDetails {
        count: outcome.view.results.len(),
        filter: Some(outcome.params.query().to_string()).filter(|q| !q.is_empty()),
        limit: outcome.page_size,
        page: outcome.page,
    };

    if json {
        let page = JsonPage {
            query: outcome.params.query(),
            language: outcome.params.language().map(|l| l.as_str()),
            page: outcome.page,
            page_limit: outcome.view.page_limit,
            total: outcome.view.results.len(),
            corrected: outcome.corrected_url.as_deref(),
            previous: outcome.links.previous.as_deref(),
            next: outcome.links.next.as_deref(),
            packages: &outcome.view.displayable,
        };
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        if let Some(url) = &outcome.corrected_url {
            log::info!("Page out of range, showing {}", url);
        }
        display::print_page(&outcome.view, &details, &outcome.links);
    }
    Ok(())
}

/// Load the catalog, derive the page, and apply at most one correction.
pub(crate) fn execute_search(
    args: SearchArgs,
    settings: &Settings,
) -> Result<SearchOutcome, CliError> {
    let catalog_path = catalog_path(args.catalog.clone(), settings)?;
    let size = page_size(args.page_size, settings);
    let mut params = resolve_params(&args);

    let feed = CatalogFeed::default();
    let mut session = SearchSession::new(feed.subscribe());
    let query = params.query_state();
    let mut cursor = PageCursor::new(params.offset(), size);

    let frame = session.refresh(&query, cursor);
    if frame.view.loading {
        log::debug!("Loading catalog from {}", catalog_path.display());
    }

    feed.publish_result(load_catalog(&catalog_path));
    let mut frame = session.refresh(&query, cursor);
    if let Some(err) = &frame.view.error {
        return Err(CliError::catalog(err.to_string()));
    }

    let mut corrected_url = None;
    if let Some(correction) = frame.correction {
        let index = i64::try_from(correction.index).unwrap_or(i64::MAX);
        corrected_url = Some(build_page_url(
            &settings.base_path,
            &params,
            ParamOverrides::offset(index),
        ));
        params.set(OFFSET_PARAM, index.to_string());
        cursor = cursor.with_index(index);
        frame = session.refresh(&query, cursor);
    }

    // Nothing corrects an offset past an empty result set.
    let page = usize::try_from(cursor.index)
        .unwrap_or(0)
        .min(frame.view.page_limit);
    let links = PageLinks::new(&settings.base_path, &params, page, frame.view.page_limit);

    Ok(SearchOutcome {
        params,
        view: frame.view,
        page,
        page_size: size,
        corrected_url,
        links,
    })
}

/// URL parameters first, then explicit flags on top.
fn resolve_params(args: &SearchArgs) -> SearchParams {
    let mut params = args
        .url
        .as_deref()
        .map(SearchParams::parse)
        .unwrap_or_default();

    if let Some(query) = &args.query {
        params.set(QUERY_PARAM, query.clone());
    }
    if let Some(language) = args.language {
        params.set(LANGUAGE_PARAM, language.as_str());
    }
    if let Some(offset) = &args.offset {
        params.set(OFFSET_PARAM, parse_page_index(offset).to_string());
    }
    params
}

fn catalog_path(flag: Option<PathBuf>, settings: &Settings) -> Result<PathBuf, CliError> {
    flag.or_else(|| settings.catalog_path.clone()).ok_or_else(|| {
        CliError::config("No catalog file given. Pass --catalog or set catalog_path in settings.")
    })
}

fn page_size(flag: Option<usize>, settings: &Settings) -> usize {
    flag.filter(|&n| n > 0).unwrap_or(settings.page_size)
}
