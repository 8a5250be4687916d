//! Page navigation URLs.

use pkg_hub_catalog::Language;

use crate::params::{LANGUAGE_PARAM, OFFSET_PARAM, QUERY_PARAM, SearchParams};

/// Parameters to change when building a URL. `None` leaves the current
/// value alone.
#[derive(Debug, Clone, Default)]
pub(crate) struct ParamOverrides {
    pub query: Option<String>,
    /// `Some(None)` clears the language filter.
    pub language: Option<Option<Language>>,
    /// Page index, not an item count.
    pub offset: Option<i64>,
}

impl ParamOverrides {
    pub(crate) fn offset(index: i64) -> Self {
        Self {
            offset: Some(index),
            ..Self::default()
        }
    }
}

/// Build `base_path?params` with `overrides` applied. Every parameter not
/// overridden, including ones pkg-hub does not understand, is kept.
pub(crate) fn build_page_url(
    base_path: &str,
    params: &SearchParams,
    overrides: ParamOverrides,
) -> String {
    let mut params = params.clone();
    if let Some(query) = overrides.query {
        params.set(QUERY_PARAM, query);
    }
    match overrides.language {
        Some(Some(language)) => params.set(LANGUAGE_PARAM, language.as_str()),
        Some(None) => params.remove(LANGUAGE_PARAM),
        None => {}
    }
    if let Some(offset) = overrides.offset {
        params.set(OFFSET_PARAM, offset.to_string());
    }

    let query_string = params.to_query_string();
    if query_string.is_empty() {
        base_path.to_string()
    } else {
        format!("{}?{}", base_path, query_string)
    }
}

/// Previous/next page links for the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PageLinks {
    pub previous: Option<String>,
    pub next: Option<String>,
}

impl PageLinks {
    pub(crate) fn new(
        base_path: &str,
        params: &SearchParams,
        current: usize,
        page_limit: usize,
    ) -> Self {
        let link = |index: usize| {
            build_page_url(base_path, params, ParamOverrides::offset(index as i64))
        };
        Self {
            previous: (current > 0).then(|| link(current - 1)),
            next: (current < page_limit).then(|| link(current + 1)),
        }
    }
}
