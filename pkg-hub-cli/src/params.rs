//! URL query parameters: the boundary between address-bar text and the
//! typed [`QueryState`] / page index the engine reads.
//!
//! Everything here is total. Malformed page indexes become 0 and unknown
//! languages are ignored; nothing is reported back to the user.

use std::str::FromStr;

use pkg_hub_catalog::Language;
use pkg_hub_core::QueryState;
use url::form_urlencoded;

pub(crate) const QUERY_PARAM: &str = "q";
pub(crate) const LANGUAGE_PARAM: &str = "lang";
pub(crate) const OFFSET_PARAM: &str = "offset";

/// Parse a page index the way a lenient integer parser would.
///
/// Leading whitespace and an optional sign are accepted, then as many digits
/// as are present; anything after the digits is ignored. No digits at all,
/// or a value that does not fit in an `i64`, gives 0.
pub(crate) fn parse_page_index(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return 0;
    }

    let digits = &rest[..digits_len];
    let parsed = if negative {
        i64::from_str(&format!("-{}", digits))
    } else {
        i64::from_str(digits)
    };
    parsed.unwrap_or(0)
}

/// Decoded search parameters, keeping every pair in its original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SearchParams {
    pairs: Vec<(String, String)>,
}

impl SearchParams {
    /// Parse a query string, with or without the leading `?`.
    pub(crate) fn parse(query_string: &str) -> Self {
        let raw = query_string.strip_prefix('?').unwrap_or(query_string);
        let pairs = form_urlencoded::parse(raw.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    /// First value for `key`.
    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set `key` to `value`: the first existing pair is updated in place and
    /// any later duplicates removed; otherwise the pair is appended.
    pub(crate) fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.pairs[first].1 = value;
                let mut i = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = i <= first || k != key;
                    i += 1;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub(crate) fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub(crate) fn query(&self) -> &str {
        self.get(QUERY_PARAM).unwrap_or("")
    }

    pub(crate) fn language(&self) -> Option<Language> {
        let raw = self.get(LANGUAGE_PARAM)?;
        match raw.parse() {
            Ok(language) => Some(language),
            Err(e) => {
                log::debug!("Ignoring language parameter: {}", e);
                None
            }
        }
    }

    pub(crate) fn offset(&self) -> i64 {
        self.get(OFFSET_PARAM).map(parse_page_index).unwrap_or(0)
    }

    pub(crate) fn query_state(&self) -> QueryState {
        QueryState::new(self.query()).with_language(self.language())
    }

    pub(crate) fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}
