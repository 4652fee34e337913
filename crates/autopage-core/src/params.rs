//! Request parameters and the rules that read them.
//!
//! Parameters are kept as raw strings. Reading a numeric value never fails:
//! anything absent or unparseable falls back to a default, and page sizes are
//! always clamped into `[MIN_PER_PAGE, MAX_PER_PAGE]`.

use std::collections::BTreeMap;

use crate::constants::pagination::{FIRST_PAGE, MAX_PER_PAGE, MIN_PER_PAGE};
use crate::constants::query::{PAGE, PAGINATE, PAGINATE_DISABLED, PER_PAGE};

/// Query parameters of a single request, plus the path they were sent to.
///
/// Every pair is kept, not only the recognized keys, so that navigation links
/// can reproduce the caller's filters. When a key is repeated the last
/// occurrence wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RequestParams {
    path: Option<String>,
    query: BTreeMap<String, String>,
}

impl RequestParams {
    /// Returns empty parameters with no path.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes parameters from a raw `application/x-www-form-urlencoded` query string.
    ///
    /// A leading `?` is ignored.
    pub fn from_query_str(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect()
    }

    /// Decodes parameters from a request path and its optional raw query string.
    pub fn from_path_and_query(path: impl Into<String>, query: Option<&str>) -> Self {
        let params = query.map(Self::from_query_str).unwrap_or_default();
        params.with_path(path)
    }

    /// Returns these parameters with the given request path.
    #[inline]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Returns these parameters with `key` set to `value`.
    #[inline]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Returns `true` if `key` was sent, whatever its value.
    #[inline]
    pub fn has(&self, key: &str) -> bool {
        self.query.contains_key(key)
    }

    /// Returns the raw value sent for `key`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// Returns the request path, if known.
    #[inline]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Returns all query pairs.
    #[inline]
    pub fn query(&self) -> &BTreeMap<String, String> {
        &self.query
    }

    /// Returns the requested page, or the first page when absent or not a
    /// positive integer.
    pub fn page(&self) -> u64 {
        self.get(PAGE)
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|page| *page >= FIRST_PAGE)
            .unwrap_or(FIRST_PAGE)
    }

    /// Returns the requested page size clamped into `[1, 100]`, or `default`
    /// when absent or invalid.
    #[inline]
    pub fn per_page(&self, default: u32) -> u32 {
        clamp_per_page(self.get(PER_PAGE), default)
    }
}

impl<K, V> FromIterator<(K, V)> for RequestParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let query = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        Self { path: None, query }
    }
}

/// Coerces a requested page size to an integer in `[1, 100]`.
///
/// Integers are clamped, so `0` and negative values become `1` and oversized
/// values become `100`. A decimal is truncated toward zero first. An absent
/// or non-numeric value yields `default`, which is clamped the same way.
pub fn clamp_per_page(requested: Option<&str>, default: u32) -> u32 {
    let clamp = |value: i64| value.clamp(MIN_PER_PAGE as i64, MAX_PER_PAGE as i64) as u32;

    match requested.and_then(coerce_integer) {
        Some(value) => clamp(value),
        None => clamp(default as i64),
    }
}

/// Parses an integer, truncating finite decimals and saturating at the `i64` bounds.
fn coerce_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<i64>() {
        return Some(value);
    }

    // `as` saturates on overflow, which the clamp absorbs.
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| value.trunc() as i64)
}

/// Decides whether a request wants a paginated response.
///
/// `paginate=false` (the exact string) always disables pagination. Otherwise
/// pagination is opt-in: it happens only when `page` or `per_page` was sent.
pub fn should_paginate(params: &RequestParams) -> bool {
    if params.get(PAGINATE) == Some(PAGINATE_DISABLED) {
        return false;
    }

    params.has(PAGE) || params.has(PER_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_per_page_bounds() {
        assert_eq!(clamp_per_page(Some("0"), 15), 1);
        assert_eq!(clamp_per_page(Some("-7"), 15), 1);
        assert_eq!(clamp_per_page(Some("500"), 15), 100);
        assert_eq!(clamp_per_page(Some("100"), 15), 100);
        assert_eq!(clamp_per_page(Some("1"), 15), 1);
        assert_eq!(clamp_per_page(Some("42"), 15), 42);
    }

    #[test]
    fn clamp_per_page_fallbacks() {
        assert_eq!(clamp_per_page(None, 15), 15);
        assert_eq!(clamp_per_page(Some(""), 15), 15);
        assert_eq!(clamp_per_page(Some("ten"), 15), 15);
        assert_eq!(clamp_per_page(Some("NaN"), 15), 15);
        assert_eq!(clamp_per_page(Some("inf"), 15), 15);
        assert_eq!(clamp_per_page(None, 0), 1);
        assert_eq!(clamp_per_page(None, 250), 100);
    }

    #[test]
    fn clamp_per_page_coercion() {
        assert_eq!(clamp_per_page(Some(" 20 "), 15), 20);
        assert_eq!(clamp_per_page(Some("12.9"), 15), 12);
        assert_eq!(clamp_per_page(Some("0.5"), 15), 1);
        assert_eq!(clamp_per_page(Some("99999999999999999999999"), 15), 100);
        assert_eq!(clamp_per_page(Some("-99999999999999999999999"), 15), 1);
    }

    #[test]
    fn clamp_per_page_always_in_range() {
        for requested in -1_000_i64..=1_000 {
            let value = clamp_per_page(Some(&requested.to_string()), 15);
            assert!((MIN_PER_PAGE..=MAX_PER_PAGE).contains(&value));
        }
    }

    #[test]
    fn should_paginate_is_opt_in() {
        assert!(!should_paginate(&RequestParams::new()));
        assert!(!should_paginate(&RequestParams::new().with("status", "open")));
        assert!(should_paginate(&RequestParams::new().with("page", "2")));
        assert!(should_paginate(&RequestParams::new().with("per_page", "10")));
        assert!(should_paginate(&RequestParams::new().with("page", "")));
    }

    #[test]
    fn should_paginate_literal_disable() {
        let params = RequestParams::new().with("page", "2").with("paginate", "false");
        assert!(!should_paginate(&params));

        assert!(!should_paginate(&RequestParams::new().with("paginate", "0")));
        assert!(should_paginate(
            &RequestParams::new().with("paginate", "0").with("page", "1")
        ));
        assert!(should_paginate(
            &RequestParams::new().with("paginate", "False").with("page", "1")
        ));
        assert!(should_paginate(
            &RequestParams::new().with("paginate", "no").with("per_page", "5")
        ));
    }

    #[test]
    fn page_defaults_to_first() {
        assert_eq!(RequestParams::new().page(), 1);
        assert_eq!(RequestParams::new().with("page", "0").page(), 1);
        assert_eq!(RequestParams::new().with("page", "-3").page(), 1);
        assert_eq!(RequestParams::new().with("page", "abc").page(), 1);
        assert_eq!(RequestParams::new().with("page", "2.5").page(), 1);
        assert_eq!(RequestParams::new().with("page", " 4 ").page(), 4);
    }

    #[test]
    fn from_query_str_decodes_pairs() {
        let params = RequestParams::from_query_str("?page=2&status=in%20review&page=3");
        assert_eq!(params.get("page"), Some("3"));
        assert_eq!(params.get("status"), Some("in review"));
        assert_eq!(params.page(), 3);
        assert!(params.path().is_none());
    }

    #[test]
    fn from_path_and_query_keeps_path() {
        let params = RequestParams::from_path_and_query("/api/orders", Some("per_page=20"));
        assert_eq!(params.path(), Some("/api/orders"));
        assert_eq!(params.per_page(15), 20);

        let params = RequestParams::from_path_and_query("/api/orders", None);
        assert_eq!(params.path(), Some("/api/orders"));
        assert!(params.query().is_empty());
    }
}
