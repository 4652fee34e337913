//! Response envelopes for index endpoints.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::page::PageResult;

/// Pagination block of a paginated response.
///
/// Serializes with exactly these keys; `from` and `to` are `null` when the
/// page is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PaginationMeta {
    /// Current page number (1-based).
    pub current_page: u64,
    /// Number of the last page.
    pub last_page: u64,
    /// Page size.
    pub per_page: u32,
    /// Total count of items across all pages.
    pub total: u64,
    /// 1-based position of the first item in this page.
    pub from: Option<u64>,
    /// 1-based position of the last item in this page.
    pub to: Option<u64>,
    /// Whether pages exist after this one.
    pub has_more: bool,
}

impl<T> From<&PageResult<T>> for PaginationMeta {
    fn from(page: &PageResult<T>) -> Self {
        Self {
            current_page: page.current_page(),
            last_page: page.last_page(),
            per_page: page.per_page(),
            total: page.total(),
            from: page.from(),
            to: page.to(),
            has_more: page.has_more(),
        }
    }
}

/// Navigation links of a paginated response.
///
/// Kept out of the JSON body; HTTP layers may expose them as a `Link` header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLinks {
    /// URL of the first page.
    pub first: Option<String>,
    /// URL of the previous page.
    pub prev: Option<String>,
    /// URL of the next page.
    pub next: Option<String>,
    /// URL of the last page.
    pub last: Option<String>,
}

impl PageLinks {
    /// Returns `true` if no link is present.
    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.prev.is_none() && self.next.is_none() && self.last.is_none()
    }

    /// Iterates over the present links as `(rel, url)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("first", &self.first),
            ("prev", &self.prev),
            ("next", &self.next),
            ("last", &self.last),
        ]
        .into_iter()
        .filter_map(|(rel, url)| url.as_deref().map(|url| (rel, url)))
    }
}

impl<T> From<&PageResult<T>> for PageLinks {
    fn from(page: &PageResult<T>) -> Self {
        Self {
            first: page.first_page_url(),
            prev: page.previous_page_url(),
            next: page.next_page_url(),
            last: page.last_page_url(),
        }
    }
}

/// Standard paginated envelope: `{ "data": [...], "pagination": {...} }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PaginatedResponse<T> {
    /// Items in this page, after transformation.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub pagination: PaginationMeta,
    /// Navigation links, not part of the body.
    #[serde(skip)]
    #[cfg_attr(feature = "schema", schemars(skip))]
    pub links: PageLinks,
}

impl<T> PaginatedResponse<T> {
    /// Builds the envelope from a page, transforming each item with `f`.
    pub fn from_page<M, F>(page: PageResult<M>, f: F) -> Self
    where
        F: FnMut(M) -> T,
    {
        let pagination = PaginationMeta::from(&page);
        let links = PageLinks::from(&page);
        Self {
            data: page.into_items().into_iter().map(f).collect(),
            pagination,
            links,
        }
    }
}

/// What an index endpoint returns.
///
/// Only the paginated form carries a `pagination` block. The other two exist
/// for callers that predate pagination: a bare JSON array, or the array
/// wrapped in `{ "data": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(untagged)]
pub enum IndexResponse<T> {
    /// A page of items with metadata.
    Paginated(PaginatedResponse<T>),
    /// Every item, wrapped in a `data` object.
    Wrapped {
        /// Every item, after transformation.
        data: Vec<T>,
    },
    /// Every item, as a bare array.
    Plain(Vec<T>),
}

impl<T> IndexResponse<T> {
    /// Returns `true` for the paginated form.
    #[inline]
    pub fn is_paginated(&self) -> bool {
        matches!(self, Self::Paginated(_))
    }

    /// Returns the items, whichever the form.
    pub fn data(&self) -> &[T] {
        match self {
            Self::Paginated(response) => &response.data,
            Self::Wrapped { data } | Self::Plain(data) => data,
        }
    }

    /// Returns the pagination metadata of the paginated form.
    pub fn pagination(&self) -> Option<&PaginationMeta> {
        match self {
            Self::Paginated(response) => Some(&response.pagination),
            Self::Wrapped { .. } | Self::Plain(_) => None,
        }
    }

    /// Returns the navigation links of the paginated form.
    pub fn links(&self) -> Option<&PageLinks> {
        match self {
            Self::Paginated(response) => Some(&response.links),
            Self::Wrapped { .. } | Self::Plain(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn pagination_meta_exact_keys() -> anyhow::Result<()> {
        let page = PageResult::new(vec![1, 2, 3], 3, 15, 1);
        let value = serde_json::to_value(PaginationMeta::from(&page))?;

        assert_eq!(
            value,
            json!({
                "current_page": 1,
                "last_page": 1,
                "per_page": 15,
                "total": 3,
                "from": 1,
                "to": 3,
                "has_more": false,
            })
        );
        Ok(())
    }

    #[test]
    fn empty_page_serializes_null_positions() -> anyhow::Result<()> {
        let page: PageResult<u32> = PageResult::new(Vec::new(), 75, 15, 6);
        let response = PaginatedResponse::from_page(page, |n| n);
        let value = serde_json::to_value(&response)?;

        assert_eq!(value["data"], json!([]));
        assert_eq!(value["pagination"]["from"], json!(null));
        assert_eq!(value["pagination"]["to"], json!(null));
        Ok(())
    }

    #[test]
    fn links_stay_out_of_the_body() -> anyhow::Result<()> {
        let page = PageResult::new(vec!["a"], 2, 1, 1)
            .with_context(Some("/letters".to_owned()), Default::default());
        let response = PaginatedResponse::from_page(page, str::to_uppercase);

        assert_eq!(response.links.next.as_deref(), Some("/letters?page=2"));
        let value = serde_json::to_value(&response)?;
        let keys: Vec<_> = value.as_object().map(|o| o.keys().cloned().collect()).unwrap_or_default();
        assert_eq!(keys, vec!["data", "pagination"]);
        assert_eq!(value["data"], json!(["A"]));
        Ok(())
    }

    #[test]
    fn link_iteration_order() {
        let links = PageLinks {
            first: Some("/x?page=1".to_owned()),
            prev: None,
            next: Some("/x?page=3".to_owned()),
            last: Some("/x?page=4".to_owned()),
        };
        let rels: Vec<_> = links.iter().map(|(rel, _)| rel).collect();
        assert_eq!(rels, vec!["first", "next", "last"]);
        assert!(!links.is_empty());
        assert!(PageLinks::default().is_empty());
    }

    #[test]
    fn index_response_forms() -> anyhow::Result<()> {
        let plain = IndexResponse::Plain(vec![1, 2]);
        assert_eq!(serde_json::to_value(&plain)?, json!([1, 2]));
        assert!(plain.pagination().is_none());

        let wrapped = IndexResponse::Wrapped { data: vec![1, 2] };
        assert_eq!(serde_json::to_value(&wrapped)?, json!({ "data": [1, 2] }));
        assert_eq!(wrapped.data(), &[1, 2]);
        assert!(!wrapped.is_paginated());
        Ok(())
    }
}
