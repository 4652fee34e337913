//! A single page of results with its length-aware metadata.

use std::collections::BTreeMap;

use url::form_urlencoded;

use crate::constants::pagination::FIRST_PAGE;
use crate::constants::query::PAGE;

/// One page of items together with everything needed to describe it.
///
/// Built through [`PageResult::new`], which derives the metadata from the
/// total and the window so the following always hold:
///
/// - `last_page == max(1, ceil(total / per_page))`
/// - `has_more == (current_page < last_page)`
/// - `from`/`to` are the 1-based positions of the first and last item, and
///   are `None` when `items` is empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult<T> {
    items: Vec<T>,
    current_page: u64,
    last_page: u64,
    per_page: u32,
    total: u64,
    from: Option<u64>,
    to: Option<u64>,
    has_more: bool,
    path: Option<String>,
    query: BTreeMap<String, String>,
}

impl<T> PageResult<T> {
    /// Creates a page from its items, the total count and the requested window.
    pub fn new(items: Vec<T>, total: u64, per_page: u32, current_page: u64) -> Self {
        let per_page = per_page.max(1);
        let current_page = current_page.max(FIRST_PAGE);
        let last_page = total.div_ceil(per_page as u64).max(FIRST_PAGE);

        let (from, to) = if items.is_empty() {
            (None, None)
        } else {
            let from = (current_page - 1)
                .saturating_mul(per_page as u64)
                .saturating_add(1);
            let to = from.saturating_add(items.len() as u64 - 1);
            (Some(from), Some(to))
        };

        Self {
            items,
            current_page,
            last_page,
            per_page,
            total,
            from,
            to,
            has_more: current_page < last_page,
            path: None,
            query: BTreeMap::new(),
        }
    }

    /// Attaches the request path and query used to build navigation links.
    pub fn with_context(mut self, path: Option<String>, query: BTreeMap<String, String>) -> Self {
        self.path = path;
        self.query = query;
        self
    }

    /// Returns the items in this page.
    #[inline]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page and returns its items.
    #[inline]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Returns the current page number (1-based).
    #[inline]
    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    /// Returns the number of the last page; `1` when there are no items at all.
    #[inline]
    pub fn last_page(&self) -> u64 {
        self.last_page
    }

    /// Returns the page size.
    #[inline]
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Returns the total count of items across all pages.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns the 1-based position of the first item in this page.
    #[inline]
    pub fn from(&self) -> Option<u64> {
        self.from
    }

    /// Returns the 1-based position of the last item in this page.
    #[inline]
    pub fn to(&self) -> Option<u64> {
        self.to
    }

    /// Returns `true` if pages exist after this one.
    #[inline]
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Returns the request path this page was built for.
    #[inline]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Returns the URL of page `page`: the request path and query with `page` replaced.
    ///
    /// Returns `None` when no request path is attached.
    pub fn page_url(&self, page: u64) -> Option<String> {
        let path = self.path.as_deref()?;
        let page = page.max(FIRST_PAGE).to_string();

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.query.iter().filter(|(key, _)| key.as_str() != PAGE) {
            serializer.append_pair(key, value);
        }
        serializer.append_pair(PAGE, &page);

        Some(format!("{}?{}", path, serializer.finish()))
    }

    /// Returns the URL of the first page.
    pub fn first_page_url(&self) -> Option<String> {
        self.page_url(FIRST_PAGE)
    }

    /// Returns the URL of the last page.
    pub fn last_page_url(&self) -> Option<String> {
        self.page_url(self.last_page)
    }

    /// Returns the URL of the previous page, if this is not the first one.
    pub fn previous_page_url(&self) -> Option<String> {
        match self.current_page {
            FIRST_PAGE => None,
            current => self.page_url(current - 1),
        }
    }

    /// Returns the URL of the next page, if there are more pages.
    pub fn next_page_url(&self) -> Option<String> {
        self.has_more
            .then(|| self.page_url(self.current_page + 1))
            .flatten()
    }

    /// Maps the items to a different type, keeping the metadata.
    pub fn map<U, F>(self, f: F) -> PageResult<U>
    where
        F: FnMut(T) -> U,
    {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            last_page: self.last_page,
            per_page: self.per_page,
            total: self.total,
            from: self.from,
            to: self.to,
            has_more: self.has_more,
            path: self.path,
            query: self.query,
        }
    }
}
