use std::convert::Infallible;

use autopage_core::RequestParams;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut, From};

/// Tracing target for pagination parameter extraction.
const TRACING_TARGET: &str = "autopage_axum::extract::page_query";

/// Pagination parameter extractor.
///
/// Decodes every query pair of the request into [`RequestParams`] and records
/// the request path, so that pages built from it can link to their
/// neighbours. Extraction never fails: unusable `page` or `per_page` values
/// fall back to their defaults when read.
///
/// # Examples
///
/// ```rust,no_run
/// use autopage_axum::extract::PageQuery;
/// use autopage_core::should_paginate;
///
/// // Route: /orders?page=2&per_page=20&status=open
/// async fn list_orders(PageQuery(params): PageQuery) -> String {
///     format!("paginate: {}", should_paginate(&params))
/// }
/// ```
#[must_use]
#[derive(Debug, Clone, Default, Deref, DerefMut, From)]
pub struct PageQuery(pub RequestParams);

impl PageQuery {
    /// Creates a new [`PageQuery`] wrapper around the provided parameters.
    #[inline]
    pub fn new(inner: RequestParams) -> Self {
        Self(inner)
    }

    /// Consumes the wrapper and returns the inner parameters.
    #[inline]
    pub fn into_inner(self) -> RequestParams {
        self.0
    }

    /// Decodes the parameters of a request.
    pub(crate) fn from_parts(parts: &Parts) -> Self {
        let params = RequestParams::from_path_and_query(parts.uri.path(), parts.uri.query());

        tracing::trace!(
            target: TRACING_TARGET,
            path = parts.uri.path(),
            params = params.query().len(),
            "Extracted pagination parameters"
        );

        Self(params)
    }
}

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts))
    }
}
