//! The pagination helper.
//!
//! [`Paginator`] decides whether a request wants a paginated response,
//! applies pagination to a [`Queryable`] and shapes the result into an
//! [`IndexResponse`]. It holds no state besides its configuration, so a
//! single instance can be cloned into every handler that needs it.

use crate::config::PaginationConfig;
use crate::offset::OffsetPagination;
use crate::page::PageResult;
use crate::params::{self, RequestParams};
use crate::queryable::Queryable;
use crate::response::{IndexResponse, PaginatedResponse};
use crate::source::DeferredSource;
use crate::{Error, Result};

/// Tracing target for pagination decisions.
const TRACING_TARGET: &str = "autopage_core::paginator";

/// Request-driven paginator for deferred queries and in-memory sequences.
#[derive(Debug, Clone, Default)]
pub struct Paginator {
    config: PaginationConfig,
}

impl Paginator {
    /// Creates a paginator with the given configuration.
    ///
    /// An out-of-range default page size is clamped when used; call
    /// [`Paginator::from_config`] to reject it up front instead.
    pub fn new(config: PaginationConfig) -> Self {
        Self { config }
    }

    /// Creates a paginator after validating the configuration.
    pub fn from_config(config: PaginationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Returns `true` if the request wants a paginated response.
    ///
    /// See [`params::should_paginate`].
    #[inline]
    pub fn should_paginate(&self, params: &RequestParams) -> bool {
        params::should_paginate(params)
    }

    /// Applies pagination using the configured default page size.
    pub async fn apply_pagination<S>(
        &self,
        queryable: Queryable<S>,
        params: &RequestParams,
    ) -> Result<PageResult<S::Item>>
    where
        S: DeferredSource,
    {
        self.apply_pagination_with(queryable, params, self.config.default_per_page)
            .await
    }

    /// Applies pagination with an explicit default page size.
    ///
    /// The page size comes from `per_page` clamped into `[1, 100]`, falling
    /// back to `default_per_page`. A deferred source is asked for the page
    /// directly; a materialized sequence is counted and sliced in memory, and
    /// a page past the end yields no items rather than an error.
    ///
    /// # Errors
    ///
    /// - [`Source`] if the deferred source fails; its error is the source.
    /// - [`InvalidInput`] if the deferred source returns more items than the
    ///   page size.
    ///
    /// [`Source`]: crate::ErrorKind::Source
    /// [`InvalidInput`]: crate::ErrorKind::InvalidInput
    pub async fn apply_pagination_with<S>(
        &self,
        queryable: Queryable<S>,
        params: &RequestParams,
        default_per_page: u32,
    ) -> Result<PageResult<S::Item>>
    where
        S: DeferredSource,
    {
        let per_page = params.per_page(default_per_page);
        let page = params.page();

        tracing::debug!(
            target: TRACING_TARGET,
            queryable = queryable.variant(),
            page,
            per_page,
            "Applying pagination"
        );

        let result = match queryable {
            Queryable::Deferred(source) => {
                let source_page = source.paginate(per_page, page).await.map_err(|error| {
                    tracing::warn!(
                        target: TRACING_TARGET,
                        error = %error,
                        page,
                        per_page,
                        "Deferred source failed to paginate"
                    );
                    Error::source_failure("paginate", "deferred source failed").with_source(error)
                })?;

                if source_page.items.len() > per_page as usize {
                    tracing::warn!(
                        target: TRACING_TARGET,
                        returned = source_page.items.len(),
                        per_page,
                        "Deferred source returned an oversized page"
                    );
                    return Err(Error::invalid_input(format!(
                        "deferred source returned {} items for a page size of {}",
                        source_page.items.len(),
                        per_page
                    )));
                }

                PageResult::new(source_page.items, source_page.total, per_page, page)
            }
            Queryable::Materialized(mut items) => {
                let total = items.len() as u64;
                let range = OffsetPagination::from_page(page, per_page).range_within(items.len());
                items.truncate(range.end);
                let items = items.split_off(range.start);
                PageResult::new(items, total, per_page, page)
            }
        };

        Ok(result.with_context(params.path().map(str::to_owned), params.query().clone()))
    }

    /// Shapes a page into the standard paginated envelope.
    ///
    /// Pass [`std::convert::identity`] to keep items unchanged.
    pub fn format_paginated_response<T, U, F>(
        &self,
        page: PageResult<T>,
        transform: F,
    ) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse::from_page(page, transform)
    }

    /// Builds the response of an index endpoint.
    ///
    /// When the request wants pagination this is [`apply_pagination`]
    /// followed by [`format_paginated_response`]. Otherwise every item is
    /// materialized, transformed and returned without a pagination block.
    ///
    /// [`apply_pagination`]: Paginator::apply_pagination
    /// [`format_paginated_response`]: Paginator::format_paginated_response
    pub async fn build_index_response<S, U, F>(
        &self,
        queryable: Queryable<S>,
        params: &RequestParams,
        transform: F,
    ) -> Result<IndexResponse<U>>
    where
        S: DeferredSource,
        F: FnMut(S::Item) -> U,
    {
        if self.should_paginate(params) {
            let page = self.apply_pagination(queryable, params).await?;
            let response = self.format_paginated_response(page, transform);
            return Ok(IndexResponse::Paginated(response));
        }

        tracing::debug!(
            target: TRACING_TARGET,
            queryable = queryable.variant(),
            "Pagination not requested, returning all items"
        );

        let items = match queryable {
            Queryable::Deferred(source) => source.fetch_all().await.map_err(|error| {
                tracing::warn!(
                    target: TRACING_TARGET,
                    error = %error,
                    "Deferred source failed to fetch all items"
                );
                Error::source_failure("fetch_all", "deferred source failed").with_source(error)
            })?,
            Queryable::Materialized(items) => items,
        };

        let data = items.into_iter().map(transform).collect();
        if self.config.wrap_unpaginated {
            Ok(IndexResponse::Wrapped { data })
        } else {
            Ok(IndexResponse::Plain(data))
        }
    }
}
