use std::convert::Infallible;

use autopage_core::{DeferredSource, Paginator, Queryable, RequestParams};
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;

use crate::extract::PageQuery;
use crate::handler::{PageJson, Result};

/// The router's [`Paginator`] bound to the parameters of the current request.
///
/// Requires the router state to provide a [`Paginator`] through [`FromRef`].
///
/// # Examples
///
/// ```rust,no_run
/// use autopage_axum::extract::Paginate;
/// use autopage_axum::handler::{PageJson, Result};
/// use autopage_core::{Paginator, Queryable};
/// use axum::Router;
/// use axum::routing::get;
///
/// async fn list_tags(paginate: Paginate) -> Result<PageJson<String>> {
///     let tags = Queryable::materialized(["rust", "axum", "serde"]);
///     paginate.index(tags, str::to_owned).await
/// }
///
/// let app: Router = Router::new()
///     .route("/tags", get(list_tags))
///     .with_state(Paginator::default());
/// ```
#[derive(Debug, Clone)]
pub struct Paginate {
    paginator: Paginator,
    params: RequestParams,
}

impl Paginate {
    /// Returns the paginator.
    #[inline]
    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Returns the parameters of the current request.
    #[inline]
    pub fn params(&self) -> &RequestParams {
        &self.params
    }

    /// Returns `true` if the current request wants a paginated response.
    #[inline]
    pub fn should_paginate(&self) -> bool {
        self.paginator.should_paginate(&self.params)
    }

    /// Builds the response of an index endpoint for the current request.
    pub async fn index<S, U, F>(&self, queryable: Queryable<S>, transform: F) -> Result<PageJson<U>>
    where
        S: DeferredSource,
        F: FnMut(S::Item) -> U,
    {
        let response = self
            .paginator
            .build_index_response(queryable, &self.params, transform)
            .await?;

        Ok(PageJson(response))
    }
}

impl<S> FromRequestParts<S> for Paginate
where
    Paginator: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self {
            paginator: Paginator::from_ref(state),
            params: PageQuery::from_parts(parts).into_inner(),
        })
    }
}
