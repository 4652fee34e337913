//! Response types for paginated HTTP handlers.

use std::borrow::Cow;

use autopage_core::{IndexResponse, PageLinks};
use axum::Json;
use axum::http::header::LINK;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use derive_more::{Deref, From};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::Serialize;

/// Tracing target for response rendering.
const TRACING_TARGET: &str = "autopage_axum::handler::response";

/// HTTP error response body.
#[must_use = "error responses do nothing unless serialized"]
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse<'a> {
    /// The error name/type identifier
    pub name: Cow<'a, str>,
    /// User-friendly error message safe for client display
    pub message: Cow<'a, str>,
    /// The resource that the error relates to (optional, set by handler)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Cow<'a, str>>,
    /// HTTP status code (not serialized in JSON)
    #[serde(skip)]
    #[cfg_attr(feature = "schema", schemars(skip))]
    pub status: StatusCode,
}

impl<'a> ErrorResponse<'a> {
    pub const BAD_REQUEST: Self = Self::new(
        "bad_request",
        "Invalid request data.",
        StatusCode::BAD_REQUEST,
    );
    pub const INTERNAL_SERVER_ERROR: Self = Self::new(
        "internal_server_error",
        "Internal server error.",
        StatusCode::INTERNAL_SERVER_ERROR,
    );
    pub const NOT_FOUND: Self =
        Self::new("not_found", "Resource not found.", StatusCode::NOT_FOUND);

    /// Creates a new [`ErrorResponse`].
    #[inline]
    pub const fn new(name: &'a str, message: &'a str, status: StatusCode) -> Self {
        Self {
            name: Cow::Borrowed(name),
            message: Cow::Borrowed(message),
            resource: None,
            status,
        }
    }

    /// Replaces the message.
    #[inline]
    pub fn with_message(mut self, message: impl Into<Cow<'a, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the resource the error relates to.
    #[inline]
    pub fn with_resource(mut self, resource: impl Into<Cow<'a, str>>) -> Self {
        self.resource = Some(resource.into());
        self
    }
}

impl IntoResponse for ErrorResponse<'_> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// JSON response of an index endpoint.
///
/// Serializes the wrapped [`IndexResponse`] as the body. A paginated response
/// with navigation links also gets an RFC 8288 `Link` header.
#[must_use]
#[derive(Debug, Clone, Deref, From)]
pub struct PageJson<T>(pub IndexResponse<T>);

impl<T> PageJson<T> {
    /// Consumes the wrapper and returns the inner response.
    #[inline]
    pub fn into_inner(self) -> IndexResponse<T> {
        self.0
    }
}

impl<T: Serialize> IntoResponse for PageJson<T> {
    fn into_response(self) -> Response {
        let link = self.links().and_then(link_header);
        let mut response = Json(self.0).into_response();

        if let Some(link) = link {
            response.headers_mut().insert(LINK, link);
        }

        response
    }
}

/// Renders navigation links as a `Link` header value.
fn link_header(links: &PageLinks) -> Option<HeaderValue> {
    if links.is_empty() {
        return None;
    }

    let value = links
        .iter()
        .map(|(rel, url)| format!("<{}>; rel=\"{}\"", url, rel))
        .collect::<Vec<_>>()
        .join(", ");

    match HeaderValue::from_str(&value) {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::warn!(
                target: TRACING_TARGET,
                error = %error,
                "Navigation links are not a valid header value"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_header_lists_present_links() {
        let links = PageLinks {
            first: Some("/orders?page=1".to_owned()),
            prev: None,
            next: Some("/orders?page=2".to_owned()),
            last: Some("/orders?page=4".to_owned()),
        };

        let header = link_header(&links);
        assert_eq!(
            header.as_ref().and_then(|h| h.to_str().ok()),
            Some(
                "</orders?page=1>; rel=\"first\", </orders?page=2>; rel=\"next\", </orders?page=4>; rel=\"last\""
            )
        );
    }

    #[test]
    fn no_links_no_header() {
        assert!(link_header(&PageLinks::default()).is_none());
    }

    #[test]
    fn plain_response_has_no_link_header() {
        let response = PageJson(IndexResponse::Plain(vec![1, 2, 3])).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(LINK).is_none());
    }

    #[test]
    fn error_response_status() {
        let response = ErrorResponse::NOT_FOUND.with_resource("order").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
