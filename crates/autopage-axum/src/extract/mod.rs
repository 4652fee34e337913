//! Request extractors for paginated handlers.
//!
//! - [`PageQuery`] - Pagination parameters of the current request
//! - [`Paginate`] - The router's paginator bound to those parameters

mod page_query;
mod paginate;

pub use crate::extract::page_query::PageQuery;
pub use crate::extract::paginate::Paginate;
