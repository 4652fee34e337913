//! Prelude module for autopage-core.
//!
//! Re-exports the types needed to paginate from a handler with a single
//! `use` statement.
//!
//! # Example
//!
//! ```rust
//! use autopage_core::prelude::*;
//! ```

pub use crate::{
    DeferredSource, IndexResponse, PageResult, PaginatedResponse, PaginationConfig, Paginator,
    Queryable, RequestParams, SourcePage,
};
