//! Prelude module for autopage-axum.
//!
//! # Example
//!
//! ```rust
//! use autopage_axum::prelude::*;
//! ```

pub use autopage_core::prelude::*;

pub use crate::extract::{PageQuery, Paginate};
pub use crate::handler::{Error, ErrorKind, PageJson, Result};
