#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod error;
mod offset;
mod page;
mod paginator;
mod params;
mod queryable;
mod response;
mod source;

pub mod constants;
pub mod prelude;

pub use crate::config::PaginationConfig;
pub use crate::error::{BoxedError, Error, ErrorKind, Result};
pub use crate::offset::OffsetPagination;
pub use crate::page::PageResult;
pub use crate::paginator::Paginator;
pub use crate::params::{RequestParams, clamp_per_page, should_paginate};
pub use crate::queryable::Queryable;
pub use crate::response::{IndexResponse, PageLinks, PaginatedResponse, PaginationMeta};
pub use crate::source::{DeferredSource, NoSource, SourcePage};
