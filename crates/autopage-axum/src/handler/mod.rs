//! [`Error`], [`ErrorKind`], [`Result`] and the JSON responses of paginated handlers.

mod error;
mod response;

pub use error::{Error, ErrorKind, Result};
pub use response::{ErrorResponse, PageJson};
