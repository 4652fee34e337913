//! Constants used throughout the crate.

/// Page size and page number bounds.
pub mod pagination {
    /// Page size used when the request does not carry a usable `per_page`.
    pub const DEFAULT_PER_PAGE: u32 = 15;

    /// Smallest page size a request can ask for.
    pub const MIN_PER_PAGE: u32 = 1;

    /// Largest page size a request can ask for.
    pub const MAX_PER_PAGE: u32 = 100;

    /// Page selected when the request does not carry a usable `page`.
    pub const FIRST_PAGE: u64 = 1;
}

/// Recognized query parameter keys and values.
pub mod query {
    /// Selects the page window.
    pub const PAGE: &str = "page";

    /// Selects the page size.
    pub const PER_PAGE: &str = "per_page";

    /// Disables pagination when it carries [`PAGINATE_DISABLED`].
    pub const PAGINATE: &str = "paginate";

    /// The only `paginate` value that disables pagination.
    pub const PAGINATE_DISABLED: &str = "false";
}
