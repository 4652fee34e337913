//! Paginator configuration.

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::constants::pagination::{DEFAULT_PER_PAGE, MAX_PER_PAGE, MIN_PER_PAGE};
use crate::{Error, Result};

/// Paginator configuration.
///
/// # Environment Variables
///
/// With the `config` feature, all options can be set via environment variables:
/// - `PAGINATION_DEFAULT_PER_PAGE` - Page size when the request carries none (default: 15, range: 1-100)
/// - `PAGINATION_WRAP_UNPAGINATED` - Wrap non-paginated results in `{ "data": [...] }` (default: false)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct PaginationConfig {
    /// Page size used when a request does not carry a usable `per_page`.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "PAGINATION_DEFAULT_PER_PAGE", default_value_t = DEFAULT_PER_PAGE)
    )]
    #[serde(default = "default_per_page")]
    pub default_per_page: u32,

    /// Wrap non-paginated results in a `data` object instead of a bare array.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "PAGINATION_WRAP_UNPAGINATED", default_value_t = false)
    )]
    #[serde(default)]
    pub wrap_unpaginated: bool,
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

impl PaginationConfig {
    /// Returns a config with the given default page size.
    #[inline]
    pub fn with_default_per_page(mut self, default_per_page: u32) -> Self {
        self.default_per_page = default_per_page;
        self
    }

    /// Returns a config that wraps non-paginated results.
    #[inline]
    pub fn with_wrap_unpaginated(mut self, wrap_unpaginated: bool) -> Self {
        self.wrap_unpaginated = wrap_unpaginated;
        self
    }

    /// Validates all configuration values.
    ///
    /// # Errors
    ///
    /// Returns a [`Config`] error if the default page size is outside `[1, 100]`.
    ///
    /// [`Config`]: crate::ErrorKind::Config
    pub fn validate(&self) -> Result<()> {
        if !(MIN_PER_PAGE..=MAX_PER_PAGE).contains(&self.default_per_page) {
            return Err(Error::config(format!(
                "Default page size {} is invalid. Must be between {} and {}.",
                self.default_per_page, MIN_PER_PAGE, MAX_PER_PAGE
            )));
        }

        Ok(())
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_per_page: DEFAULT_PER_PAGE,
            wrap_unpaginated: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn default_config_is_valid() {
        let config = PaginationConfig::default();
        assert_eq!(config.default_per_page, 15);
        assert!(!config.wrap_unpaginated);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn out_of_range_default_is_rejected() {
        for per_page in [0, 101, 1000] {
            let config = PaginationConfig::default().with_default_per_page(per_page);
            let error = config.validate().err().map(|e| e.kind());
            assert_eq!(error, Some(ErrorKind::Config));
        }

        let config = PaginationConfig::default().with_default_per_page(100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn deserialize_fills_defaults() -> anyhow::Result<()> {
        let config: PaginationConfig = serde_json::from_str("{}")?;
        assert_eq!(config, PaginationConfig::default());

        let config: PaginationConfig =
            serde_json::from_str(r#"{ "default_per_page": 25, "wrap_unpaginated": true }"#)?;
        assert_eq!(config.default_per_page, 25);
        assert!(config.wrap_unpaginated);
        Ok(())
    }

    #[cfg(feature = "config")]
    #[test]
    fn parse_from_cli_arguments() -> anyhow::Result<()> {
        use clap::Parser;

        #[derive(Parser)]
        struct Cli {
            #[clap(flatten)]
            pagination: PaginationConfig,
        }

        let cli = Cli::try_parse_from(["app", "--default-per-page", "30", "--wrap-unpaginated"])?;
        assert_eq!(cli.pagination.default_per_page, 30);
        assert!(cli.pagination.wrap_unpaginated);
        Ok(())
    }
}
