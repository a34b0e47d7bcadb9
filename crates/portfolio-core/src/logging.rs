//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::error::{PortfolioError, PortfolioResult};

/// Filter used when neither `RUST_LOG` nor a flag says otherwise.
pub const DEFAULT_FILTER: &str = "info";

/// Build the filter: `RUST_LOG` wins, then `fallback`, then [`DEFAULT_FILTER`].
pub fn env_filter(fallback: Option<&str>) -> PortfolioResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(fallback.unwrap_or(DEFAULT_FILTER))
        .map_err(|e| PortfolioError::Logging(e.to_string()))
}

/// Install the global fmt subscriber.
///
/// # Errors
///
/// Returns `PortfolioError::Logging` if the filter does not parse or a
/// global subscriber is already set.
pub fn init(fallback: Option<&str>) -> PortfolioResult<()> {
    let filter = env_filter(fallback)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| PortfolioError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_directive_is_reported() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert!(matches!(
            env_filter(Some("portfolio=notalevel")),
            Err(PortfolioError::Logging(_))
        ));
        assert!(env_filter(Some("portfolio_core=debug")).is_ok());
        assert!(env_filter(None).is_ok());
    }
}
