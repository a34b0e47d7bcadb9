//! Runtime configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! gives the stock page. Command-line flags are layered on top by the binary.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{PortfolioError, PortfolioResult};
use crate::scroll_spy::ScrollSpyConfig;
use crate::typewriter::TypewriterTiming;

/// Contact form timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// How long the success message stays up
    pub dismiss_after_ms: u64,
    /// Latency of the built-in simulated submitter
    pub simulated_delay_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: 5000,
            simulated_delay_ms: 800,
        }
    }
}

impl ContactConfig {
    pub fn dismiss_after(&self) -> Duration {
        Duration::from_millis(self.dismiss_after_ms)
    }

    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub typewriter: TypewriterTiming,
    pub scroll: ScrollSpyConfig,
    pub contact: ContactConfig,
    /// Visible fraction at which sections fade in
    pub reveal_threshold: f64,
    /// Force reduced motion regardless of the system preference
    pub reduced_motion: bool,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            typewriter: TypewriterTiming::default(),
            scroll: ScrollSpyConfig::default(),
            contact: ContactConfig::default(),
            reveal_threshold: 0.1,
            reduced_motion: false,
        }
    }
}

impl PortfolioConfig {
    /// `<config dir>/portfolio/config.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("portfolio").join("config.json"))
    }

    /// Read and validate a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::Io` if the file cannot be read,
    /// `PortfolioError::Json` if it is not valid JSON for this shape and
    /// `PortfolioError::Config` if a value is out of range.
    pub fn load(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: PortfolioConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        info!(?path, "Loaded config");
        Ok(config)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();
        match Self::load(path) {
            Err(PortfolioError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(?path, "No config file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn validate(&self) -> PortfolioResult<()> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(PortfolioError::Config(format!(
                "reveal_threshold must be within 0..=1, got {}",
                self.reveal_threshold
            )));
        }
        let t = &self.typewriter;
        if t.type_interval_ms == 0 || t.delete_interval_ms == 0 || t.blink_interval_ms == 0 {
            return Err(PortfolioError::Config(
                "typewriter intervals must be non-zero".to_string(),
            ));
        }
        if self.scroll.throttle_ms == 0 {
            return Err(PortfolioError::Config("scroll.throttle_ms must be non-zero".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn empty_object_is_default() {
        let file = write_config("{}");
        let config = PortfolioConfig::load(file.path()).unwrap();
        assert_eq!(config, PortfolioConfig::default());
        assert_eq!(config.contact.dismiss_after(), Duration::from_secs(5));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let file = write_config(r#"{"typewriter": {"hold_delay_ms": 2000}, "reduced_motion": true}"#);
        let config = PortfolioConfig::load(file.path()).unwrap();
        assert_eq!(config.typewriter.hold_delay_ms, 2000);
        assert_eq!(config.typewriter.type_interval_ms, 60);
        assert!(config.reduced_motion);
        assert_eq!(config.scroll.reference_line_px, 100.0);
    }

    #[test]
    fn missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = PortfolioConfig::load_or_default(dir.path().join("nope.json")).unwrap();
        assert_eq!(config, PortfolioConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let file = write_config("{ not json");
        assert!(matches!(
            PortfolioConfig::load_or_default(file.path()),
            Err(PortfolioError::Json(_))
        ));
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let file = write_config(r#"{"reveal_threshold": 1.5}"#);
        assert!(matches!(
            PortfolioConfig::load(file.path()),
            Err(PortfolioError::Config(_))
        ));
    }

    #[test]
    fn default_path_ends_in_portfolio() {
        if let Some(path) = PortfolioConfig::default_path() {
            assert!(path.ends_with("portfolio/config.json"));
        }
    }
}
