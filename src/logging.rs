use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;

/// Log output settings. The terminal is owned by the UI, so logs only go
/// to a file; with no file configured, nothing is recorded.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, e.g. `"info"` or `"tabletop_connect_four=debug"`.
    /// `RUST_LOG` takes precedence when set.
    pub filter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        EnvFilter::try_new(&self.filter).map_err(|e| {
            ConfigError::Validation(format!("logging.filter is invalid: {e}"))
        })?;
        Ok(())
    }
}

/// Install the global subscriber writing to `path`.
pub fn init_file_logging(filter: &str, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        LoggingConfig::default()
            .validate()
            .expect("default logging config should be valid");
    }

    #[test]
    fn test_accepts_target_directives() {
        let config = LoggingConfig {
            filter: "warn,tabletop_connect_four=debug".to_string(),
            file: None,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_malformed_filter() {
        let config = LoggingConfig {
            filter: "tabletop_connect_four=notalevel".to_string(),
            file: None,
        };
        assert!(config.validate().is_err());
    }
}
