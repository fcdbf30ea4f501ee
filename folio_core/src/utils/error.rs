//! Centralized error handling.
//!
//! `thiserror` for typed library errors, `anyhow` for application-level
//! results with context. The animation core is infallible by design and
//! returns no `Result`s; the fallible surface is preference I/O and
//! logger setup.

use thiserror::Error;

/// Errors the core library can produce.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Preference-store problems that are not plain I/O, e.g. no config
    /// directory on this platform.
    #[error("Preferences error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for application-level operations.
pub type FolioResult<T> = anyhow::Result<T>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add file operation context to an error.
    fn with_file_context(self, path: &str) -> FolioResult<T>;

    /// Add preference/configuration context to an error.
    fn with_config_context(self, setting: &str) -> FolioResult<T>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for Result<T, E> {
    fn with_file_context(self, path: &str) -> FolioResult<T> {
        use anyhow::Context;
        self.map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("File operation failed: {}", path))
    }

    fn with_config_context(self, setting: &str) -> FolioResult<T> {
        use anyhow::Context;
        self.map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("Preference error for: {}", setting))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = FolioError::Config("no config directory".to_string());
        assert!(err.to_string().contains("Preferences error"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: FolioError = io.into();
        assert!(matches!(err, FolioError::Io(_)));
    }

    #[test]
    fn test_result_ext_adds_context() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let with_context = result.with_file_context("preferences.json");
        let err_string = format!("{:?}", with_context.unwrap_err());
        assert!(err_string.contains("preferences.json"));
    }
}
