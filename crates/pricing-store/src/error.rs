//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! std::io::Error (tokio::fs)
//!      │
//!      ▼
//! StoreError (this module) ← adds the file path
//!      │
//!      ▼
//! anyhow (report binary) ← printed on stderr
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// User store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading the user file failed.
    ///
    /// ## When This Occurs
    /// - Permission denied
    /// - Path is a directory
    /// - File is not valid UTF-8
    ///
    /// A missing file is not an error; it loads as zero users.
    #[error("Failed to read user file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message_includes_path() {
        let err = StoreError::io(
            "/data/users.csv",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            err.to_string(),
            "Failed to read user file /data/users.csv: denied"
        );
    }
}
