//! # Store Error Types
//!
//! Error types for file persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← adds the file path and operation           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (quill-app) ← what the UI boundary surfaces                  │
//! │                                                                         │
//! │  Read-side errors are usually absorbed by the stores (warn + fallback);│
//! │  write-side errors propagate, except the best-effort counter persist.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// File persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No home directory could be resolved for the per-user store files.
    ///
    /// ## When This Occurs
    /// - Stripped-down containers without HOME set
    /// - Misconfigured user accounts
    #[error("No home directory available for store files")]
    HomeDirUnavailable,

    /// Reading a store file failed (beyond simple absence, which is not
    /// an error).
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a store file failed.
    ///
    /// ## When This Occurs
    /// - Directory permissions
    /// - Disk full
    /// - Path is a directory
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON store file exists but does not parse.
    #[error("Malformed JSON in {}: {source}", path.display())]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Encoding records for a JSON store file failed.
    #[error("Failed to encode records for {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Creates a Read error for a given path.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a Write error for a given path.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Write {
            path: path.into(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
