//! # Store Paths
//!
//! Well-known per-user locations for the three store files.
//!
//! The defaults and catalog files live as dotfiles directly in the user's
//! home directory; the invoice log sits alongside them. Tests point the
//! whole set at a throwaway directory instead.

use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};

/// Seller defaults and next invoice counter, flat key=value.
const DEFAULTS_FILE: &str = ".quill_invoice_defaults.properties";

/// Reusable item catalog, JSON array.
const CATALOG_FILE: &str = ".quill_invoice_items.json";

/// Invoice history, JSON array.
const INVOICE_LOG_FILE: &str = "quill_invoices.json";

/// Resolved locations of the per-user store files.
#[derive(Debug, Clone)]
pub struct StorePaths {
    base: PathBuf,
}

impl StorePaths {
    /// Resolves the fixed per-user locations under the home directory.
    pub fn user_default() -> StoreResult<Self> {
        let dirs = directories::BaseDirs::new().ok_or(StoreError::HomeDirUnavailable)?;
        Ok(StorePaths {
            base: dirs.home_dir().to_path_buf(),
        })
    }

    /// Places all store files under an explicit directory.
    ///
    /// Used by tests and by the demo binary, so neither touches the real
    /// per-user files.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        StorePaths { base: dir.into() }
    }

    /// The directory holding all store files.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Path of the defaults/counter file.
    pub fn defaults_file(&self) -> PathBuf {
        self.base.join(DEFAULTS_FILE)
    }

    /// Path of the item catalog file.
    pub fn catalog_file(&self) -> PathBuf {
        self.base.join(CATALOG_FILE)
    }

    /// Path of the invoice log file.
    pub fn invoice_log_file(&self) -> PathBuf {
        self.base.join(INVOICE_LOG_FILE)
    }
}
