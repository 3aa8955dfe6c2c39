//! # Invoice Log Store
//!
//! Append-only JSON history of generated invoices.
//!
//! ## Persistence Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    append = read-modify-rewrite                         │
//! │                                                                         │
//! │   load full array ──► push new invoice ──► rewrite whole file          │
//! │                                                                         │
//! │   Deliberately simple: the history is low-volume and single-user.      │
//! │   No indexing, no partial-write recovery. A failed append means        │
//! │   "invoice was generated but not logged" and propagates to the UI.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records are pretty-printed UTF-8 JSON; invoice dates serialize as
//! `YYYY-MM-DD`.

use std::path::PathBuf;

use quill_core::Invoice;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::paths::StorePaths;

/// Store for the persisted invoice history.
#[derive(Debug)]
pub struct InvoiceLogStore {
    path: PathBuf,
}

impl InvoiceLogStore {
    /// Opens the store at its well-known location.
    pub fn open(paths: &StorePaths) -> Self {
        InvoiceLogStore {
            path: paths.invoice_log_file(),
        }
    }

    /// Loads the full invoice history, oldest first.
    ///
    /// An absent, unreadable, or malformed file yields an empty list; the
    /// problem is logged, never raised, so a damaged history cannot block
    /// generating new invoices.
    pub fn load_all(&self) -> Vec<Invoice> {
        if !self.path.exists() {
            return Vec::new();
        }

        let contents = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Invoice log unreadable; treating history as empty"
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(invoices) => invoices,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Invoice log malformed; treating history as empty"
                );
                Vec::new()
            }
        }
    }

    /// Appends an invoice by rewriting the whole file.
    ///
    /// I/O and encoding failures propagate; the caller reports the invoice
    /// as generated but not logged.
    pub fn append(&self, invoice: &Invoice) -> StoreResult<()> {
        let mut invoices = self.load_all();
        invoices.push(invoice.clone());

        let json = serde_json::to_string_pretty(&invoices).map_err(|e| StoreError::Encode {
            path: self.path.clone(),
            source: e,
        })?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::write(self.path.clone(), e))?;
        }
        std::fs::write(&self.path, json).map_err(|e| StoreError::write(self.path.clone(), e))?;

        debug!(
            path = %self.path.display(),
            count = invoices.len(),
            number = %invoice.invoice_number,
            "Invoice appended to log"
        );
        Ok(())
    }
}
