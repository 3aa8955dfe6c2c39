//! # Application Error Type
//!
//! Unified error type for the UI boundary.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Quill Invoice                          │
//! │                                                                         │
//! │  Form UI                      Library Boundary                          │
//! │  ───────                      ────────────────                          │
//! │                                                                         │
//! │  Generate click                                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  InvoiceService operation                                        │  │
//! │  │  Result<T, AppError>                                             │  │
//! │  │         │                                                        │  │
//! │  │  empty seller name ─── ValidationError::Required ──┐             │  │
//! │  │         │                                          ▼             │  │
//! │  │  log unwritable ────── StoreError::Write ───────► AppError ────► │  │
//! │  │         │                                          ▲             │  │
//! │  │  PDF tool failed ───── RenderError (raw text) ────┘             │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  The UI shows the Display message and stays in its prior state.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use quill_core::ValidationError;
use quill_store::StoreError;
use thiserror::Error;

use crate::render::RenderError;

/// Errors surfaced at the application boundary.
///
/// None of these are fatal to the process; each is reported for the single
/// operation that raised it.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request failed validation; nothing was mutated.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A store operation failed (defaults save, log append, catalog save).
    #[error("Persistence failed: {0}")]
    Store(#[from] StoreError),

    /// The external renderer failed; the raw diagnostic is preserved.
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    /// A catalog operation referenced a row that no longer exists.
    #[error("Catalog index {index} out of range (catalog has {len} items)")]
    CatalogIndexOutOfRange { index: usize, len: usize },
}

/// Result type for application-boundary operations.
pub type AppResult<T> = Result<T, AppError>;
