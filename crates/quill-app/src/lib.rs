//! # quill-app: Orchestration Layer for Quill Invoice
//!
//! Composes the pure core with the file stores into the operations a form
//! UI drives: generate an invoice, manage seller defaults, and keep the
//! item catalog in sync with the open draft.
//!
//! ## Modules
//!
//! - [`service`] - `InvoiceService`, the generation and catalog workflows
//! - [`render`] - the renderer seam (`InvoiceRenderer`) and a text renderer
//! - [`state`] - `DraftState`, the mutex-guarded shared invoice draft
//! - [`error`] - `AppError`, the one error type the UI boundary sees
//!
//! ## Error Policy at This Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Validation failure ──► AppError::Validation, nothing mutated          │
//! │  Render failure ──────► AppError::Render (raw diagnostic), no append   │
//! │  Append failure ──────► reported in GenerateOutcome::log_error:        │
//! │                         "invoice was generated but not logged"         │
//! │  Counter persist ─────► best-effort, GenerateOutcome::                 │
//! │                         counter_persist_error                          │
//! │                                                                         │
//! │  None of these are fatal: every failure is caught at the operation     │
//! │  that triggered it and the application keeps its prior usable state.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod render;
pub mod service;
pub mod state;

pub use error::AppError;
pub use render::{InvoiceRenderer, RenderError, TextRenderer};
pub use service::{CatalogChange, GenerateOutcome, InvoiceRequest, InvoiceService};
pub use state::DraftState;
