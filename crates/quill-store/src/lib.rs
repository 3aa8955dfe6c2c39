//! # quill-store: Persistence Layer for Quill Invoice
//!
//! File-backed stores for the three per-user files the application keeps:
//! seller defaults + invoice counter, the invoice history log, and the
//! reusable item catalog.
//!
//! ## Failure Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Persistence Failure Policy                          │
//! │                                                                         │
//! │  READ side (load):                                                      │
//! │    absent file ──────────► defaults / empty list, no error             │
//! │    unreadable/malformed ─► warn! + defaults / empty list, no error     │
//! │    out-of-range counter ─► warn! + counter resets to 1, no error       │
//! │                                                                         │
//! │  WRITE side:                                                            │
//! │    counter advance ──────► best-effort: value is handed out regardless,│
//! │                            failure is warn!-logged AND surfaced in      │
//! │                            CounterAdvance.persist_error                 │
//! │    log append / saves ───► StoreError propagates to the caller; the    │
//! │                            UI surfaces it, the process never dies      │
//! │                                                                         │
//! │  Nothing in this crate panics on I/O.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod defaults;
pub mod error;
pub mod invoice_log;
pub mod paths;

pub use catalog::CatalogStore;
pub use defaults::{CounterAdvance, Defaults, DefaultsStore, SellerDefaults};
pub use error::{StoreError, StoreResult};
pub use invoice_log::InvoiceLogStore;
pub use paths::StorePaths;
