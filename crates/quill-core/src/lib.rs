//! # quill-core: Pure Business Logic for Quill Invoice
//!
//! This crate is the **heart** of Quill Invoice. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Quill Invoice Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Desktop Form UI (out of scope)               │   │
//! │  │    Seller form ──► Buyer form ──► Item table ──► Generate      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    quill-app (orchestration)                    │   │
//! │  │    validate ──► mint number ──► render seam ──► append log     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ quill-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  totals   │  │ numbering │  │   draft   │  │   │
//! │  │   │  Invoice  │  │ subtotal  │  │ INV-....  │  │ staged    │  │   │
//! │  │   │  LineItem │  │ tax/total │  │ wrap 9999 │  │ items     │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO FILES • PURE FUNCTIONS                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  quill-store (persistence layer)                │   │
//! │  │         defaults/counter file, invoice log, item catalog        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Invoice, LineItem, PartyInfo, CatalogItem)
//! - [`totals`] - Line and invoice totals arithmetic
//! - [`numbering`] - Invoice number formatting and counter wrap
//! - [`validation`] - Form validation before any state mutation
//! - [`draft`] - In-memory invoice draft with catalog propagation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output; callers supply timestamps
//! 2. **No I/O**: file and clock access live in quill-store / quill-app
//! 3. **Recompute, never cache**: every derived amount is recomputed from the
//!    stored fields on each call
//! 4. **Explicit Errors**: all errors are typed, never strings or panics

pub mod draft;
pub mod error;
pub mod numbering;
pub mod totals;
pub mod types;
pub mod validation;

// Re-exports for convenience: `use quill_core::Invoice` instead of
// `use quill_core::types::Invoice`
pub use draft::InvoiceDraft;
pub use error::ValidationError;
pub use types::*;

/// Lowest invoice counter value ever assigned (the wrap target).
///
/// ## Why 1, not 0?
/// The numbering scheme reserves 0000; a freshly initialized store
/// hands out 0001 first, and 9999 wraps back to 0001.
pub const COUNTER_MIN: u16 = 1;

/// Highest invoice counter value before wrapping back to [`COUNTER_MIN`].
pub const COUNTER_MAX: u16 = 9999;
