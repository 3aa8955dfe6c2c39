//! # Error Types
//!
//! Domain-specific error types for quill-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  quill-core errors (this file)                                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  quill-store errors (separate crate)                                   │
//! │  └── StoreError       - File persistence failures                      │
//! │                                                                         │
//! │  quill-app errors (orchestration crate)                                │
//! │  └── AppError         - What the UI boundary sees                      │
//! │                                                                         │
//! │  Flow: ValidationError ──┐                                             │
//! │        StoreError ───────┼──► AppError ──► user-visible message        │
//! │        render failure ───┘                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field in the message
//! 3. Errors are enum variants, never String
//! 4. Validation rejects *before* any state mutation

use thiserror::Error;

/// Input validation errors.
///
/// Raised before invoice assembly; a rejected form leaves every store and
/// the draft untouched (no partial invoice is ever created).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    ///
    /// ## When This Occurs
    /// - Seller company name left blank
    /// - Buyer name left blank
    /// - A line item with an empty name
    #[error("Required field is missing: {field}")]
    Required { field: String },

    /// A numeric field is negative where only zero-or-positive is allowed.
    #[error("{field} must not be negative (got {value})")]
    Negative { field: String, value: f64 },

    /// A numeric field is NaN or infinite.
    ///
    /// ## When This Occurs
    /// Free-text price/tax input parsed upstream can produce non-finite
    /// values; they must never reach totals arithmetic.
    #[error("{field} is not a finite number")]
    NotFinite { field: String },

    /// Line item quantity below the minimum of 1.
    #[error("Quantity must be at least 1")]
    QuantityZero,

    /// The invoice has no line items.
    #[error("At least one item is required")]
    NoItems,
}

impl ValidationError {
    /// Creates a Required error for a given field name.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Creates a Negative error for a given field name and value.
    pub fn negative(field: impl Into<String>, value: f64) -> Self {
        ValidationError::Negative {
            field: field.into(),
            value,
        }
    }
}
