//! # Validation Module
//!
//! Form validation run before any state mutation.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form UI (out of scope)                                       │
//! │  ├── Numeric text fields parse to numbers                              │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields (seller name, buyer name, item names)             │
//! │  ├── Numeric ranges (quantity >= 1, price/tax >= 0 and finite)         │
//! │  └── A non-empty item list                                             │
//! │                                                                         │
//! │  A rejected request mutates NOTHING: no counter advance, no log        │
//! │  append, no draft change. The application stays in its prior state.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{LineItem, PartyInfo};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a party name for a role the form requires.
///
/// `role` names the field in the error message ("seller name", "buyer name").
pub fn validate_party_name(role: &str, party: &PartyInfo) -> ValidationResult<()> {
    if party.name.trim().is_empty() {
        return Err(ValidationError::required(format!("{role} name")));
    }
    Ok(())
}

/// Validates a single line item.
///
/// ## Rules
/// - name must not be empty
/// - quantity must be at least 1
/// - unit price and tax rate must be finite and not negative
pub fn validate_line_item(item: &LineItem) -> ValidationResult<()> {
    if item.name.trim().is_empty() {
        return Err(ValidationError::required("item name"));
    }

    if item.quantity < 1 {
        return Err(ValidationError::QuantityZero);
    }

    if !item.unit_price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "unit price".to_string(),
        });
    }
    if item.unit_price < 0.0 {
        return Err(ValidationError::negative("unit price", item.unit_price));
    }

    if !item.tax_rate_percent.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "tax rate".to_string(),
        });
    }
    if item.tax_rate_percent < 0.0 {
        return Err(ValidationError::negative("tax rate", item.tax_rate_percent));
    }

    Ok(())
}

/// Validates a complete generation request: seller, buyer, and item list.
///
/// Returns the first violation found, in form order (seller, buyer, items).
pub fn validate_invoice_input(
    seller: &PartyInfo,
    buyer: &PartyInfo,
    items: &[LineItem],
) -> ValidationResult<()> {
    validate_party_name("seller", seller)?;
    validate_party_name("buyer", buyer)?;

    if items.is_empty() {
        return Err(ValidationError::NoItems);
    }
    for item in items {
        validate_line_item(item)?;
    }

    Ok(())
}
