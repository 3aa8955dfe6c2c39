//! # Domain Types
//!
//! Core domain types shared across the workspace.
//!
//! ## Type Relationships
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Invoice Data Model                               │
//! │                                                                         │
//! │  Invoice                                                               │
//! │  ├── invoice_number: "INV-20260831-1432-0007"                          │
//! │  ├── invoice_date:   2026-08-31 (serialized "YYYY-MM-DD")              │
//! │  ├── seller ─────────► PartyInfo (name, address, taxId, phone, email)  │
//! │  ├── buyer  ─────────► PartyInfo (same shape, different role)          │
//! │  ├── items  ─────────► [LineItem] (ordered)                            │
//! │  ├── notes                                                              │
//! │  └── paid_amount                                                        │
//! │                                                                         │
//! │  CatalogItem - reusable LineItem template (quantity fixed at 1),       │
//! │                stored independently from any draft                     │
//! │                                                                         │
//! │  Derived values (subtotal, tax, totals) are NEVER stored - see totals  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! Field names serialize in camelCase (`unitPrice`, `taxRatePercent`) so the
//! invoice log and catalog files read naturally as JSON documents.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Line Item
// =============================================================================

/// A single line on an invoice.
///
/// ## Invariants
/// - `quantity >= 1` (enforced by validation, defaulted to 1 on read)
/// - `unit_price >= 0`, `tax_rate_percent >= 0`, both finite
/// - subtotal/tax/total are derived on demand, never cached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Item name (also the key for catalog propagation into drafts).
    pub name: String,

    /// Number of units, at least 1.
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Price per unit, before tax.
    pub unit_price: f64,

    /// Tax rate as a percentage (e.g. 6.0 = 6%).
    #[serde(default)]
    pub tax_rate_percent: f64,
}

fn default_quantity() -> u32 {
    1
}

impl LineItem {
    /// Creates a line item.
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        unit_price: f64,
        tax_rate_percent: f64,
    ) -> Self {
        LineItem {
            name: name.into(),
            quantity,
            unit_price,
            tax_rate_percent,
        }
    }
}

// =============================================================================
// Party Info
// =============================================================================

/// Seller or buyer details. The same shape serves both roles.
///
/// All fields are free-form strings; an empty string means "not provided".
/// Only the name is required by validation, and only for the roles the
/// form marks required (seller and buyer).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyInfo {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub tax_id: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl PartyInfo {
    /// Creates party details with every field supplied.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        tax_id: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        PartyInfo {
            name: name.into(),
            address: address.into(),
            tax_id: tax_id.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// A generated invoice.
///
/// ## Lifecycle
/// Created transiently per generation request, appended to the invoice log
/// immediately, and never mutated afterwards. Totals are recomputed from the
/// items on every access (see [`crate::totals`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Unique human-readable identifier, `INV-yyyyMMdd-HHmm-cccc`.
    pub invoice_number: String,

    /// Calendar date of the invoice. Serialized as `YYYY-MM-DD`.
    pub invoice_date: NaiveDate,

    pub seller: PartyInfo,
    pub buyer: PartyInfo,

    /// Ordered line items.
    #[serde(default)]
    pub items: Vec<LineItem>,

    #[serde(default)]
    pub notes: String,

    /// Amount already paid. "Mark as paid" sets this to the grand total.
    #[serde(default)]
    pub paid_amount: f64,
}

// =============================================================================
// Catalog Item
// =============================================================================

/// A reusable line-item template, stored independently from any draft.
///
/// Same shape as [`LineItem`] but the quantity is ignored and fixed at 1;
/// the quantity of an actual invoice line is chosen when the template is
/// staged into a draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub name: String,

    /// Always 1; kept so catalog records share the LineItem shape on disk.
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    pub unit_price: f64,

    #[serde(default)]
    pub tax_rate_percent: f64,
}

impl CatalogItem {
    /// Creates a catalog template. The quantity is fixed at 1.
    pub fn new(name: impl Into<String>, unit_price: f64, tax_rate_percent: f64) -> Self {
        CatalogItem {
            name: name.into(),
            quantity: 1,
            unit_price,
            tax_rate_percent,
        }
    }

    /// Stages this template as an invoice line with the given quantity.
    pub fn to_line_item(&self, quantity: u32) -> LineItem {
        LineItem::new(self.name.clone(), quantity, self.unit_price, self.tax_rate_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_quantity_defaults_to_one() {
        // Catalog files written by older builds omit the quantity field
        let item: LineItem =
            serde_json::from_str(r#"{"name":"Pen","unitPrice":2.5,"taxRatePercent":6.0}"#)
                .unwrap();
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_invoice_date_round_trips_as_calendar_date() {
        let invoice = Invoice {
            invoice_number: "INV-20260831-1432-0007".to_string(),
            invoice_date: NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
            seller: PartyInfo::default(),
            buyer: PartyInfo::default(),
            items: vec![],
            notes: String::new(),
            paid_amount: 0.0,
        };

        let json = serde_json::to_string(&invoice).unwrap();
        assert!(json.contains("\"invoiceDate\":\"2026-08-31\""));

        let back: Invoice = serde_json::from_str(&json).unwrap();
        assert_eq!(back.invoice_date, invoice.invoice_date);
    }

    #[test]
    fn test_catalog_item_stages_with_chosen_quantity() {
        let template = CatalogItem::new("Notebook", 12.0, 6.0);
        let line = template.to_line_item(3);
        assert_eq!(line.quantity, 3);
        assert_eq!(line.unit_price, 12.0);
        assert_eq!(line.tax_rate_percent, 6.0);
    }
}
