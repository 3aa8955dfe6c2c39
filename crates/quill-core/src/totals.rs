//! # Totals Module
//!
//! Line and invoice totals arithmetic.
//!
//! ## Why f64, Not Integer Cents?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  NO INTERNAL ROUNDING                                                   │
//! │                                                                         │
//! │  Tax amounts are exact fractions of the subtotal:                       │
//! │    subtotal × rate / 100, carried at full f64 precision                 │
//! │                                                                         │
//! │  Rounding to cents at this layer would break the core identity          │
//! │    Σ item.total == Σ item.subtotal + Σ item.tax_amount                  │
//! │  for rates like 6.5% where the tax is a sub-cent fraction.              │
//! │                                                                         │
//! │  Two-decimal display is a PRESENTATION concern (format_amount) and is   │
//! │  never fed back into arithmetic.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Where Totals Flow
//! ```text
//! LineItem.subtotal ──► LineItem.tax_amount ──► LineItem.total
//!        │                      │
//!        ▼                      ▼
//! Invoice.total_subtotal  Invoice.total_tax ──► Invoice.grand_total
//!                                                      │
//!                                                      ▼
//!                                     Invoice.amount_due (minus paid)
//! ```

use crate::types::{Invoice, LineItem};

// =============================================================================
// Line Item Totals
// =============================================================================

impl LineItem {
    /// Subtotal before tax: `quantity × unit_price`.
    #[inline]
    pub fn subtotal(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }

    /// Tax amount: `subtotal × tax_rate_percent / 100`.
    #[inline]
    pub fn tax_amount(&self) -> f64 {
        self.subtotal() * (self.tax_rate_percent / 100.0)
    }

    /// Total including tax: `subtotal + tax_amount`.
    #[inline]
    pub fn total(&self) -> f64 {
        self.subtotal() + self.tax_amount()
    }
}

// =============================================================================
// Invoice Totals
// =============================================================================

impl Invoice {
    /// Sum of item subtotals (before tax).
    pub fn total_subtotal(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    /// Sum of item tax amounts.
    pub fn total_tax(&self) -> f64 {
        self.items.iter().map(LineItem::tax_amount).sum()
    }

    /// Grand total including tax: `total_subtotal + total_tax`.
    pub fn grand_total(&self) -> f64 {
        self.total_subtotal() + self.total_tax()
    }

    /// Outstanding balance: `grand_total - paid_amount`.
    ///
    /// Zero for invoices marked paid at generation time, where `paid_amount`
    /// was set to the grand total.
    pub fn amount_due(&self) -> f64 {
        self.grand_total() - self.paid_amount
    }
}

// =============================================================================
// Totals Summary
// =============================================================================

/// Snapshot of invoice-level totals, for handing to a UI or renderer
/// in one piece.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvoiceTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub grand_total: f64,
    pub amount_due: f64,
}

impl From<&Invoice> for InvoiceTotals {
    fn from(invoice: &Invoice) -> Self {
        InvoiceTotals {
            subtotal: invoice.total_subtotal(),
            tax: invoice.total_tax(),
            grand_total: invoice.grand_total(),
            amount_due: invoice.amount_due(),
        }
    }
}

// =============================================================================
// Display Formatting
// =============================================================================

/// Formats an amount for two-decimal currency display, e.g. `51985.00`.
///
/// Presentation only - the returned string is never parsed back into
/// arithmetic. Currency symbols are left to the caller.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Invoice, PartyInfo};
    use chrono::NaiveDate;

    const EPS: f64 = 1e-9;

    fn invoice_with(items: Vec<LineItem>) -> Invoice {
        Invoice {
            invoice_number: "INV-20260831-1200-0001".to_string(),
            invoice_date: NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
            seller: PartyInfo::default(),
            buyer: PartyInfo::default(),
            items,
            notes: String::new(),
            paid_amount: 0.0,
        }
    }

    #[test]
    fn test_line_item_identities() {
        let item = LineItem::new("Widget", 3, 19.99, 6.5);

        assert!((item.subtotal() - 59.97).abs() < EPS);
        assert!((item.tax_amount() - 59.97 * 0.065).abs() < EPS);
        assert!((item.total() - (item.subtotal() + item.tax_amount())).abs() < EPS);
    }

    #[test]
    fn test_zero_tax_rate_means_zero_tax() {
        let item = LineItem::new("Book", 2, 45.0, 0.0);
        assert_eq!(item.tax_amount(), 0.0);
        assert_eq!(item.total(), item.subtotal());
    }

    #[test]
    fn test_invoice_totals_reference_case() {
        // 5 × 8999.00 + 10 × 699.00, both tax-free
        let invoice = invoice_with(vec![
            LineItem::new("Laptop", 5, 8999.0, 0.0),
            LineItem::new("Headset", 10, 699.0, 0.0),
        ]);

        assert!((invoice.total_subtotal() - 51_985.0).abs() < EPS);
        assert_eq!(invoice.total_tax(), 0.0);
        assert!((invoice.grand_total() - 51_985.0).abs() < EPS);
    }

    #[test]
    fn test_sum_of_totals_equals_subtotal_plus_tax() {
        let invoice = invoice_with(vec![
            LineItem::new("A", 3, 10.10, 6.0),
            LineItem::new("B", 7, 0.35, 21.0),
            LineItem::new("C", 1, 12345.67, 8.25),
        ]);

        let item_total_sum: f64 = invoice.items.iter().map(LineItem::total).sum();
        let recombined = invoice.total_subtotal() + invoice.total_tax();

        assert!((item_total_sum - recombined).abs() < EPS);
        assert!((invoice.grand_total() - recombined).abs() < EPS);
    }

    #[test]
    fn test_amount_due_after_partial_payment() {
        let mut invoice = invoice_with(vec![LineItem::new("A", 1, 100.0, 0.0)]);
        invoice.paid_amount = 40.0;
        assert!((invoice.amount_due() - 60.0).abs() < EPS);
    }

    #[test]
    fn test_amount_due_zero_when_fully_paid() {
        let mut invoice = invoice_with(vec![LineItem::new("A", 2, 50.0, 6.0)]);
        invoice.paid_amount = invoice.grand_total();
        assert!(invoice.amount_due().abs() < EPS);
    }

    #[test]
    fn test_empty_invoice_totals_are_zero() {
        let invoice = invoice_with(vec![]);
        assert_eq!(invoice.total_subtotal(), 0.0);
        assert_eq!(invoice.total_tax(), 0.0);
        assert_eq!(invoice.grand_total(), 0.0);
    }

    #[test]
    fn test_format_amount_two_decimals() {
        assert_eq!(format_amount(51_985.0), "51985.00");
        assert_eq!(format_amount(0.5), "0.50");
        assert_eq!(format_amount(2.999), "3.00");
    }

    #[test]
    fn test_totals_snapshot_matches_methods() {
        let invoice = invoice_with(vec![LineItem::new("A", 4, 2.5, 10.0)]);
        let totals = InvoiceTotals::from(&invoice);

        assert_eq!(totals.subtotal, invoice.total_subtotal());
        assert_eq!(totals.tax, invoice.total_tax());
        assert_eq!(totals.grand_total, invoice.grand_total());
        assert_eq!(totals.amount_due, invoice.amount_due());
    }
}
