//! # Renderer Seam
//!
//! The boundary between this core and whatever turns an `Invoice` into a
//! document. The PDF engine is an external collaborator: this crate does
//! not define the document's byte format, only that the renderer receives
//! a complete, internally consistent invoice and a caller-supplied output
//! path.
//!
//! [`TextRenderer`] is the bundled implementation - a fixed-layout plain
//! text receipt - so the seam is exercised without a PDF engine.

use std::path::Path;

use quill_core::totals::format_amount;
use quill_core::{Invoice, LineItem};
use thiserror::Error;

/// A renderer failure, carrying the raw diagnostic output.
///
/// No automatic retry: the message is surfaced to the user as-is.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RenderError {
    pub message: String,
}

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        RenderError {
            message: message.into(),
        }
    }
}

/// Turns a fully populated invoice into a document at `output`.
pub trait InvoiceRenderer {
    fn render(&self, invoice: &Invoice, output: &Path) -> Result<(), RenderError>;
}

// =============================================================================
// Text Renderer
// =============================================================================

/// Fixed-layout plain text receipt renderer.
pub struct TextRenderer;

impl TextRenderer {
    fn party_block(out: &mut String, heading: &str, party: &quill_core::PartyInfo) {
        out.push_str(heading);
        out.push('\n');
        for (label, value) in [
            ("Name:   ", party.name.as_str()),
            ("Address:", party.address.as_str()),
            ("Tax ID: ", party.tax_id.as_str()),
            ("Phone:  ", party.phone.as_str()),
            ("Email:  ", party.email.as_str()),
        ] {
            if !value.is_empty() {
                out.push_str(&format!("  {label} {value}\n"));
            }
        }
    }

    fn item_line(out: &mut String, item: &LineItem) {
        out.push_str(&format!(
            "  {:<24} {:>4} x {:>10}  tax {:>5}%  = {:>12}\n",
            item.name,
            item.quantity,
            format_amount(item.unit_price),
            item.tax_rate_percent,
            format_amount(item.total()),
        ));
    }
}

impl InvoiceRenderer for TextRenderer {
    fn render(&self, invoice: &Invoice, output: &Path) -> Result<(), RenderError> {
        let mut out = String::new();

        out.push_str("================= INVOICE =================\n");
        out.push_str(&format!("Number: {}\n", invoice.invoice_number));
        out.push_str(&format!("Date:   {}\n\n", invoice.invoice_date));

        Self::party_block(&mut out, "Seller", &invoice.seller);
        out.push('\n');
        Self::party_block(&mut out, "Buyer", &invoice.buyer);
        out.push('\n');

        out.push_str("Items\n");
        for item in &invoice.items {
            Self::item_line(&mut out, item);
        }
        out.push('\n');

        out.push_str(&format!(
            "Subtotal:   {:>12}\n",
            format_amount(invoice.total_subtotal())
        ));
        out.push_str(&format!("Tax:        {:>12}\n", format_amount(invoice.total_tax())));
        out.push_str(&format!(
            "Total:      {:>12}\n",
            format_amount(invoice.grand_total())
        ));
        out.push_str(&format!(
            "Paid:       {:>12}\n",
            format_amount(invoice.paid_amount)
        ));
        out.push_str(&format!(
            "Amount due: {:>12}\n",
            format_amount(invoice.amount_due())
        ));

        if !invoice.notes.is_empty() {
            out.push_str(&format!("\nNotes: {}\n", invoice.notes));
        }

        std::fs::write(output, out).map_err(|e| {
            RenderError::new(format!("failed to write {}: {e}", output.display()))
        })
    }
}
