//! # Sample Invoice Generator
//!
//! Generates one sample invoice end to end for development: stages items,
//! mints a number, renders a text receipt, and appends to the log.
//!
//! ## Usage
//! ```bash
//! # All store files and the rendered receipt land under ./sample-out
//! cargo run -p quill-app --bin sample_invoice
//!
//! # Run it twice to watch the counter advance in the defaults file
//! ```

use std::path::Path;

use quill_app::{DraftState, InvoiceRequest, InvoiceService, TextRenderer};
use quill_core::totals::format_amount;
use quill_core::{LineItem, PartyInfo};
use quill_store::StorePaths;
use tracing::info;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("sample_invoice failed: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = Path::new("sample-out");
    let paths = StorePaths::in_dir(out_dir);
    let service = InvoiceService::open(&paths);

    // Stage items the way the form would
    let draft = DraftState::new();
    draft.with_draft_mut(|d| {
        d.add_item(LineItem::new("Laptop", 5, 8999.0, 0.0));
        d.add_item(LineItem::new("Headset", 10, 699.0, 0.0));
    });
    info!(
        items = draft.with_draft(|d| d.item_count()),
        subtotal = draft.with_draft(|d| d.subtotal()),
        "Draft staged"
    );

    let request = InvoiceRequest {
        seller: PartyInfo::new(
            "Quill Demo Shop",
            "1 Sample Street",
            "TAX-0001",
            "555-0100",
            "billing@quill.example",
        ),
        buyer: PartyInfo::new("Sample Customer", "", "CUST-42", "", "customer@quill.example"),
        items: draft.with_draft(|d| d.items_snapshot()),
        invoice_date: None, // today
        notes: "Thank you for your business".to_string(),
        mark_as_paid: true,
    };

    let receipt = out_dir.join("invoice.txt");
    let outcome = service.generate_and_render(request, &TextRenderer, &receipt)?;

    if let Some(e) = &outcome.counter_persist_error {
        eprintln!("warning: counter not durably saved: {e}");
    }
    if let Some(e) = &outcome.log_error {
        eprintln!("warning: invoice generated but not logged: {e}");
    }

    println!("Generated {}", outcome.invoice.invoice_number);
    println!("Grand total: {}", format_amount(outcome.invoice.grand_total()));
    println!("Receipt: {}", receipt.display());
    println!("History entries: {}", service.invoice_log().load_all().len());

    Ok(())
}
