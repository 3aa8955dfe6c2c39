//! # Invoice Service
//!
//! The generation and catalog workflows, composed from the core and the
//! stores.
//!
//! ## Generation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    InvoiceService::generate                             │
//! │                                                                         │
//! │  validate request ──► reject BEFORE any mutation on failure            │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  mint invoice number ──► atomic counter advance + local clock          │
//! │        │                 (best-effort persist, failure carried along)  │
//! │        ▼                                                                │
//! │  assemble Invoice ──► "mark as paid" sets paid_amount = grand total    │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  renderer seam ──► failure aborts with the raw diagnostic; the         │
//! │        │           invoice is NOT appended                             │
//! │        ▼                                                                │
//! │  append to log ──► failure does not abort: the outcome reports          │
//! │                    "generated but not logged"                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Catalog Workflows
//! Edits and deletes persist the catalog AND propagate into the open draft
//! by item name (quantities kept on edit, rows dropped on delete).
//! Already-persisted invoices are never touched.

use std::path::Path;

use chrono::{Local, NaiveDate};
use quill_core::numbering::format_invoice_number;
use quill_core::validation::validate_invoice_input;
use quill_core::{CatalogItem, Invoice, LineItem, PartyInfo};
use quill_store::{
    CatalogStore, CounterAdvance, DefaultsStore, InvoiceLogStore, StoreError, StorePaths,
};
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::render::InvoiceRenderer;
use crate::state::DraftState;

// =============================================================================
// Request / Outcome
// =============================================================================

/// Everything the form supplies for one generation.
#[derive(Debug, Clone)]
pub struct InvoiceRequest {
    pub seller: PartyInfo,
    pub buyer: PartyInfo,
    pub items: Vec<LineItem>,
    /// Defaults to today when the form has no date picker value.
    pub invoice_date: Option<NaiveDate>,
    pub notes: String,
    /// When set, the invoice is recorded as fully paid.
    pub mark_as_paid: bool,
}

/// Result of a successful generation.
///
/// "Successful" means the invoice exists; the two optional errors report
/// best-effort steps that failed without aborting the flow.
#[derive(Debug)]
pub struct GenerateOutcome {
    pub invoice: Invoice,
    /// Set when the advanced counter could not be written back to disk.
    pub counter_persist_error: Option<StoreError>,
    /// Set when the log append failed: generated but not logged.
    pub log_error: Option<StoreError>,
}

/// Result of a catalog edit or delete.
#[derive(Debug)]
pub struct CatalogChange {
    /// The catalog as persisted after the change.
    pub catalog: Vec<CatalogItem>,
    /// How many draft rows the change propagated into.
    pub draft_rows_touched: usize,
}

// =============================================================================
// Service
// =============================================================================

/// Owns the three stores and drives the invoice workflows.
#[derive(Debug)]
pub struct InvoiceService {
    defaults: DefaultsStore,
    invoice_log: InvoiceLogStore,
    catalog: CatalogStore,
}

impl InvoiceService {
    /// Opens all stores at their locations under `paths`.
    pub fn open(paths: &StorePaths) -> Self {
        InvoiceService {
            defaults: DefaultsStore::open(paths),
            invoice_log: InvoiceLogStore::open(paths),
            catalog: CatalogStore::open(paths),
        }
    }

    /// The defaults/counter store (seller defaults live here too).
    pub fn defaults(&self) -> &DefaultsStore {
        &self.defaults
    }

    /// The persisted invoice history.
    pub fn invoice_log(&self) -> &InvoiceLogStore {
        &self.invoice_log
    }

    // =========================================================================
    // Generation
    // =========================================================================

    /// Mints a fresh invoice number from the local clock and the persisted
    /// counter.
    ///
    /// Two calls within the same clock-minute differ in the trailing
    /// counter segment. Should the counter wrap past 9999 within a single
    /// minute, the number repeats - accepted edge case, not deduplicated.
    pub fn next_invoice_number(&self) -> (String, CounterAdvance) {
        let advance = self.defaults.get_and_increment();
        let number = format_invoice_number(Local::now().naive_local(), advance.value);
        (number, advance)
    }

    /// Generates an invoice and appends it to the log.
    pub fn generate(&self, request: InvoiceRequest) -> AppResult<GenerateOutcome> {
        self.generate_inner(request, None)
    }

    /// Generates an invoice, renders it to `output`, then appends it to
    /// the log.
    ///
    /// A renderer failure aborts before the append; nothing is logged.
    pub fn generate_and_render(
        &self,
        request: InvoiceRequest,
        renderer: &dyn InvoiceRenderer,
        output: &Path,
    ) -> AppResult<GenerateOutcome> {
        self.generate_inner(request, Some((renderer, output)))
    }

    fn generate_inner(
        &self,
        request: InvoiceRequest,
        renderer: Option<(&dyn InvoiceRenderer, &Path)>,
    ) -> AppResult<GenerateOutcome> {
        // Rejected before any state mutation: the counter is untouched
        validate_invoice_input(&request.seller, &request.buyer, &request.items)?;

        let (invoice_number, advance) = self.next_invoice_number();

        let mut invoice = Invoice {
            invoice_number,
            invoice_date: request
                .invoice_date
                .unwrap_or_else(|| Local::now().date_naive()),
            seller: request.seller,
            buyer: request.buyer,
            items: request.items,
            notes: request.notes,
            paid_amount: 0.0,
        };
        if request.mark_as_paid {
            invoice.paid_amount = invoice.grand_total();
        }

        if let Some((renderer, output)) = renderer {
            renderer.render(&invoice, output)?;
        }

        let log_error = match self.invoice_log.append(&invoice) {
            Ok(()) => None,
            Err(e) => {
                warn!(
                    number = %invoice.invoice_number,
                    error = %e,
                    "Invoice generated but not logged"
                );
                Some(e)
            }
        };

        info!(
            number = %invoice.invoice_number,
            grand_total = invoice.grand_total(),
            logged = log_error.is_none(),
            "Invoice generated"
        );

        Ok(GenerateOutcome {
            invoice,
            counter_persist_error: advance.persist_error,
            log_error,
        })
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// The persisted catalog, in saved order.
    pub fn catalog_items(&self) -> Vec<CatalogItem> {
        self.catalog.load()
    }

    /// Adds a template to the catalog and persists it.
    pub fn add_catalog_item(&self, item: CatalogItem) -> AppResult<Vec<CatalogItem>> {
        let mut items = self.catalog.load();
        items.push(item);
        self.catalog.save(&items)?;
        Ok(items)
    }

    /// Replaces the catalog entry at `index` and propagates the change
    /// into the open draft: same-named draft rows take the new name,
    /// price, and tax rate (quantities kept).
    ///
    /// Propagation is keyed by the entry's name before the edit.
    pub fn update_catalog_item(
        &self,
        index: usize,
        updated: CatalogItem,
        draft: &DraftState,
    ) -> AppResult<CatalogChange> {
        let mut items = self.catalog.load();
        if index >= items.len() {
            return Err(AppError::CatalogIndexOutOfRange {
                index,
                len: items.len(),
            });
        }

        let old_name = std::mem::replace(&mut items[index], updated.clone()).name;
        self.catalog.save(&items)?;

        let touched =
            draft.with_draft_mut(|d| d.apply_catalog_edit(&old_name, &updated));
        info!(
            old_name = %old_name,
            new_name = %updated.name,
            draft_rows = touched,
            "Catalog item updated"
        );

        Ok(CatalogChange {
            catalog: items,
            draft_rows_touched: touched,
        })
    }

    /// Removes the catalog entry at `index` and drops same-named rows
    /// from the open draft.
    pub fn remove_catalog_item(
        &self,
        index: usize,
        draft: &DraftState,
    ) -> AppResult<CatalogChange> {
        let mut items = self.catalog.load();
        if index >= items.len() {
            return Err(AppError::CatalogIndexOutOfRange {
                index,
                len: items.len(),
            });
        }

        let removed = items.remove(index);
        self.catalog.save(&items)?;

        let dropped = draft.with_draft_mut(|d| d.apply_catalog_delete(&removed.name));
        info!(name = %removed.name, draft_rows = dropped, "Catalog item removed");

        Ok(CatalogChange {
            catalog: items,
            draft_rows_touched: dropped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{RenderError, TextRenderer};
    use quill_core::ValidationError;

    fn party(name: &str) -> PartyInfo {
        PartyInfo {
            name: name.to_string(),
            ..PartyInfo::default()
        }
    }

    fn request(items: Vec<LineItem>) -> InvoiceRequest {
        InvoiceRequest {
            seller: party("Acme Ltd"),
            buyer: party("Customer"),
            items,
            invoice_date: NaiveDate::from_ymd_opt(2026, 8, 31),
            notes: String::new(),
            mark_as_paid: false,
        }
    }

    fn temp_service() -> (tempfile::TempDir, InvoiceService) {
        let dir = tempfile::tempdir().unwrap();
        let service = InvoiceService::open(&StorePaths::in_dir(dir.path()));
        (dir, service)
    }

    #[test]
    fn test_generate_appends_to_log() {
        let (_dir, service) = temp_service();
        let outcome = service
            .generate(request(vec![LineItem::new("Laptop", 5, 8999.0, 0.0)]))
            .unwrap();

        assert!(outcome.log_error.is_none());
        assert!(outcome.counter_persist_error.is_none());

        let logged = service.invoice_log().load_all();
        assert_eq!(logged.len(), 1);
        assert_eq!(logged[0], outcome.invoice);
    }

    #[test]
    fn test_generated_numbers_are_sequential() {
        let (_dir, service) = temp_service();
        let a = service
            .generate(request(vec![LineItem::new("A", 1, 1.0, 0.0)]))
            .unwrap();
        let b = service
            .generate(request(vec![LineItem::new("B", 1, 1.0, 0.0)]))
            .unwrap();

        assert_ne!(a.invoice.invoice_number, b.invoice.invoice_number);
        assert!(a.invoice.invoice_number.ends_with("-0001"));
        assert!(b.invoice.invoice_number.ends_with("-0002"));
    }

    #[test]
    fn test_validation_failure_leaves_counter_untouched() {
        let (_dir, service) = temp_service();
        let err = service.generate(request(vec![])).unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::NoItems)
        ));

        // No partial invoice, no counter advance
        assert!(service.invoice_log().load_all().is_empty());
        assert_eq!(service.defaults().load().next_counter, 1);
    }

    #[test]
    fn test_mark_as_paid_sets_paid_to_grand_total() {
        let (_dir, service) = temp_service();
        let mut req = request(vec![LineItem::new("A", 2, 50.0, 10.0)]);
        req.mark_as_paid = true;

        let outcome = service.generate(req).unwrap();
        assert_eq!(outcome.invoice.paid_amount, outcome.invoice.grand_total());
        assert_eq!(outcome.invoice.amount_due(), 0.0);
    }

    #[test]
    fn test_generate_and_render_writes_document() {
        let (dir, service) = temp_service();
        let output = dir.path().join("invoice.txt");

        let outcome = service
            .generate_and_render(
                request(vec![LineItem::new("Laptop", 5, 8999.0, 0.0)]),
                &TextRenderer,
                &output,
            )
            .unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.contains(&outcome.invoice.invoice_number));
    }

    #[test]
    fn test_render_failure_aborts_before_append() {
        struct FailingRenderer;
        impl InvoiceRenderer for FailingRenderer {
            fn render(&self, _: &Invoice, _: &Path) -> Result<(), RenderError> {
                Err(RenderError::new("pdf tool exited with code 1"))
            }
        }

        let (dir, service) = temp_service();
        let err = service
            .generate_and_render(
                request(vec![LineItem::new("A", 1, 1.0, 0.0)]),
                &FailingRenderer,
                &dir.path().join("out.pdf"),
            )
            .unwrap_err();

        assert!(matches!(err, AppError::Render(_)));
        assert!(err.to_string().contains("pdf tool exited with code 1"));
        assert!(service.invoice_log().load_all().is_empty());
    }

    #[test]
    fn test_catalog_edit_propagates_into_draft() {
        let (_dir, service) = temp_service();
        service.add_catalog_item(CatalogItem::new("Pen", 2.5, 6.0)).unwrap();

        let draft = DraftState::new();
        draft.with_draft_mut(|d| {
            d.add_item(LineItem::new("Pen", 4, 2.5, 6.0));
            d.add_item(LineItem::new("Pad", 1, 5.0, 6.0));
        });

        let change = service
            .update_catalog_item(0, CatalogItem::new("Gel Pen", 3.0, 8.0), &draft)
            .unwrap();

        assert_eq!(change.draft_rows_touched, 1);
        assert_eq!(change.catalog[0].name, "Gel Pen");

        draft.with_draft(|d| {
            assert_eq!(d.items()[0].name, "Gel Pen");
            assert_eq!(d.items()[0].quantity, 4);
            assert_eq!(d.items()[0].unit_price, 3.0);
            assert_eq!(d.items()[1].name, "Pad");
        });

        // Change also persisted
        assert_eq!(service.catalog_items()[0].name, "Gel Pen");
    }

    #[test]
    fn test_catalog_delete_drops_matching_draft_rows() {
        let (_dir, service) = temp_service();
        service.add_catalog_item(CatalogItem::new("Pen", 2.5, 6.0)).unwrap();
        service.add_catalog_item(CatalogItem::new("Pad", 5.0, 6.0)).unwrap();

        let draft = DraftState::new();
        draft.with_draft_mut(|d| {
            d.add_item(LineItem::new("Pen", 4, 2.5, 6.0));
            d.add_item(LineItem::new("Pen", 1, 2.5, 6.0));
            d.add_item(LineItem::new("Pad", 1, 5.0, 6.0));
        });

        let change = service.remove_catalog_item(0, &draft).unwrap();
        assert_eq!(change.draft_rows_touched, 2);
        assert_eq!(change.catalog.len(), 1);
        assert_eq!(draft.with_draft(|d| d.item_count()), 1);
    }

    #[test]
    fn test_catalog_changes_never_touch_persisted_invoices() {
        let (_dir, service) = temp_service();
        service.add_catalog_item(CatalogItem::new("Pen", 2.5, 0.0)).unwrap();
        service
            .generate(request(vec![LineItem::new("Pen", 10, 2.5, 0.0)]))
            .unwrap();

        let draft = DraftState::new();
        service
            .update_catalog_item(0, CatalogItem::new("Gel Pen", 9.0, 0.0), &draft)
            .unwrap();

        // The logged invoice keeps its original name and price
        let logged = &service.invoice_log().load_all()[0];
        assert_eq!(logged.items[0].name, "Pen");
        assert_eq!(logged.items[0].unit_price, 2.5);
    }

    #[test]
    fn test_catalog_index_out_of_range() {
        let (_dir, service) = temp_service();
        let draft = DraftState::new();
        let err = service
            .remove_catalog_item(3, &draft)
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::CatalogIndexOutOfRange { index: 3, len: 0 }
        ));
    }
}
