//! # Invoice Draft
//!
//! The in-memory, unsaved invoice being assembled by the user.
//!
//! ## Draft Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Draft Operations                                     │
//! │                                                                         │
//! │  Form Action                Draft Change                                │
//! │  ───────────                ────────────                                │
//! │                                                                         │
//! │  Stage catalog item ──────► items.push(line)                           │
//! │  Remove row ──────────────► items.remove(i)                            │
//! │  Clear form ──────────────► items.clear()                              │
//! │                                                                         │
//! │  Catalog edit ────────────► every draft item with the OLD name takes   │
//! │                             the new name, price, and tax rate          │
//! │                             (quantity untouched)                       │
//! │                                                                         │
//! │  Catalog delete ──────────► every draft item with that name removed    │
//! │                                                                         │
//! │  Propagation is keyed by NAME. Two catalog entries sharing a name are  │
//! │  indistinguishable to it. Already-persisted invoices are never touched.│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::{CatalogItem, LineItem};

/// An in-progress invoice's item list.
///
/// Pure collection logic; the thread-safe wrapper around it lives in
/// quill-app (`DraftState`). Never persisted - losing the draft on exit
/// is the existing, accepted behavior.
#[derive(Debug, Clone, Default)]
pub struct InvoiceDraft {
    items: Vec<LineItem>,
}

impl InvoiceDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        InvoiceDraft { items: Vec::new() }
    }

    /// Appends a line item to the draft.
    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Removes the item at `index`, if it exists.
    ///
    /// Out-of-range indices are a no-op; the form may race a row removal
    /// against a catalog delete that already dropped the row.
    pub fn remove_item(&mut self, index: usize) -> Option<LineItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Removes all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The staged items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Clones the staged items out for invoice assembly.
    pub fn items_snapshot(&self) -> Vec<LineItem> {
        self.items.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of staged subtotals.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    /// Sum of staged tax amounts.
    pub fn tax(&self) -> f64 {
        self.items.iter().map(LineItem::tax_amount).sum()
    }

    /// Grand total of the staged items.
    pub fn grand_total(&self) -> f64 {
        self.subtotal() + self.tax()
    }

    // =========================================================================
    // Catalog Propagation
    // =========================================================================

    /// Applies a catalog edit to the draft: every staged item named
    /// `old_name` takes the updated name, unit price, and tax rate.
    /// Quantities are kept.
    ///
    /// Returns the number of items updated.
    pub fn apply_catalog_edit(&mut self, old_name: &str, updated: &CatalogItem) -> usize {
        let mut touched = 0;
        for item in self.items.iter_mut().filter(|i| i.name == old_name) {
            item.name = updated.name.clone();
            item.unit_price = updated.unit_price;
            item.tax_rate_percent = updated.tax_rate_percent;
            touched += 1;
        }
        touched
    }

    /// Applies a catalog delete to the draft: every staged item with that
    /// name is removed. Returns the number of items removed.
    pub fn apply_catalog_delete(&mut self, name: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|i| i.name != name);
        before - self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with(names_qty: &[(&str, u32)]) -> InvoiceDraft {
        let mut draft = InvoiceDraft::new();
        for (name, qty) in names_qty {
            draft.add_item(LineItem::new(*name, *qty, 10.0, 6.0));
        }
        draft
    }

    #[test]
    fn test_add_and_remove_preserve_order() {
        let mut draft = draft_with(&[("A", 1), ("B", 2), ("C", 3)]);

        let removed = draft.remove_item(1).unwrap();
        assert_eq!(removed.name, "B");

        let names: Vec<_> = draft.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut draft = draft_with(&[("A", 1)]);
        assert!(draft.remove_item(5).is_none());
        assert_eq!(draft.item_count(), 1);
    }

    #[test]
    fn test_draft_totals() {
        let mut draft = InvoiceDraft::new();
        draft.add_item(LineItem::new("A", 2, 50.0, 0.0));
        draft.add_item(LineItem::new("B", 1, 100.0, 10.0));

        assert_eq!(draft.subtotal(), 200.0);
        assert_eq!(draft.tax(), 10.0);
        assert_eq!(draft.grand_total(), 210.0);
    }

    #[test]
    fn test_catalog_edit_propagates_by_name_keeping_quantity() {
        let mut draft = draft_with(&[("Pen", 4), ("Pad", 2), ("Pen", 1)]);
        let updated = CatalogItem::new("Gel Pen", 3.0, 8.0);

        let touched = draft.apply_catalog_edit("Pen", &updated);
        assert_eq!(touched, 2);

        let items = draft.items();
        assert_eq!(items[0].name, "Gel Pen");
        assert_eq!(items[0].quantity, 4); // quantity untouched
        assert_eq!(items[0].unit_price, 3.0);
        assert_eq!(items[0].tax_rate_percent, 8.0);
        assert_eq!(items[1].name, "Pad"); // other names untouched
        assert_eq!(items[2].name, "Gel Pen");
        assert_eq!(items[2].quantity, 1);
    }

    #[test]
    fn test_catalog_edit_with_no_matches_touches_nothing() {
        let mut draft = draft_with(&[("Pad", 2)]);
        let updated = CatalogItem::new("Gel Pen", 3.0, 8.0);
        assert_eq!(draft.apply_catalog_edit("Pen", &updated), 0);
        assert_eq!(draft.items()[0].name, "Pad");
    }

    #[test]
    fn test_catalog_delete_removes_all_matching_rows() {
        let mut draft = draft_with(&[("Pen", 4), ("Pad", 2), ("Pen", 1)]);

        let removed = draft.apply_catalog_delete("Pen");
        assert_eq!(removed, 2);

        let names: Vec<_> = draft.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Pad"]);
    }
}
