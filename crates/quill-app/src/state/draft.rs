//! # Draft State
//!
//! Thread-safe wrapper around the open invoice draft.
//!
//! ## Thread Safety
//! The draft is wrapped in `Arc<Mutex<T>>` because:
//! 1. The interactive surface and catalog operations both touch it
//! 2. Only one operation should modify the draft at a time
//! 3. Catalog propagation must see a consistent item list
//!
//! ## Why Not RwLock?
//! Draft operations are quick and most of them modify state. An RwLock
//! would add complexity with minimal benefit.

use std::sync::{Arc, Mutex};

use quill_core::InvoiceDraft;

/// Shared handle to the open invoice draft.
#[derive(Debug, Clone, Default)]
pub struct DraftState {
    draft: Arc<Mutex<InvoiceDraft>>,
}

impl DraftState {
    /// Creates a new empty draft state.
    pub fn new() -> Self {
        DraftState {
            draft: Arc::new(Mutex::new(InvoiceDraft::new())),
        }
    }

    /// Executes a function with read access to the draft.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = draft_state.with_draft(|draft| draft.grand_total());
    /// ```
    pub fn with_draft<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InvoiceDraft) -> R,
    {
        let draft = self.draft.lock().expect("draft mutex poisoned");
        f(&draft)
    }

    /// Executes a function with write access to the draft.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// draft_state.with_draft_mut(|draft| draft.add_item(item));
    /// ```
    pub fn with_draft_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut InvoiceDraft) -> R,
    {
        let mut draft = self.draft.lock().expect("draft mutex poisoned");
        f(&mut draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::LineItem;

    #[test]
    fn test_draft_state_shares_one_draft() {
        let state = DraftState::new();
        let handle = state.clone();

        state.with_draft_mut(|d| d.add_item(LineItem::new("Pen", 2, 2.5, 0.0)));

        assert_eq!(handle.with_draft(|d| d.item_count()), 1);
        assert_eq!(handle.with_draft(|d| d.subtotal()), 5.0);
    }

    #[test]
    fn test_clear_empties_shared_draft() {
        let state = DraftState::new();
        state.with_draft_mut(|d| d.add_item(LineItem::new("Pen", 1, 2.5, 0.0)));
        state.with_draft_mut(|d| d.clear());
        assert!(state.with_draft(|d| d.is_empty()));
    }
}
