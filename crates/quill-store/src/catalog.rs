//! # Item Catalog Store
//!
//! JSON persistence for the reusable line-item templates.
//!
//! Same full-overwrite pattern as the invoice log, scoped to its own file.
//! The cross-entity rule (catalog edits propagating into the open draft)
//! lives in quill-core's draft module and is wired up by quill-app; this
//! store only reads and writes the list.

use std::path::PathBuf;

use quill_core::CatalogItem;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::paths::StorePaths;

/// Store for the persisted item catalog.
#[derive(Debug)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    /// Opens the store at its well-known location.
    pub fn open(paths: &StorePaths) -> Self {
        CatalogStore {
            path: paths.catalog_file(),
        }
    }

    /// Loads the catalog, in saved order.
    ///
    /// Absent, unreadable, or malformed files yield an empty catalog with a
    /// logged warning; a damaged catalog never blocks the rest of the form.
    pub fn load(&self) -> Vec<CatalogItem> {
        if !self.path.exists() {
            return Vec::new();
        }

        let contents = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Catalog file unreadable; starting with an empty catalog"
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(items) => items,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Catalog file malformed; starting with an empty catalog"
                );
                Vec::new()
            }
        }
    }

    /// Saves the full catalog, overwriting the file.
    pub fn save(&self, items: &[CatalogItem]) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(items).map_err(|e| StoreError::Encode {
            path: self.path.clone(),
            source: e,
        })?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::write(self.path.clone(), e))?;
        }
        std::fs::write(&self.path, json).map_err(|e| StoreError::write(self.path.clone(), e))?;

        debug!(path = %self.path.display(), count = items.len(), "Catalog saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, CatalogStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::open(&StorePaths::in_dir(dir.path()));
        (dir, store)
    }

    #[test]
    fn test_absent_catalog_is_empty() {
        let (_dir, store) = temp_store();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_catalog_round_trip_preserves_order() {
        let (_dir, store) = temp_store();
        let items = vec![
            CatalogItem::new("Laptop", 8999.0, 0.0),
            CatalogItem::new("Headset", 699.0, 0.0),
            CatalogItem::new("Notebook", 12.5, 6.0),
        ];

        store.save(&items).unwrap();
        assert_eq!(store.load(), items);
    }

    #[test]
    fn test_save_overwrites_previous_catalog() {
        let (_dir, store) = temp_store();
        store.save(&[CatalogItem::new("Old", 1.0, 0.0)]).unwrap();
        store.save(&[CatalogItem::new("New", 2.0, 0.0)]).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "New");
    }

    #[test]
    fn test_malformed_catalog_treated_as_empty() {
        let (dir, store) = temp_store();
        std::fs::write(StorePaths::in_dir(dir.path()).catalog_file(), "[{broken").unwrap();
        assert!(store.load().is_empty());
    }
}
