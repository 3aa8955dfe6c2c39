//! # Defaults & Counter Store
//!
//! Seller defaults and the next invoice counter, persisted as a flat
//! key=value file in the user's home directory.
//!
//! ## File Format
//! ```text
//! # Quill Invoice Defaults
//! seller.name=Acme Ltd
//! seller.address=1 Main Street
//! seller.taxId=TAX-123
//! seller.phone=555-0100
//! seller.email=billing@acme.example
//! seller.hasLogo=true
//! invoice.counter=42
//! ```
//!
//! ## Counter Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                `get_and_increment` is one atomic unit                   │
//! │                                                                         │
//! │   lock ──► read current ──► advance (9999 wraps to 1) ──► persist ──►  │
//! │   unlock                                                                │
//! │                                                                         │
//! │   • No two callers ever observe the same counter value.                │
//! │   • The stored value is always the NEXT one to hand out.               │
//! │   • Persistence is best-effort: the in-memory advance stands even      │
//! │     when the write fails. The failure is warn!-logged and returned     │
//! │     in CounterAdvance.persist_error so callers and tests can see it.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use quill_core::numbering::{counter_in_range, next_counter};
use quill_core::COUNTER_MIN;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::paths::StorePaths;

const KEY_SELLER_NAME: &str = "seller.name";
const KEY_SELLER_ADDRESS: &str = "seller.address";
const KEY_SELLER_TAX_ID: &str = "seller.taxId";
const KEY_SELLER_PHONE: &str = "seller.phone";
const KEY_SELLER_EMAIL: &str = "seller.email";
const KEY_SELLER_HAS_LOGO: &str = "seller.hasLogo";
const KEY_INVOICE_COUNTER: &str = "invoice.counter";

// =============================================================================
// Data Shapes
// =============================================================================

/// Saved seller details, pre-filled into the form on startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SellerDefaults {
    pub name: String,
    pub address: String,
    pub tax_id: String,
    pub phone: String,
    pub email: String,
    pub has_logo: bool,
}

/// Everything the defaults file holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Defaults {
    pub seller: SellerDefaults,
    /// The next counter value that will be handed out (1..=9999).
    pub next_counter: u16,
}

/// Outcome of one counter advance.
///
/// `value` is always valid for this run; `persist_error` reports whether it
/// was durably recorded.
#[derive(Debug)]
pub struct CounterAdvance {
    /// The counter value handed out to the caller.
    pub value: u16,
    /// Set when writing the advanced counter back to disk failed.
    pub persist_error: Option<StoreError>,
}

// =============================================================================
// Store
// =============================================================================

/// Store for seller defaults and the rolling invoice counter.
///
/// The counter lives behind a `Mutex` so a future multi-threaded caller
/// (bulk generation over many buyers) cannot receive duplicate values.
#[derive(Debug)]
pub struct DefaultsStore {
    path: PathBuf,
    counter: Mutex<u16>,
}

impl DefaultsStore {
    /// Opens the store, seeding the in-memory counter from the file.
    ///
    /// Absent file, unreadable file, or an out-of-range stored counter
    /// (`< 1` or `> 9999`) all fall back to the default starting counter,
    /// without error.
    pub fn open(paths: &StorePaths) -> Self {
        let path = paths.defaults_file();
        let props = read_properties(&path);
        let counter = parse_counter(&path, &props);
        debug!(path = %path.display(), counter, "Defaults store opened");
        DefaultsStore {
            path,
            counter: Mutex::new(counter),
        }
    }

    /// Loads seller defaults from disk and pairs them with the current
    /// in-memory next counter.
    ///
    /// The in-memory counter is authoritative once the store is open: it may
    /// be ahead of the file if a best-effort persist failed earlier in this
    /// run.
    pub fn load(&self) -> Defaults {
        let props = read_properties(&self.path);
        Defaults {
            seller: seller_from_props(&props),
            next_counter: *self.counter.lock().expect("counter mutex poisoned"),
        }
    }

    /// Saves seller defaults, rewriting the whole file and preserving the
    /// current counter value.
    ///
    /// Unlike the counter advance this is a user-initiated save; failures
    /// propagate so the UI can report them.
    pub fn save_defaults(&self, seller: &SellerDefaults) -> StoreResult<()> {
        let counter = *self.counter.lock().expect("counter mutex poisoned");
        let mut props = BTreeMap::new();
        put_seller(&mut props, seller);
        props.insert(KEY_INVOICE_COUNTER.to_string(), counter.to_string());
        write_properties(&self.path, &props)?;
        debug!(path = %self.path.display(), "Seller defaults saved");
        Ok(())
    }

    /// Returns the current counter and advances it, persisting the new
    /// "next to use" value before returning.
    ///
    /// The read-modify-persist sequence holds the lock throughout, so
    /// concurrent callers always observe distinct values.
    pub fn get_and_increment(&self) -> CounterAdvance {
        let mut counter = self.counter.lock().expect("counter mutex poisoned");
        let value = *counter;
        *counter = next_counter(value);

        let persist_error = match self.persist_counter(*counter) {
            Ok(()) => None,
            Err(e) => {
                // Best-effort: the value already handed out stays valid for
                // this run even if the new state was not durably saved.
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to persist invoice counter; continuing with in-memory value"
                );
                Some(e)
            }
        };

        CounterAdvance {
            value,
            persist_error,
        }
    }

    /// Rewrites the file with the advanced counter, keeping every other key.
    fn persist_counter(&self, next: u16) -> StoreResult<()> {
        let mut props = read_properties(&self.path);
        props.insert(KEY_INVOICE_COUNTER.to_string(), next.to_string());
        write_properties(&self.path, &props)
    }
}

// =============================================================================
// Flat key=value helpers
// =============================================================================
// The format is fixed by the original defaults file (Java Properties style,
// dotted keys, unquoted values): one `key=value` per line, `#`/`!` comments.
// Values must not contain newlines, which holds for form fields.

fn read_properties(path: &Path) -> BTreeMap<String, String> {
    if !path.exists() {
        return BTreeMap::new();
    }
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_properties(&contents),
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "Defaults file unreadable; using in-memory defaults"
            );
            BTreeMap::new()
        }
    }
}

fn parse_properties(contents: &str) -> BTreeMap<String, String> {
    let mut props = BTreeMap::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            props.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    props
}

fn write_properties(path: &Path, props: &BTreeMap<String, String>) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| StoreError::write(path.to_path_buf(), e))?;
    }

    let mut contents = String::from("# Quill Invoice Defaults\n");
    for (key, value) in props {
        contents.push_str(key);
        contents.push('=');
        contents.push_str(value);
        contents.push('\n');
    }

    std::fs::write(path, contents).map_err(|e| StoreError::write(path.to_path_buf(), e))
}

fn parse_counter(path: &Path, props: &BTreeMap<String, String>) -> u16 {
    match props.get(KEY_INVOICE_COUNTER) {
        None => COUNTER_MIN,
        Some(raw) => match raw.parse::<i64>() {
            Ok(v) if counter_in_range(v) => v as u16,
            Ok(v) => {
                warn!(
                    path = %path.display(),
                    stored = v,
                    "Stored invoice counter out of range; falling back to {}",
                    COUNTER_MIN
                );
                COUNTER_MIN
            }
            Err(_) => {
                warn!(
                    path = %path.display(),
                    stored = %raw,
                    "Stored invoice counter not numeric; falling back to {}",
                    COUNTER_MIN
                );
                COUNTER_MIN
            }
        },
    }
}

fn seller_from_props(props: &BTreeMap<String, String>) -> SellerDefaults {
    let get = |key: &str| props.get(key).cloned().unwrap_or_default();
    SellerDefaults {
        name: get(KEY_SELLER_NAME),
        address: get(KEY_SELLER_ADDRESS),
        tax_id: get(KEY_SELLER_TAX_ID),
        phone: get(KEY_SELLER_PHONE),
        email: get(KEY_SELLER_EMAIL),
        has_logo: props.get(KEY_SELLER_HAS_LOGO).map(String::as_str) == Some("true"),
    }
}

fn put_seller(props: &mut BTreeMap<String, String>, seller: &SellerDefaults) {
    props.insert(KEY_SELLER_NAME.to_string(), seller.name.clone());
    props.insert(KEY_SELLER_ADDRESS.to_string(), seller.address.clone());
    props.insert(KEY_SELLER_TAX_ID.to_string(), seller.tax_id.clone());
    props.insert(KEY_SELLER_PHONE.to_string(), seller.phone.clone());
    props.insert(KEY_SELLER_EMAIL.to_string(), seller.email.clone());
    props.insert(
        KEY_SELLER_HAS_LOGO.to_string(),
        if seller.has_logo { "true" } else { "false" }.to_string(),
    );
}
