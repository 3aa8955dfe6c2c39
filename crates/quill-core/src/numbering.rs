//! # Invoice Numbering
//!
//! Invoice number formatting and counter wrap arithmetic.
//!
//! ## Number Anatomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  INV-20260831-1432-0007                                 │
//! │                  ─── ──────── ──── ────                                 │
//! │                   │      │      │    │                                  │
//! │                   │      │      │    └── counter, 4 digits, 0001-9999   │
//! │                   │      │      └─────── local time HHmm                │
//! │                   │      └────────────── local date yyyyMMdd            │
//! │                   └───────────────────── fixed prefix                   │
//! │                                                                         │
//! │  Two numbers minted in the same clock-minute differ only in the         │
//! │  counter segment. If the counter wraps past 9999 within a single        │
//! │  minute the full number repeats - accepted edge case, not deduplicated. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! These functions are pure; the clock read and the persisted counter live
//! upstream (quill-app binds them together, quill-store owns the counter).

use chrono::NaiveDateTime;

use crate::{COUNTER_MAX, COUNTER_MIN};

/// Formats an invoice number for the given timestamp and counter value.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use quill_core::numbering::format_invoice_number;
///
/// let at = NaiveDate::from_ymd_opt(2026, 8, 31)
///     .unwrap()
///     .and_hms_opt(14, 32, 5)
///     .unwrap();
/// assert_eq!(format_invoice_number(at, 7), "INV-20260831-1432-0007");
/// ```
pub fn format_invoice_number(at: NaiveDateTime, counter: u16) -> String {
    format!("INV-{}-{:04}", at.format("%Y%m%d-%H%M"), counter)
}

/// Advances a counter value, wrapping `9999 → 1` (never 0).
///
/// ## Example
/// ```rust
/// use quill_core::numbering::next_counter;
///
/// assert_eq!(next_counter(1), 2);
/// assert_eq!(next_counter(9999), 1);
/// ```
#[inline]
pub const fn next_counter(current: u16) -> u16 {
    (current % COUNTER_MAX) + 1
}

/// Returns true if `value` is a valid stored counter (1..=9999).
///
/// Parsed as i64 so that out-of-range file contents (e.g. `15000` or `-3`)
/// can be range-checked without overflow before the store falls back to
/// its default.
#[inline]
pub const fn counter_in_range(value: i64) -> bool {
    value >= COUNTER_MIN as i64 && value <= COUNTER_MAX as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 31)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_format_pads_counter_to_four_digits() {
        assert_eq!(format_invoice_number(at(9, 5, 0), 1), "INV-20260831-0905-0001");
        assert_eq!(format_invoice_number(at(14, 32, 5), 9999), "INV-20260831-1432-9999");
    }

    #[test]
    fn test_same_minute_numbers_differ_only_in_counter() {
        // Seconds within the minute do not appear in the number
        let first = format_invoice_number(at(14, 32, 5), 12);
        let second = format_invoice_number(at(14, 32, 58), 13);

        assert_ne!(first, second);
        assert_eq!(first[..first.len() - 4], second[..second.len() - 4]);
        assert_eq!(&first[first.len() - 4..], "0012");
        assert_eq!(&second[second.len() - 4..], "0013");
    }

    #[test]
    fn test_next_counter_increments() {
        assert_eq!(next_counter(1), 2);
        assert_eq!(next_counter(500), 501);
        assert_eq!(next_counter(9998), 9999);
    }

    #[test]
    fn test_next_counter_wraps_to_one_never_zero() {
        assert_eq!(next_counter(9999), 1);
    }

    #[test]
    fn test_counter_range_check() {
        assert!(counter_in_range(1));
        assert!(counter_in_range(9999));
        assert!(!counter_in_range(0));
        assert!(!counter_in_range(10000));
        assert!(!counter_in_range(15000));
        assert!(!counter_in_range(-3));
    }
}
