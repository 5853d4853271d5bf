//! Shared test helpers for the pnr workspace.
//!
//! Proptest strategies produce raw dates and ordinals rather than identity
//! numbers so this crate stays free of a dependency on `pnr-id`.

use std::sync::Once;

use chrono::NaiveDate;
use proptest::prelude::*;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Installs a test-friendly tracing subscriber once per process.
///
/// Honors `RUST_LOG`; defaults to `debug` so rejected inputs show up in
/// failing test output.
pub fn init_test_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Any calendar date with a four-digit year.
pub fn any_date() -> impl Strategy<Value = NaiveDate> {
    dates_in_years(1, 9999)
}

/// Any calendar date in the 1900s.
pub fn twentieth_century_date() -> impl Strategy<Value = NaiveDate> {
    dates_in_years(1900, 1999)
}

/// Calendar dates with years in `from..=to`.
pub fn dates_in_years(from: i32, to: i32) -> impl Strategy<Value = NaiveDate> {
    (from..=to, 1u32..=12, 1u32..=31).prop_filter_map("not a calendar date", |(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d)
    })
}

/// Any valid ordinal number.
pub fn valid_ordinal() -> impl Strategy<Value = i32> {
    0i32..=9999
}

/// Ordinal numbers outside the valid range, on either side.
pub fn invalid_ordinal() -> impl Strategy<Value = i32> {
    prop_oneof![i32::MIN..0, 10_000i32..=i32::MAX]
}

/// Strings that are not identity numbers in any layout.
pub fn non_numeric_string() -> impl Strategy<Value = String> {
    "[a-zA-Z ]{0,20}"
}
