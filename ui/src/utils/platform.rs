//! Platform helpers for reading the browser environment.

use chrono::{Local, NaiveDate};

/// Origin used when no browser window is available.
pub const FALLBACK_ORIGIN: &str = "http://localhost:8080";

/// Current calendar date on the local clock.
///
/// With chrono's `wasmbind` feature this reads the browser's `Date`, so it
/// matches what the user sees in the native date picker.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Origin of the page hosting the application, e.g. `https://example.org`.
#[cfg(target_arch = "wasm32")]
pub fn page_origin() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .filter(|origin| !origin.is_empty() && origin != "null")
}

#[cfg(not(target_arch = "wasm32"))]
pub fn page_origin() -> Option<String> {
    None
}
