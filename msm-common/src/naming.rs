// msm-common/src/naming.rs
//! Template-based names for archived installations.
//!
//! Recognized tokens:
//!
//! | token | value        |
//! |-------|--------------|
//! | `%V`  | version      |
//! | `%Y`  | year         |
//! | `%M`  | month        |
//! | `%D`  | day          |
//! | `%H`  | hour         |
//! | `%m`  | minute       |
//! | `%S`  | second       |
//!
//! Numbers are rendered without zero padding. Anything else after a `%`
//! is copied through untouched.

use chrono::{Datelike, Local, NaiveDateTime, Timelike};

/// Default name for a history entry: version, then date, then time.
pub const DEFAULT_ARCHIVE_FORMAT: &str = "%V__%M-%D-%Y__%H-%m-%S";

/// Renders `template` for `version` at time `at`.
///
/// The template is scanned once, so a version string that itself contains
/// `%Y` or similar is inserted verbatim.
pub fn format_name(template: &str, version: &str, at: &NaiveDateTime) -> String {
    let mut out = String::with_capacity(template.len() + version.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let value = match chars.peek() {
            Some('V') => Some(version.to_string()),
            Some('Y') => Some(at.year().to_string()),
            Some('M') => Some(at.month().to_string()),
            Some('D') => Some(at.day().to_string()),
            Some('H') => Some(at.hour().to_string()),
            Some('m') => Some(at.minute().to_string()),
            Some('S') => Some(at.second().to_string()),
            _ => None,
        };
        match value {
            Some(v) => {
                chars.next();
                out.push_str(&v);
            }
            None => out.push('%'),
        }
    }
    out
}

/// [`format_name`] against the local clock, read once.
pub fn format_name_now(template: &str, version: &str) -> String {
    format_name(template, version, &Local::now().naive_local())
}
