//! Rationale text for each buildability check.
//!
//! The strings produced here are part of the public report format and are
//! compared byte-for-byte by consumers, so wording and number formatting must
//! stay stable.

use crate::engine::{MIN_FRONTAGE_METERS, PERMITTED_ZONING_CODE};

/// Placeholder rendered when a parcel has no zoning code.
pub const MISSING_ZONING_LABEL: &str = "N/A";

/// Note for the zoning check.
pub fn zoning_note(zoning_code: Option<&str>, allowed: bool) -> String {
    if allowed {
        format!("Zoning {PERMITTED_ZONING_CODE} permits ADU.")
    } else {
        format!(
            "Zoning {} does not permit ADU.",
            zoning_code.unwrap_or(MISSING_ZONING_LABEL)
        )
    }
}

/// Note for the frontage check. `frontage` is the resolved value that was
/// compared against the minimum.
pub fn frontage_note(frontage: f64, ok: bool) -> String {
    let op = if ok { "≥" } else { "<" };
    format!(
        "Frontage {}m {op} {MIN_FRONTAGE_METERS}m.",
        format_tenths(frontage)
    )
}

/// Note for the flood check.
pub fn flood_note(not_flood: bool) -> &'static str {
    if not_flood {
        "Not in flood zone."
    } else {
        "In flood zone."
    }
}

/// Format a value with exactly one fractional digit.
///
/// Rounding is decided on the exact binary value, so `8.95` (stored as
/// `8.9499...`) renders as `8.9`. Exact binary midpoints (`x.25`, `x.75`)
/// round away from zero. Negative zero renders as `0.0`.
#[allow(clippy::float_cmp)]
pub fn format_tenths(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        return "0.0".to_owned();
    }
    if is_tenths_midpoint(value) {
        // value * 10 is exact here, and `round` goes away from zero.
        return format!("{:.1}", (value * 10.0).round() / 10.0);
    }
    format!("{value:.1}")
}

/// A finite `f64` sits exactly between two tenths only when it is an odd
/// multiple of 0.25.
fn is_tenths_midpoint(value: f64) -> bool {
    (value * 4.0).fract() == 0.0 && (value * 2.0).fract() != 0.0
}
