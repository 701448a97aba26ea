use lotwise_core::{BuildabilityChecks, BuildabilityVerdict, ParcelFacts};

use crate::notes::{flood_note, frontage_note, zoning_note};

/// The only zoning classification that permits an ADU.
pub const PERMITTED_ZONING_CODE: &str = "R2";

/// Minimum lot frontage, in meters, for the frontage check to pass.
pub const MIN_FRONTAGE_METERS: f64 = 9.0;

/// Evaluate a parcel for ADU buildability.
///
/// Total and side-effect free: every input, including fully absent optional
/// facts, yields a verdict, and identical input yields identical output.
///
/// - `zoning_allows`: the zoning code equals [`PERMITTED_ZONING_CODE`]. An
///   absent code never matches.
/// - `frontage_ok`: frontage is at least [`MIN_FRONTAGE_METERS`]. An absent
///   frontage is treated as `0`.
/// - `not_flood`: the parcel is outside every flood zone.
///
/// The overall decision is `zoning_allows && not_flood`. Frontage is checked
/// and reported but does not gate the decision.
pub fn evaluate(facts: &ParcelFacts) -> BuildabilityVerdict {
    let zoning_code = facts.zoning_code.as_deref();
    let zoning_allows = zoning_code == Some(PERMITTED_ZONING_CODE);
    let not_flood = !facts.in_flood_zone;

    let allow_adu = zoning_allows && not_flood;

    let frontage = facts.frontage_meters.unwrap_or(0.0);
    let frontage_ok = frontage >= MIN_FRONTAGE_METERS;

    BuildabilityVerdict {
        allow_adu,
        notes: [
            zoning_note(zoning_code, zoning_allows),
            frontage_note(frontage, frontage_ok),
            flood_note(not_flood).to_owned(),
        ],
        checks: BuildabilityChecks {
            zoning_allows,
            frontage_ok,
            not_flood,
        },
    }
}
