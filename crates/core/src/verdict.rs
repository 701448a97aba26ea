use serde::{Deserialize, Serialize};

/// Per-rule results of a buildability evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BuildabilityChecks {
    /// The zoning classification permits an ADU.
    pub zoning_allows: bool,
    /// The frontage meets the minimum width.
    pub frontage_ok: bool,
    /// The parcel is outside every flood area.
    pub not_flood: bool,
}

/// Outcome of evaluating a parcel for ADU buildability.
///
/// `notes` always holds exactly three entries, in the order zoning,
/// frontage, flood. Each note is driven by the same boolean as the
/// corresponding field of `checks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BuildabilityVerdict {
    /// Overall decision.
    #[serde(rename = "allowADU")]
    pub allow_adu: bool,
    /// Human-readable rationale, one line per check.
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<String>, example = json!([
        "Zoning R2 permits ADU.",
        "Frontage 10.0m ≥ 9m.",
        "Not in flood zone."
    ])))]
    pub notes: [String; 3],
    /// Individual rule results.
    pub checks: BuildabilityChecks,
}

impl BuildabilityVerdict {
    /// Rationale for the zoning check.
    #[must_use]
    pub fn zoning_note(&self) -> &str {
        &self.notes[0]
    }

    /// Rationale for the frontage check.
    #[must_use]
    pub fn frontage_note(&self) -> &str {
        &self.notes[1]
    }

    /// Rationale for the flood check.
    #[must_use]
    pub fn flood_note(&self) -> &str {
        &self.notes[2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BuildabilityVerdict {
        BuildabilityVerdict {
            allow_adu: true,
            notes: [
                "Zoning R2 permits ADU.".to_owned(),
                "Frontage 10.0m ≥ 9m.".to_owned(),
                "Not in flood zone.".to_owned(),
            ],
            checks: BuildabilityChecks {
                zoning_allows: true,
                frontage_ok: true,
                not_flood: true,
            },
        }
    }

    #[test]
    fn wire_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["allowADU"], true);
        assert_eq!(json["checks"]["zoningAllows"], true);
        assert_eq!(json["checks"]["frontageOk"], true);
        assert_eq!(json["checks"]["notFlood"], true);
        assert_eq!(json["notes"].as_array().unwrap().len(), 3);
        assert_eq!(json["notes"][1], "Frontage 10.0m ≥ 9m.");
    }

    #[test]
    fn note_accessors_follow_fixed_order() {
        let v = sample();
        assert_eq!(v.zoning_note(), "Zoning R2 permits ADU.");
        assert_eq!(v.frontage_note(), "Frontage 10.0m ≥ 9m.");
        assert_eq!(v.flood_note(), "Not in flood zone.");
    }

    #[test]
    fn deserialize_rejects_wrong_note_count() {
        let json = serde_json::json!({
            "allowADU": false,
            "notes": ["a", "b"],
            "checks": {"zoningAllows": false, "frontageOk": false, "notFlood": true}
        });
        assert!(serde_json::from_value::<BuildabilityVerdict>(json).is_err());
    }
}
