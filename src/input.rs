use anyhow::anyhow;
use serde::Deserialize;
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};
use serde_valid::Validate;
use std::io::{BufReader, Read};

pub fn ingest_for_processing(json: impl Read) -> Result<HouseholdProfile, anyhow::Error> {
    let profile: HouseholdProfile = serde_json::from_reader(BufReader::new(json))?;
    profile
        .validate()
        .map_err(|err| anyhow!("household profile failed validation: {err}"))?;
    Ok(profile)
}

/// The input record for one evaluation. Only the accommodation type and the
/// three appliance flags affect the calculation; the remaining fields are
/// display-only and pass through to the presentation layer unchanged.
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct HouseholdProfile {
    pub name: Option<String>,
    #[validate(minimum = 1)]
    #[validate(maximum = 120)]
    pub age: Option<u32>,
    pub city: Option<String>,
    pub area: Option<String>,
    pub tenancy: Option<Tenancy>,
    pub accommodation_type: AccommodationType,
    #[serde(default)]
    pub has_ac: bool,
    #[serde(default)]
    pub has_fridge: bool,
    #[serde(default)]
    pub has_washing_machine: bool,
    // a tariff rate may ride along in the document; a CLI flag takes precedence
    #[validate(minimum = 0.)]
    pub rate_per_kwh: Option<f64>,
}

// Unrecognised values deserialize into the catch-all variant rather than
// failing at the serde boundary, so the estimator is the one to reject them.
#[derive(Clone, Debug, Deserialize_enum_str, Serialize_enum_str, Eq, Hash, PartialEq)]
pub enum AccommodationType {
    #[serde(rename = "1BHK")]
    OneBhk,
    #[serde(rename = "2BHK")]
    TwoBhk,
    #[serde(rename = "3BHK")]
    ThreeBhk,
    #[serde(other)]
    Unrecognised(String),
}

#[derive(Clone, Copy, Debug, Deserialize_enum_str, Serialize_enum_str, Eq, PartialEq)]
pub enum Tenancy {
    Flat,
    Tenement,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn full_document() -> &'static str {
        r#"{
            "name": "Asha",
            "age": 31,
            "city": "Mumbai",
            "area": "Andheri",
            "tenancy": "Flat",
            "accommodation_type": "2BHK",
            "has_ac": true,
            "has_fridge": true,
            "has_washing_machine": false,
            "rate_per_kwh": 5.0
        }"#
    }

    #[rstest]
    fn should_ingest_a_full_document(full_document: &str) {
        let profile = ingest_for_processing(full_document.as_bytes()).unwrap();
        assert_eq!(profile.accommodation_type, AccommodationType::TwoBhk);
        assert_eq!(profile.tenancy, Some(Tenancy::Flat));
        assert_eq!(profile.name.as_deref(), Some("Asha"));
        assert!(profile.has_ac);
        assert!(profile.has_fridge);
        assert!(!profile.has_washing_machine);
        assert_eq!(profile.rate_per_kwh, Some(5.0));
    }

    #[rstest]
    fn should_ingest_a_minimal_document_with_appliance_defaults() {
        let profile =
            ingest_for_processing(r#"{"accommodation_type": "1BHK"}"#.as_bytes()).unwrap();
        assert_eq!(profile.accommodation_type, AccommodationType::OneBhk);
        assert!(!profile.has_ac && !profile.has_fridge && !profile.has_washing_machine);
        assert_eq!(profile.name, None);
        assert_eq!(profile.rate_per_kwh, None);
    }

    #[rstest]
    fn should_pass_unknown_accommodation_types_through_for_the_estimator_to_reject() {
        let profile =
            ingest_for_processing(r#"{"accommodation_type": "Studio"}"#.as_bytes()).unwrap();
        assert_eq!(
            profile.accommodation_type,
            AccommodationType::Unrecognised("Studio".to_string())
        );
    }

    #[rstest]
    #[case::negative_rate(r#"{"accommodation_type": "1BHK", "rate_per_kwh": -1.0}"#)]
    #[case::age_too_low(r#"{"accommodation_type": "1BHK", "age": 0}"#)]
    #[case::age_too_high(r#"{"accommodation_type": "1BHK", "age": 130}"#)]
    fn should_reject_out_of_range_values(#[case] document: &str) {
        assert!(ingest_for_processing(document.as_bytes()).is_err());
    }

    #[rstest]
    fn should_reject_unknown_fields() {
        assert!(ingest_for_processing(
            r#"{"accommodation_type": "1BHK", "solar_panels": true}"#.as_bytes()
        )
        .is_err());
    }
}
