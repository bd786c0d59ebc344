// Submission record and the validation predicates applied to user input.
// The record is only constructed after every field has passed its
// validator and the user has confirmed the summary.

use anyhow::Result;
use serde::Serialize;

/// Regions a submission may target, matched case-insensitively.
pub const VALID_REGIONS: [&str; 2] = ["west-us", "east-us"];

/// The confirmed fields of one run, serialized with the exact key names
/// and order the downstream work item expects.
#[derive(Serialize, Debug)]
pub struct Submission {
    #[serde(rename = "User ID")]
    pub user_id: String,
    #[serde(rename = "BGPAS Number")]
    pub bgpas_number: String,
    #[serde(rename = "Region")]
    pub region: String,
}

impl Submission {
    /// Serialize to compact JSON text. Key order follows field order, so
    /// identical records always produce byte-identical output.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// True iff `s` is exactly 5 characters, all decimal digits.
pub fn validate_bgpas_number(s: &str) -> bool {
    s.len() == 5 && s.chars().all(|c| c.is_ascii_digit())
}

/// True iff the lowercase form of `s` names a valid region.
pub fn validate_region(s: &str) -> bool {
    let lower = s.to_lowercase();
    VALID_REGIONS.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bgpas_accepts_five_digits() {
        assert!(validate_bgpas_number("12345"));
        assert!(validate_bgpas_number("00000"));
    }

    #[test]
    fn bgpas_rejects_wrong_length() {
        assert!(!validate_bgpas_number("1234"));
        assert!(!validate_bgpas_number("123456"));
        assert!(!validate_bgpas_number(""));
    }

    #[test]
    fn bgpas_rejects_non_digits() {
        assert!(!validate_bgpas_number("1234a"));
        assert!(!validate_bgpas_number("12 45"));
        // The empty-input default also reaches this validator.
        assert!(!validate_bgpas_number("Y"));
    }

    #[test]
    fn region_matches_case_insensitively() {
        assert!(validate_region("west-us"));
        assert!(validate_region("EAST-US"));
        assert!(validate_region("East-Us"));
    }

    #[test]
    fn region_rejects_unknown_values() {
        assert!(!validate_region("north-eu"));
        assert!(!validate_region("westus"));
        assert!(!validate_region(""));
        assert!(!validate_region("Y"));
    }

    #[test]
    fn to_json_uses_fixed_keys_in_order() {
        let record = Submission {
            user_id: "alice".into(),
            bgpas_number: "12345".into(),
            region: "EAST-US".into(),
        };
        let json = record.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"User ID":"alice","BGPAS Number":"12345","Region":"EAST-US"}"#
        );
    }

    #[test]
    fn to_json_is_deterministic() {
        let record = Submission {
            user_id: "bob".into(),
            bgpas_number: "98765".into(),
            region: "west-us".into(),
        };
        assert_eq!(record.to_json().unwrap(), record.to_json().unwrap());
    }
}
