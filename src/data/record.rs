use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{EdumapError, Result};

/// Educational attainment for one county.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttainmentRecord {
    /// County FIPS code, matching the topology geometry id.
    pub fips: u32,
    /// Two-letter state label, e.g. "AL".
    pub state: String,
    /// County name, e.g. "Autauga County".
    pub area_name: String,
    /// Percentage of adults holding a bachelor's degree or higher (0-100).
    #[serde(rename = "bachelorsOrHigher")]
    pub bachelors_or_higher: f64,
}

impl AttainmentRecord {
    pub fn new(fips: u32, area_name: &str, state: &str, bachelors_or_higher: f64) -> Self {
        Self { fips, state: state.to_string(), area_name: area_name.to_string(), bachelors_or_higher }
    }

    /// Tooltip text: `{area_name}, {state}: {percentage}%`.
    pub fn label(&self) -> String {
        format!("{}, {}: {}%", self.area_name, self.state, self.bachelors_or_higher)
    }

    fn validate(&self) -> std::result::Result<(), String> {
        let value = self.bachelors_or_higher;
        if !value.is_finite() { return Err(format!("bachelorsOrHigher is not finite ({value})")) }
        if !(0.0..=100.0).contains(&value) {
            return Err(format!("bachelorsOrHigher {value} outside [0, 100]"))
        }
        Ok(())
    }
}

/// Parse the education document: a JSON array of records.
///
/// Every element is checked individually so that a missing or mistyped field
/// reports the offending record index instead of failing somewhere downstream.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<AttainmentRecord>> {
    let values: Vec<Value> = serde_json::from_slice(bytes)
        .map_err(|source| EdumapError::Parse { document: "education records", source })?;

    values.into_iter().enumerate()
        .map(|(index, value)| {
            let record: AttainmentRecord = serde_json::from_value(value)
                .map_err(|e| EdumapError::InvalidRecord { index, message: e.to_string() })?;
            record.validate()
                .map_err(|message| EdumapError::InvalidRecord { index, message })?;
            Ok(record)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_records() {
        let json = br#"[
            {"fips": 1001, "state": "AL", "area_name": "Autauga County", "bachelorsOrHigher": 21.9},
            {"fips": 1003, "state": "AL", "area_name": "Baldwin County", "bachelorsOrHigher": 28.6}
        ]"#;
        let records = parse_records(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], AttainmentRecord::new(1001, "Autauga County", "AL", 21.9));
        assert_eq!(records[1].bachelors_or_higher, 28.6);
    }

    #[test]
    fn missing_field_reports_record_index() {
        let json = br#"[
            {"fips": 1001, "state": "AL", "area_name": "Autauga County", "bachelorsOrHigher": 21.9},
            {"fips": 1003, "state": "AL", "bachelorsOrHigher": 28.6}
        ]"#;
        match parse_records(json) {
            Err(EdumapError::InvalidRecord { index, message }) => {
                assert_eq!(index, 1);
                assert!(message.contains("area_name"), "{message}");
            }
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_percentage_is_rejected() {
        let json = br#"[{"fips": 5, "state": "ST", "area_name": "X", "bachelorsOrHigher": 120.0}]"#;
        assert!(matches!(parse_records(json), Err(EdumapError::InvalidRecord { index: 0, .. })));
    }

    #[test]
    fn non_array_document_is_a_parse_error() {
        assert!(matches!(parse_records(br#"{"fips": 1}"#), Err(EdumapError::Parse { .. })));
    }

    #[test]
    fn label_formats_name_state_and_percentage() {
        let record = AttainmentRecord::new(1, "A County", "ST", 42.0);
        assert_eq!(record.label(), "A County, ST: 42%");
        let record = AttainmentRecord::new(2, "B County", "ST", 10.5);
        assert_eq!(record.label(), "B County, ST: 10.5%");
    }
}
