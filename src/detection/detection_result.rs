use crate::catalog::{FormatCandidate, FormatKind};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The outcome of a single detection call.
///
/// Either all of format, name and kind are known (a valid result) or none of them are.
/// The fields are private so no other combination can be built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "DetectionRecord", try_from = "DetectionRecord")]
pub struct DetectionResult {
    matched: Option<MatchedFormat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MatchedFormat {
    format: String,
    name: String,
    kind: FormatKind,
}

impl DetectionResult {
    pub(crate) fn matched(candidate: &FormatCandidate) -> Self {
        DetectionResult {
            matched: Some(MatchedFormat {
                format: candidate.pattern().to_string(),
                name: candidate.name().to_string(),
                kind: candidate.kind(),
            }),
        }
    }

    pub fn no_match() -> Self {
        DetectionResult { matched: None }
    }

    pub fn format(&self) -> Option<&str> {
        self.matched.as_ref().map(|matched| matched.format.as_str())
    }

    pub fn name(&self) -> Option<&str> {
        self.matched.as_ref().map(|matched| matched.name.as_str())
    }

    pub fn kind(&self) -> Option<FormatKind> {
        self.matched.as_ref().map(|matched| matched.kind)
    }

    pub fn is_valid(&self) -> bool {
        self.matched.is_some()
    }
}

/// Flat wire shape: `{"format": .., "name": .., "type": .., "valid": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionRecord {
    format: Option<String>,
    name: Option<String>,
    #[serde(rename = "type")]
    kind: Option<FormatKind>,
    valid: bool,
}

impl From<DetectionResult> for DetectionRecord {
    fn from(result: DetectionResult) -> Self {
        match result.matched {
            Some(matched) => DetectionRecord {
                format: Some(matched.format),
                name: Some(matched.name),
                kind: Some(matched.kind),
                valid: true,
            },
            None => DetectionRecord {
                format: None,
                name: None,
                kind: None,
                valid: false,
            },
        }
    }
}

impl TryFrom<DetectionRecord> for DetectionResult {
    type Error = String;

    fn try_from(record: DetectionRecord) -> Result<Self, Self::Error> {
        match record {
            DetectionRecord {
                format: Some(format),
                name: Some(name),
                kind: Some(kind),
                valid: true,
            } => Ok(DetectionResult {
                matched: Some(MatchedFormat { format, name, kind }),
            }),
            DetectionRecord {
                format: None,
                name: None,
                kind: None,
                valid: false,
            } => Ok(DetectionResult::no_match()),
            inconsistent => Err(format!(
                "A detection result must either carry format, name and type and be valid, or carry none of them and be invalid. Found {inconsistent:?}"
            )),
        }
    }
}

/// A value parsed with the layout the detector picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetectedValue {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl DetectedValue {
    pub fn kind(&self) -> FormatKind {
        match self {
            DetectedValue::Date(_) => FormatKind::Date,
            DetectedValue::DateTime(_) => FormatKind::DateTime,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            DetectedValue::Date(date) => *date,
            DetectedValue::DateTime(datetime) => datetime.date(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn iso_date() -> FormatCandidate {
        FormatCandidate::try_new("ISO_DATE", "yyyy-MM-dd").unwrap()
    }

    #[rstest]
    fn test_matched_result(iso_date: FormatCandidate) {
        let result = DetectionResult::matched(&iso_date);
        assert!(result.is_valid());
        assert_eq!(result.format(), Some("yyyy-MM-dd"));
        assert_eq!(result.name(), Some("ISO_DATE"));
        assert_eq!(result.kind(), Some(FormatKind::Date));
    }

    #[rstest]
    fn test_no_match_result() {
        let result = DetectionResult::no_match();
        assert!(!result.is_valid());
        assert_eq!(result.format(), None);
        assert_eq!(result.name(), None);
        assert_eq!(result.kind(), None);
    }

    #[rstest]
    fn test_serialize_matched(iso_date: FormatCandidate) {
        let value = serde_json::to_value(DetectionResult::matched(&iso_date)).unwrap();
        assert_eq!(
            value,
            json!({"format": "yyyy-MM-dd", "name": "ISO_DATE", "type": "Date", "valid": true})
        );
    }

    #[rstest]
    fn test_serialize_no_match() {
        let value = serde_json::to_value(DetectionResult::no_match()).unwrap();
        assert_eq!(
            value,
            json!({"format": null, "name": null, "type": null, "valid": false})
        );
    }

    #[rstest]
    fn test_deserialize_rejects_partial_result() {
        let partial = json!({"format": "yyyy-MM-dd", "name": null, "type": "Date", "valid": true});
        assert!(serde_json::from_value::<DetectionResult>(partial).is_err());

        let valid_but_empty = json!({"format": null, "name": null, "type": null, "valid": true});
        assert!(serde_json::from_value::<DetectionResult>(valid_but_empty).is_err());
    }

    #[rstest]
    fn test_deserialize_accepts_consistent_result() {
        let raw = json!({"format": "HH:mm", "name": "TIME_SHORT", "type": "DateTime", "valid": true});
        let result: DetectionResult = serde_json::from_value(raw).unwrap();
        assert_eq!(result.name(), Some("TIME_SHORT"));
        assert_eq!(result.kind(), Some(FormatKind::DateTime));
    }

    #[rstest]
    fn test_detected_value_date() {
        let datetime = NaiveDate::from_ymd_opt(2024, 12, 16)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        let value = DetectedValue::DateTime(datetime);
        assert_eq!(value.kind(), FormatKind::DateTime);
        assert_eq!(value.date(), NaiveDate::from_ymd_opt(2024, 12, 16).unwrap());
    }
}
