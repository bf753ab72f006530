use crate::catalog::{FormatCandidate, FormatCatalog};
use crate::detection::detection_result::{DetectedValue, DetectionResult};
use crate::detection::error::DetectionError;
use crate::detection::failure_sink::{FailureSink, LogFailureSink};
use crate::parsing::{ExactParser, PatternParser};
use crate::utils::normalize_value;
use log::debug;
use serde_json::Value;

/// Infers which catalog layout a date or time string follows.
///
/// Candidates are tried strictly in catalog order and the first one the parser accepts
/// wins. There is no scoring and no look at the field values, so for text that fits more
/// than one layout (`01/02/2024` fits both `MM/dd/yyyy` and `dd/MM/yyyy`) the answer is
/// whichever layout is declared first.
///
/// The detector holds no mutable state and can be shared between threads freely.
#[derive(Debug, Clone)]
pub struct DateFormatDetector<P = PatternParser, S = LogFailureSink> {
    catalog: FormatCatalog,
    parser: P,
    failure_sink: S,
}

impl DateFormatDetector {
    pub fn new() -> Self {
        Self::with_catalog(FormatCatalog::builtin())
    }

    pub fn with_catalog(catalog: FormatCatalog) -> Self {
        DateFormatDetector::with_parts(catalog, PatternParser, LogFailureSink)
    }
}

impl Default for DateFormatDetector {
    fn default() -> Self {
        DateFormatDetector::new()
    }
}

impl<P: ExactParser, S: FailureSink> DateFormatDetector<P, S> {
    pub fn with_parts(catalog: FormatCatalog, parser: P, failure_sink: S) -> Self {
        DateFormatDetector {
            catalog,
            parser,
            failure_sink,
        }
    }

    pub fn catalog(&self) -> &FormatCatalog {
        &self.catalog
    }

    /// Detects the layout of `text`.
    ///
    /// Fails only if `text` is absent or empty. Text that matches no layout is not an error,
    /// it yields an invalid [`DetectionResult`].
    pub fn detect<'a>(
        &self,
        text: impl Into<Option<&'a str>>,
    ) -> Result<DetectionResult, DetectionError> {
        let text = self.require_text(text.into())?;
        Ok(match self.cascade(text) {
            Some((candidate, _)) => DetectionResult::matched(candidate),
            None => DetectionResult::no_match(),
        })
    }

    /// Like [`DateFormatDetector::detect`], for loosely typed values.
    ///
    /// `null` counts as absent. Numbers and booleans are detected on their display form, so
    /// the JSON number `2024` is detected as `YEAR`.
    pub fn detect_value(&self, value: &Value) -> Result<DetectionResult, DetectionError> {
        self.detect(normalize_value(value).as_deref())
    }

    /// Detects the layout of `text` and returns the value the matching layout parsed.
    pub fn parse<'a>(
        &self,
        text: impl Into<Option<&'a str>>,
    ) -> Result<Option<DetectedValue>, DetectionError> {
        let text = self.require_text(text.into())?;
        Ok(self.cascade(text).map(|(_, value)| value))
    }

    fn require_text<'a>(&self, text: Option<&'a str>) -> Result<&'a str, DetectionError> {
        match text {
            None => Err(self.failure_sink.raise(DetectionError::absent())),
            Some("") => Err(self.failure_sink.raise(DetectionError::empty())),
            Some(text) => Ok(text),
        }
    }

    fn cascade(&self, text: &str) -> Option<(&FormatCandidate, DetectedValue)> {
        for candidate in &self.catalog {
            let attempt = if candidate.has_time_component() {
                self.parser
                    .parse_datetime(text, candidate.pattern())
                    .map(DetectedValue::DateTime)
            } else {
                self.parser
                    .parse_date(text, candidate.pattern())
                    .map(DetectedValue::Date)
            };

            match attempt {
                Ok(value) => {
                    debug!("Detected format {} for {text:?}", candidate.name());
                    return Some((candidate, value));
                }
                Err(err) => {
                    debug!("{text:?} is not {}: {err}", candidate.name());
                    continue;
                }
            }
        }
        debug!("No known date format matches {text:?}");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FormatKind;
    use crate::parsing::ParseError;
    use chrono::{NaiveDate, NaiveDateTime};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use std::cell::{Cell, RefCell};

    #[fixture]
    fn detector() -> DateFormatDetector {
        DateFormatDetector::default()
    }

    /// Accepts only the listed patterns and records every attempt.
    struct ScriptedParser {
        accepts: Vec<&'static str>,
        attempts: RefCell<Vec<(String, bool)>>,
    }

    impl ScriptedParser {
        fn accepting(accepts: Vec<&'static str>) -> Self {
            ScriptedParser {
                accepts,
                attempts: RefCell::new(Vec::new()),
            }
        }

        fn attempt(&self, text: &str, pattern: &str, datetime: bool) -> Result<(), ParseError> {
            self.attempts
                .borrow_mut()
                .push((pattern.to_string(), datetime));
            if self.accepts.iter().any(|accepted| *accepted == pattern) {
                Ok(())
            } else {
                Err(ParseError::InputTooShort {
                    text: text.to_string(),
                })
            }
        }
    }

    impl ExactParser for ScriptedParser {
        fn parse_date(&self, text: &str, pattern: &str) -> Result<NaiveDate, ParseError> {
            self.attempt(text, pattern, false)?;
            Ok(NaiveDate::MIN)
        }

        fn parse_datetime(&self, text: &str, pattern: &str) -> Result<NaiveDateTime, ParseError> {
            self.attempt(text, pattern, true)?;
            Ok(NaiveDateTime::MIN)
        }
    }

    fn small_catalog() -> FormatCatalog {
        FormatCatalog::builtin()
            .iter()
            .filter(|candidate| {
                ["ISO_DATETIME", "ISO_DATE", "US_DATE", "EU_DATE"].contains(&candidate.name())
            })
            .cloned()
            .collect::<Vec<_>>()
            .into()
    }

    #[rstest]
    #[case("2024-12-16", "ISO_DATE", FormatKind::Date)]
    #[case("2024-12-16T14:30:00", "ISO_DATETIME", FormatKind::DateTime)]
    #[case("2024-12-16T14:30:00.123", "ISO_DATETIME_MS", FormatKind::DateTime)]
    #[case("2024-12-16 14:30:00", "ISO_DATETIME_SPACE", FormatKind::DateTime)]
    #[case("12/16/2024", "US_DATE", FormatKind::Date)]
    #[case("12/16/2024 14:30:00", "US_DATETIME", FormatKind::DateTime)]
    #[case("12/16/2024 14:30", "US_DATETIME_NO_SECONDS", FormatKind::DateTime)]
    #[case("12-16-2024", "US_DATE_DASH", FormatKind::Date)]
    #[case("1/5/2024 9:05:00", "US_DATETIME_SHORT", FormatKind::DateTime)]
    #[case("1/5/2024", "US_DATE_SHORT", FormatKind::Date)]
    #[case("16/12/2024", "EU_DATE", FormatKind::Date)]
    #[case("16/12/2024 14:30:00", "EU_DATETIME", FormatKind::DateTime)]
    #[case("16/12/2024 14:30", "EU_DATETIME_NO_SECONDS", FormatKind::DateTime)]
    #[case("16-12-2024", "EU_DATE_DASH", FormatKind::Date)]
    #[case("16.12.2024 14:30:00", "EU_DATETIME_DOT", FormatKind::DateTime)]
    #[case("16.12.2024", "EU_DATE_DOT", FormatKind::Date)]
    #[case("16/1/2024", "EU_DATE_SHORT", FormatKind::Date)]
    #[case("5.1.2024", "EU_DATE_DOT_SHORT", FormatKind::Date)]
    #[case("2024/12/16 14:30:00", "ISO_DATETIME_SLASH", FormatKind::DateTime)]
    #[case("2024/12/16", "ISO_DATE_SLASH", FormatKind::Date)]
    #[case("20241216T143000", "COMPACT_DATETIME", FormatKind::DateTime)]
    #[case("20241216", "COMPACT_DATE", FormatKind::Date)]
    #[case("14:30:00.123", "TIME_MS", FormatKind::DateTime)]
    #[case("14:30:00", "TIME", FormatKind::DateTime)]
    #[case("14:30", "TIME_SHORT", FormatKind::DateTime)]
    #[case("2024-12", "YEAR_MONTH", FormatKind::Date)]
    #[case("12/2024", "MONTH_YEAR", FormatKind::Date)]
    #[case("2024", "YEAR", FormatKind::Date)]
    fn test_detect_every_builtin_layout(
        detector: DateFormatDetector,
        #[case] text: &str,
        #[case] name: &str,
        #[case] kind: FormatKind,
    ) {
        let result = detector.detect(text).unwrap();
        assert!(result.is_valid());
        assert_eq!(result.name(), Some(name));
        assert_eq!(result.kind(), Some(kind));
        assert_eq!(
            result.format(),
            detector
                .catalog()
                .find_by_name(name)
                .map(FormatCandidate::pattern)
        );
    }

    #[rstest]
    fn test_detect_iso_date_reports_pattern(detector: DateFormatDetector) {
        let result = detector.detect("2024-12-16").unwrap();
        assert_eq!(result.format(), Some("yyyy-MM-dd"));
    }

    #[rstest]
    fn test_ambiguous_text_follows_catalog_order(detector: DateFormatDetector) {
        let first = detector.detect("01/02/2024").unwrap();
        assert_eq!(first.name(), Some("US_DATE"));
        for _ in 0..10 {
            assert_eq!(detector.detect("01/02/2024").unwrap(), first);
        }
    }

    #[rstest]
    #[case("not-a-date")]
    #[case("2024-12-16T14:30")]
    #[case("2024-12-16 14:30:00.123")]
    #[case("13/13/2024")]
    #[case("2023-02-29")]
    #[case(" 2024-12-16")]
    #[case("2024-12-16\n")]
    #[case("24")]
    #[case("25:00")]
    #[case(" ")]
    fn test_detect_no_match(detector: DateFormatDetector, #[case] text: &str) {
        assert_eq!(detector.detect(text), Ok(DetectionResult::no_match()));
    }

    #[rstest]
    fn test_detect_missing_input(detector: DateFormatDetector) {
        assert!(matches!(
            detector.detect(None),
            Err(DetectionError::MissingInput { .. })
        ));
        assert!(matches!(
            detector.detect(""),
            Err(DetectionError::MissingInput { .. })
        ));
    }

    #[rstest]
    fn test_missing_input_goes_through_failure_sink() {
        let raised = Cell::new(0);
        let sink = |_: &DetectionError| raised.set(raised.get() + 1);
        let detector = DateFormatDetector::with_parts(FormatCatalog::builtin(), PatternParser, sink);

        assert!(detector.detect(None).is_err());
        assert!(detector.detect("").is_err());
        assert!(detector.detect("garbage").is_ok());
        assert_eq!(raised.get(), 2);
    }

    #[rstest]
    fn test_cascade_stops_at_first_match() {
        let parser = ScriptedParser::accepting(vec!["MM/dd/yyyy", "dd/MM/yyyy"]);
        let detector = DateFormatDetector::with_parts(small_catalog(), parser, LogFailureSink);

        let result = detector.detect("anything").unwrap();

        assert_eq!(result.name(), Some("US_DATE"));
        assert_eq!(
            detector.parser.attempts.into_inner(),
            vec![
                ("yyyy-MM-dd'T'HH:mm:ss".to_string(), true),
                ("yyyy-MM-dd".to_string(), false),
                ("MM/dd/yyyy".to_string(), false),
            ]
        );
    }

    #[rstest]
    fn test_cascade_exhausts_catalog_without_error() {
        let parser = ScriptedParser::accepting(vec![]);
        let detector = DateFormatDetector::with_parts(small_catalog(), parser, LogFailureSink);

        assert_eq!(detector.detect("anything"), Ok(DetectionResult::no_match()));
        assert_eq!(detector.parser.attempts.borrow().len(), 4);
    }

    #[rstest]
    fn test_detect_value_normalizes(detector: DateFormatDetector) {
        let result = detector.detect_value(&serde_json::json!(2024)).unwrap();
        assert_eq!(result.name(), Some("YEAR"));

        let result = detector
            .detect_value(&serde_json::json!("2024-12-16"))
            .unwrap();
        assert_eq!(result.name(), Some("ISO_DATE"));

        let result = detector.detect_value(&serde_json::json!(true)).unwrap();
        assert!(!result.is_valid());

        assert!(detector.detect_value(&serde_json::Value::Null).is_err());
        assert!(detector.detect_value(&serde_json::json!("")).is_err());
    }

    #[rstest]
    fn test_parse_returns_detected_value(detector: DateFormatDetector) {
        assert_eq!(
            detector.parse("16.12.2024").unwrap(),
            Some(DetectedValue::Date(
                NaiveDate::from_ymd_opt(2024, 12, 16).unwrap()
            ))
        );
        assert_eq!(
            detector.parse("2024-12-16T14:30:00.123").unwrap(),
            Some(DetectedValue::DateTime(
                NaiveDate::from_ymd_opt(2024, 12, 16)
                    .unwrap()
                    .and_hms_milli_opt(14, 30, 0, 123)
                    .unwrap()
            ))
        );
        assert_eq!(detector.parse("not-a-date").unwrap(), None);
        assert!(detector.parse(None).is_err());
    }
}
