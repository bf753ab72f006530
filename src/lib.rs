//! Detects which textual date/time layout a string follows, without a format hint.
//!
//! A fixed, ordered catalog of layouts (ISO, US, EU, compact, time-only, partial dates) is
//! tried against the input one by one, and the first layout that parses the text exactly
//! is reported.
//!
//! ```
//! use datesniff::{FormatKind, detect};
//!
//! let result = detect("16/12/2024").unwrap();
//! assert_eq!(result.name(), Some("EU_DATE"));
//! assert_eq!(result.kind(), Some(FormatKind::Date));
//!
//! assert!(!detect("not-a-date").unwrap().is_valid());
//! assert!(detect(None).is_err());
//! ```
//!
//! Text that fits several layouts is resolved by catalog order alone: `01/02/2024` is
//! always `US_DATE`, never `EU_DATE`. See [`constants::BUILTIN_FORMATS`].

pub mod catalog;
pub mod config;
pub mod constants;
pub mod detection;
pub mod parsing;
mod utils;
mod validation;

pub use catalog::{FormatCandidate, FormatCatalog, FormatKind};
pub use config::{DetectorConfig, DetectorConfigError};
pub use detection::{DateFormatDetector, DetectedValue, DetectionError, DetectionResult};
pub use parsing::{ExactParser, ParseError, PatternError, PatternParser};

/// Detects the layout of `text` with the built-in catalog.
pub fn detect<'a>(text: impl Into<Option<&'a str>>) -> Result<DetectionResult, DetectionError> {
    DateFormatDetector::default().detect(text)
}
