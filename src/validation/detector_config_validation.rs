use crate::config::DetectorConfig;
use crate::constants::{BUILTIN_FORMATS, FORMAT_NAME_PATTERN};
use crate::parsing::Pattern;
use crate::validation::validation_utils::fail_validation_on_duplicates;
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::LazyLock;
use validator::ValidationError;

pub(crate) static FORMAT_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(FORMAT_NAME_PATTERN).expect("format name pattern is a valid regex")
});

pub(crate) fn validate_format_pattern(pattern: &str) -> Result<(), ValidationError> {
    match Pattern::compile(pattern) {
        Ok(_) => Ok(()),
        Err(err) => {
            let mut error = ValidationError::new("invalid_format_pattern");
            error.add_param(Cow::from("pattern"), &pattern);
            Err(error.with_message(Cow::Owned(err.to_string())))
        }
    }
}

/// Custom format names must be unique and must not reuse a built-in name.
pub(crate) fn validate_unique_format_names(
    config: &DetectorConfig,
) -> Result<(), ValidationError> {
    let mut seen: HashSet<&str> = BUILTIN_FORMATS
        .iter()
        .map(|candidate| candidate.name())
        .collect();

    let duplicates = config
        .additional_formats
        .iter()
        .filter(|custom| !seen.insert(custom.name.as_str()))
        .map(|custom| custom.name.clone())
        .collect::<Vec<String>>();

    fail_validation_on_duplicates(
        &duplicates,
        "duplicate_format_names",
        "Format names must be unique and must not reuse a built-in format name.",
    )
}
