use crate::catalog::{FormatCandidate, FormatCatalog};
use crate::config::ConfigLoader;
use crate::config::error::DetectorConfigError;
use crate::detection::DateFormatDetector;
use crate::validation::detector_config_validation::{
    FORMAT_NAME_REGEX, validate_format_pattern, validate_unique_format_names,
};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

/// Settings for building a [`DateFormatDetector`].
///
/// The built-in layouts can not be reordered or removed. Additional layouts are tried only
/// after every built-in layout has failed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_unique_format_names"))]
pub struct DetectorConfig {
    #[serde(default)]
    #[validate(nested)]
    pub additional_formats: Vec<CustomFormat>,
}

/// A user supplied layout, e.g. `{name: "LOG_STAMP", pattern: "yyyy.MM.dd HH:mm"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CustomFormat {
    #[validate(regex(
        path = *FORMAT_NAME_REGEX,
        message = "Format names must be SCREAMING_SNAKE_CASE."
    ))]
    pub name: String,
    #[validate(custom(function = "validate_format_pattern"))]
    pub pattern: String,
}

impl CustomFormat {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        CustomFormat {
            name: name.into(),
            pattern: pattern.into(),
        }
    }
}

impl DetectorConfig {
    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self, DetectorConfigError> {
        let config: DetectorConfig = ConfigLoader::load(file_path)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration and assembles the catalog it describes.
    pub fn build_catalog(&self) -> Result<FormatCatalog, DetectorConfigError> {
        self.validate()?;

        let additional = self
            .additional_formats
            .iter()
            .map(|custom| {
                FormatCandidate::try_new(custom.name.clone(), custom.pattern.clone()).map_err(
                    |source| DetectorConfigError::Pattern {
                        name: custom.name.clone(),
                        source,
                    },
                )
            })
            .collect::<Result<Vec<FormatCandidate>, DetectorConfigError>>()?;

        if !additional.is_empty() {
            info!(
                "Appending {} custom date formats to the built-in catalog.",
                additional.len()
            );
        }
        Ok(FormatCatalog::with_additional(additional))
    }
}

impl DateFormatDetector {
    pub fn from_config(config: &DetectorConfig) -> Result<Self, DetectorConfigError> {
        Ok(DateFormatDetector::with_catalog(config.build_catalog()?))
    }
}
