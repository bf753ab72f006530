use crate::parsing::PatternError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DetectorConfigError {
    #[error(transparent)]
    Load(#[from] config::ConfigError),
    #[error(transparent)]
    Validation(#[from] validator::ValidationErrors),
    #[error("Custom format {name} has a malformed pattern: {source}")]
    Pattern { name: String, source: PatternError },
}
