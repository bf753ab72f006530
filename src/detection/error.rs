use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DetectionError {
    #[error("Missing input: {reason}")]
    MissingInput { reason: String },
}

impl DetectionError {
    pub(crate) fn absent() -> Self {
        DetectionError::MissingInput {
            reason: "no text was provided".to_string(),
        }
    }

    pub(crate) fn empty() -> Self {
        DetectionError::MissingInput {
            reason: "text is empty".to_string(),
        }
    }
}
