use crate::detection::error::DetectionError;
use log::error;

/// Receives every fatal detection error before it is handed back to the caller.
pub trait FailureSink {
    fn raise(&self, error: DetectionError) -> DetectionError;
}

/// Logs the error at `error` level and passes it on unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFailureSink;

impl FailureSink for LogFailureSink {
    fn raise(&self, error: DetectionError) -> DetectionError {
        error!("Date format detection failed. {error}");
        error
    }
}

impl<F> FailureSink for F
where
    F: Fn(&DetectionError),
{
    fn raise(&self, error: DetectionError) -> DetectionError {
        self(&error);
        error
    }
}
