mod detection_result;
pub use self::detection_result::{DetectedValue, DetectionResult};
mod detector;
pub use self::detector::DateFormatDetector;
pub mod error;
pub use self::error::DetectionError;
mod failure_sink;
pub use self::failure_sink::{FailureSink, LogFailureSink};
