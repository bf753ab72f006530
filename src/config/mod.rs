mod config_loader;
pub use self::config_loader::ConfigLoader;
mod detector_config;
pub use self::detector_config::{CustomFormat, DetectorConfig};
pub mod error;
pub use self::error::DetectorConfigError;
