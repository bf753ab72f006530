use config::{Config, ConfigError, File, FileFormat};
use serde::de::DeserializeOwned;
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load<T: DeserializeOwned>(file_path: impl AsRef<Path>) -> Result<T, ConfigError> {
        let file_path = file_path.as_ref();
        if let Some(ext) = file_path.extension() {
            let file_format = match ext.to_str() {
                Some("yaml") => Ok(FileFormat::Yaml),
                Some("yml") => Ok(FileFormat::Yaml),
                Some("json") => Ok(FileFormat::Json),
                Some("toml") => Ok(FileFormat::Toml),
                Some("ron") => Ok(FileFormat::Ron),
                _ => Err(ConfigError::NotFound(format!(
                    "File format not supported. File needs to end with .yaml, .json, .toml or .ron. {file_path:?}"
                ))),
            }?;

            let config = Config::builder()
                .add_source(File::from(file_path).format(file_format))
                .build()?;
            let settings_struct: T = config.try_deserialize()?;
            Ok(settings_struct)
        } else {
            Err(ConfigError::NotFound(format!(
                "Could not find file extension on path {file_path:?}"
            )))
        }
    }
}
