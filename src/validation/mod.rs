pub(crate) mod detector_config_validation;
mod validation_utils;
