// src/config/validation.rs

use super::ConfigBuilder;
use crate::errors::{Error, Result};

/// Validates combinations of options on the `ConfigBuilder` that clap cannot express.
pub(super) fn validate_builder_options(builder: &ConfigBuilder) -> Result<()> {
    if builder.batch_size == Some(0) {
        return Err(Error::Config("--batch-size must be greater than 0".to_string()));
    }
    if builder.checkpoint_interval == Some(0) {
        return Err(Error::Config(
            "--checkpoint-every must be greater than 0".to_string(),
        ));
    }
    if builder.read_timeout_secs == Some(0) {
        return Err(Error::Config(
            "--read-timeout must be greater than 0".to_string(),
        ));
    }
    if let Some(exts) = &builder.extensions {
        if exts.is_empty() && builder.only.is_none() {
            return Err(Error::Config(
                "--ext needs at least one suffix".to_string(),
            ));
        }
    }
    if let Some(only) = &builder.only {
        if only.is_empty() {
            return Err(Error::Config("--only needs at least one name".to_string()));
        }
    }
    if let Some(name) = &builder.output_file {
        if name.is_empty() || name.contains('/') || name.contains('\\') {
            return Err(Error::Config(format!(
                "--output-file must be a plain file name, got '{}'",
                name
            )));
        }
    }
    Ok(())
}
