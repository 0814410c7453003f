use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::engine::extract::KeyStrategy;

/// Represents the structure of the `defaultgen` config file.
/// All fields are optional, so users only need to specify what they want to override.
#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub output_file: Option<PathBuf>,
    pub strategy: Option<KeyStrategy>,
}

pub const APP_NAME: &str = "defaultgen";

/// Loads the user config file if one exists, falling back to defaults when it
/// is missing or can't be read. Never creates the file.
pub fn load_or_default() -> ConfigFile {
    let path = match confy::get_configuration_file_path(APP_NAME, None) {
        Ok(path) => path,
        Err(e) => {
            log::warn!("Can't locate config file: {e}");
            return ConfigFile::default();
        }
    };
    if !path.exists() {
        log::debug!("No config file at {}", path.display());
        return ConfigFile::default();
    }

    confy::load_path(&path).unwrap_or_else(|e| {
        log::warn!("Ignoring unreadable config file {}: {e}", path.display());
        ConfigFile::default()
    })
}
