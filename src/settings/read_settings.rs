use std::fs;
use std::io;
use std::path::Path;

use super::config_dirs::default_settings_path;
use super::write_settings::Settings;
use crate::env::Environment;
use crate::search_path::SearchPathError;

/// Read and parse a settings file.
pub fn load_settings(path: &Path) -> Result<Settings, SearchPathError> {
    let text = fs::read_to_string(path).map_err(|e| SearchPathError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Settings::from_toml(&text).map_err(|e| SearchPathError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Load settings from the default location.
///
/// A missing file at the implicit per-user location yields defaults; a
/// missing file named by `SEARCHPATH_CONFIG` is an error.
pub fn load_default_settings<E: Environment + ?Sized>(env: &E) -> Result<Settings, SearchPathError> {
    let Some((path, explicit)) = default_settings_path(env) else {
        tracing::debug!("no config directory available, using default settings");
        return Ok(Settings::default());
    };
    match fs::metadata(&path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound && !explicit => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            Ok(Settings::default())
        }
        _ => load_settings(&path),
    }
}
