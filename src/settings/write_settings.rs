use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::env::{Environment, ProcessEnv};
use crate::fs_op::{FileSystem, RealFs};
use crate::search_path::{PathResolver, SearchPathError};

/// Persisted resolver configuration.
///
/// Directory and suffix strings are stored as written (`~`, `$VAR` and
/// `:`-lists intact) and normalized when a resolver is built from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub directories: Vec<String>,
    pub suffixes: Vec<String>,
    pub search_cwd_first: bool,
    pub allow_suffixless: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            directories: Vec::new(),
            suffixes: Vec::new(),
            search_cwd_first: true,
            allow_suffixless: false,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Resolver over the real filesystem and process environment.
    pub fn build(&self) -> PathResolver {
        self.build_with(RealFs, ProcessEnv)
    }

    pub fn build_with<F: FileSystem, E: Environment>(&self, fs: F, env: E) -> PathResolver<F, E> {
        let mut resolver = PathResolver::with_backends(fs, env);
        resolver
            .append_directories(self.directories.as_slice())
            .append_suffixes(self.suffixes.as_slice())
            .set_search_cwd_first(self.search_cwd_first)
            .set_allow_suffixless(self.allow_suffixless);
        resolver
    }

    /// Snapshot of a resolver's current, already normalized, state.
    pub fn from_resolver<F: FileSystem, E: Environment>(resolver: &PathResolver<F, E>) -> Self {
        Self {
            directories: resolver.directories().to_vec(),
            suffixes: resolver.suffixes().to_vec(),
            search_cwd_first: resolver.search_cwd_first(),
            allow_suffixless: resolver.allow_suffixless(),
        }
    }
}

/// Write `settings` to `path` as TOML, creating parent directories.
///
/// The file is written to a temporary sibling first and renamed into
/// place so readers never observe a partial file.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<(), SearchPathError> {
    let config_err = |reason: String| SearchPathError::Config {
        path: path.to_path_buf(),
        reason,
    };
    let text = toml::to_string_pretty(settings).map_err(|e| config_err(e.to_string()))?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let file_name = path
        .file_name()
        .ok_or_else(|| config_err("path has no file name".to_string()))?;
    let tmp = path.with_file_name(format!(
        ".{}.tmp.{}",
        file_name.to_string_lossy(),
        std::process::id()
    ));

    if let Err(e) = fs::write(&tmp, text) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    tracing::debug!(path = %path.display(), "settings saved");
    Ok(())
}
