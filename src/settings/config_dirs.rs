use std::path::PathBuf;

use directories_next::ProjectDirs;

use crate::env::Environment;

/// Environment variable naming an explicit settings file.
pub const CONFIG_ENV_VAR: &str = "SEARCHPATH_CONFIG";

/// File name of the settings file inside the project config directory.
pub const SETTINGS_FILE_NAME: &str = "searchpath.toml";

/// Per-user configuration directory, e.g. `~/.config/searchpath` on Linux.
pub fn project_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("org", "searchpath", "searchpath").map(|p| p.config_dir().to_path_buf())
}

/// Where settings live when no path is given on the command line.
///
/// An explicit `SEARCHPATH_CONFIG` wins; otherwise the file sits in the
/// project config directory. The flag is `true` for the explicit case.
pub fn default_settings_path<E: Environment + ?Sized>(env: &E) -> Option<(PathBuf, bool)> {
    match env.var(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
        Some(explicit) => Some((PathBuf::from(explicit), true)),
        None => project_config_dir().map(|dir| (dir.join(SETTINGS_FILE_NAME), false)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;

    #[test]
    fn explicit_env_var_wins() {
        let env = MapEnv::new().with(CONFIG_ENV_VAR, "/etc/wall/searchpath.toml");
        assert_eq!(
            default_settings_path(&env),
            Some((PathBuf::from("/etc/wall/searchpath.toml"), true))
        );
    }

    #[test]
    fn empty_env_var_falls_back_to_project_dir() {
        let env = MapEnv::new().with(CONFIG_ENV_VAR, "");
        if let Some((path, explicit)) = default_settings_path(&env) {
            assert!(!explicit);
            assert!(path.ends_with(SETTINGS_FILE_NAME));
        }
    }
}
