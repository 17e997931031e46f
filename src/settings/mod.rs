pub mod config_dirs;
pub mod read_settings;
pub mod write_settings;

// Re-export commonly used types/functions for convenience
pub use config_dirs::{default_settings_path, project_config_dir, CONFIG_ENV_VAR};
pub use read_settings::{load_default_settings, load_settings};
pub use write_settings::{save_settings, Settings};
