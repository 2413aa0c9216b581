use super::model::ConfigurationModel;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides the config location; `~` is expanded.
pub const CONFIG_PATH_ENV: &str = "HSH_CONFIG";
const RC_FILE: &str = ".hshrc";

/// Load the user's configuration file, falling back to defaults when absent or invalid.
pub fn load() -> ConfigurationModel {
    match config_path() {
        Some(path) => load_from(&path),
        None => ConfigurationModel::default(),
    }
}

/// Load a specific configuration file, falling back to defaults on any failure.
pub fn load_from(path: &Path) -> ConfigurationModel {
    match fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<ConfigurationModel>(&contents) {
            Ok(mut cfg) => {
                cfg.set_source_path(path.to_path_buf());
                tracing::debug!("loaded configuration from '{}'", path.display());
                return cfg;
            }
            Err(err) => {
                tracing::warn!("unable to parse config file '{}': {err}", path.display());
            }
        },
        Err(err) => {
            tracing::warn!("unable to read config file '{}': {err}", path.display());
        }
    }

    ConfigurationModel::default()
}

/// `$HSH_CONFIG` when set, otherwise `~/.hshrc` if it exists.
fn config_path() -> Option<PathBuf> {
    if let Some(raw) = env::var(CONFIG_PATH_ENV).ok().filter(|raw| !raw.trim().is_empty()) {
        return Some(ConfigurationModel::default().resolve_path(&raw));
    }

    env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(RC_FILE))
        .filter(|path| path.exists())
}
