use super::section::{HistoryConfigSection, ShellConfigSection};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfigurationModel {
    #[serde(default)]
    pub shell: ShellConfigSection,
    #[serde(default)]
    pub history: HistoryConfigSection,
    #[serde(skip)]
    source_path: Option<PathBuf>,
}

impl ConfigurationModel {
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub(crate) fn set_source_path(&mut self, path: PathBuf) {
        self.source_path = Some(path);
    }

    /// Expand a leading `~` against `$HOME` and anchor other relative paths at the
    /// config file's directory.
    pub fn resolve_path(&self, raw: &str) -> PathBuf {
        if let (Some(rest), Some(home)) = (raw.strip_prefix('~'), env::var_os("HOME")) {
            let home = PathBuf::from(home);
            if rest.is_empty() {
                return home;
            }
            if let Some(rest) = rest.strip_prefix('/') {
                return home.join(rest);
            }
        }

        let path = PathBuf::from(raw);
        if path.is_absolute() {
            return path;
        }
        match self.source_path.as_deref().and_then(Path::parent) {
            Some(dir) => dir.join(path),
            None => path,
        }
    }
}
