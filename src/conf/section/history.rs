use super::super::model::ConfigurationModel;
use crate::session::HIST_MAX;
use crate::store::history_file::HIST_FILE;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct HistoryConfigSection {
    pub file: Option<String>,
    pub max_entries: Option<usize>,
    pub persist: Option<bool>,
}

impl HistoryConfigSection {
    pub fn max_entries(&self) -> usize {
        self.max_entries.unwrap_or(HIST_MAX)
    }

    pub fn persist(&self) -> bool {
        self.persist.unwrap_or(true)
    }

    /// History file location, or `None` when persistence is off or no home is known.
    pub fn resolved_file(&self, config: &ConfigurationModel) -> Option<PathBuf> {
        if !self.persist() {
            return None;
        }
        match self.file.as_ref() {
            Some(raw) => Some(config.resolve_path(raw)),
            None => env::var_os("HOME").map(|home| PathBuf::from(home).join(HIST_FILE)),
        }
    }
}
