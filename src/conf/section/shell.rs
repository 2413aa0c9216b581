use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ShellConfigSection {
    /// Program name printed at the start of every diagnostic.
    pub name: Option<String>,
}
