mod loader;
mod model;
pub mod section;

pub use loader::{CONFIG_PATH_ENV, load, load_from};
pub use model::ConfigurationModel;
pub use section::{HistoryConfigSection, ShellConfigSection};
