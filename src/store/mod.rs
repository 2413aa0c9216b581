//! Owned text lists and their on-disk history form.

mod error;
pub mod history_file;
pub mod list;

pub use error::{StoreError, StoreResult};
