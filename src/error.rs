use crate::store::StoreError;
use std::io;
use thiserror::Error;

/// Failures that stop the driver loop itself rather than a single command.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("unable to read input: {0}")]
    Input(#[source] io::Error),
    #[error("unable to write output: {0}")]
    Output(#[source] io::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ShellResult<T> = Result<T, ShellError>;
