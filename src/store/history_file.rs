use super::error::{StoreError, StoreResult};
use crate::session::Session;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// History file name under `$HOME` when no explicit location is configured.
pub const HIST_FILE: &str = ".simple_shell_history";

/// Load every line of `path` into the session's history list.
///
/// A missing file counts as an empty history. Returns the number of lines read.
pub fn read_history(session: &mut Session, path: &Path) -> StoreResult<usize> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let contents = String::from_utf8_lossy(&bytes);
    let mut count = 0;
    for line in contents.lines() {
        session.history.push_back(line, session.histcount as i32);
        session.histcount += 1;
        count += 1;
    }
    session.trim_history();

    tracing::debug!("read {count} history lines from '{}'", path.display());
    Ok(count)
}

/// Replace `path` with the session's history, one entry per line.
pub fn write_history(session: &Session, path: &Path) -> StoreResult<usize> {
    let to_store_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_store_err)?;
    let mut writer = BufWriter::new(file);
    let mut count = 0;
    for node in session.history.iter() {
        writer.write_all(node.text().as_bytes()).map_err(to_store_err)?;
        writer.write_all(b"\n").map_err(to_store_err)?;
        count += 1;
    }
    writer.flush().map_err(to_store_err)?;
    Ok(count)
}
