//! Buffered output shared by every builtin and diagnostic.

mod sink;
mod writer;

pub use sink::Sink;
pub use writer::{BufferedWriter, Put, WRITE_BUF_SIZE};
