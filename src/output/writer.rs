use std::fmt;
use std::io::{self, Write};

/// Capacity of every writer's accumulation buffer.
pub const WRITE_BUF_SIZE: usize = 1024;

/// A single item handed to [`BufferedWriter::put`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Put {
    Byte(u8),
    /// Drain whatever is buffered without adding anything.
    Flush,
}

/// Fixed-capacity output buffer in front of a blocking destination.
///
/// Bytes accumulate until either a [`Put::Flush`] arrives or the buffer is full, at
/// which point the whole buffer goes out in one write. A failed drain drops the
/// buffered bytes and is only logged; call [`BufferedWriter::flush`] to observe
/// the error instead.
pub struct BufferedWriter<W: Write> {
    dest: W,
    buf: [u8; WRITE_BUF_SIZE],
    len: usize,
}

impl<W: Write> BufferedWriter<W> {
    pub fn new(dest: W) -> Self {
        BufferedWriter {
            dest,
            buf: [0; WRITE_BUF_SIZE],
            len: 0,
        }
    }

    /// Accept one item. Always reports a single accepted write.
    pub fn put(&mut self, item: Put) -> usize {
        if item == Put::Flush || self.len >= WRITE_BUF_SIZE {
            if let Err(err) = self.drain() {
                tracing::warn!("dropped buffered output: {err}");
            }
        }
        if let Put::Byte(byte) = item {
            self.buf[self.len] = byte;
            self.len += 1;
        }
        1
    }

    pub fn put_byte(&mut self, byte: u8) -> usize {
        self.put(Put::Byte(byte))
    }

    /// Write every byte of `text`, returning how many were accepted.
    pub fn put_str(&mut self, text: Option<&str>) -> usize {
        match text {
            Some(text) => text.bytes().map(|byte| self.put_byte(byte)).sum(),
            None => 0,
        }
    }

    /// Drain the buffer and flush the destination, surfacing any I/O error.
    pub fn flush(&mut self) -> io::Result<()> {
        self.drain()?;
        self.dest.flush()
    }

    /// Number of bytes waiting in the buffer.
    pub fn pending(&self) -> usize {
        self.len
    }

    pub fn get_ref(&self) -> &W {
        &self.dest
    }

    fn drain(&mut self) -> io::Result<()> {
        let pending = self.len;
        self.len = 0;
        if pending == 0 {
            return Ok(());
        }
        self.dest.write_all(&self.buf[..pending])
    }
}

impl<W: Write> fmt::Write for BufferedWriter<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.put_str(Some(s));
        Ok(())
    }
}

impl<W: Write> Drop for BufferedWriter<W> {
    fn drop(&mut self) {
        if let Err(err) = self.flush() {
            tracing::warn!("unable to flush output on drop: {err}");
        }
    }
}
