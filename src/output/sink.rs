use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Destination a [`BufferedWriter`](super::BufferedWriter) drains into.
#[derive(Debug, Clone, Default)]
pub enum Sink {
    #[default]
    Stdout,
    Stderr,
    /// In-memory capture, shared with whoever holds the other handle.
    Buffer(Rc<RefCell<Vec<u8>>>),
}

impl Sink {
    /// Build a capture sink and hand back the shared buffer.
    pub fn capture() -> (Self, Rc<RefCell<Vec<u8>>>) {
        let buffer = Rc::new(RefCell::new(Vec::new()));
        (Sink::Buffer(buffer.clone()), buffer)
    }
}

impl Write for Sink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Stdout => io::stdout().write(data),
            Sink::Stderr => io::stderr().write(data),
            Sink::Buffer(buffer) => {
                buffer.borrow_mut().extend_from_slice(data);
                Ok(data.len())
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Stdout => io::stdout().flush(),
            Sink::Stderr => io::stderr().flush(),
            Sink::Buffer(_) => Ok(()),
        }
    }
}
