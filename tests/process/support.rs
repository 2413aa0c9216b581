use hsh::output::Sink;
use hsh::process::builtin::{Builtin, Outcome};
use hsh::session::Session;
use std::cell::RefCell;
use std::rc::Rc;

/// Session whose standard output and diagnostics are captured in memory.
pub struct Harness {
    pub session: Session,
    stdout: Rc<RefCell<Vec<u8>>>,
    stderr: Rc<RefCell<Vec<u8>>>,
}

impl Harness {
    pub fn new() -> Self {
        let (out, stdout) = Sink::capture();
        let (err, stderr) = Sink::capture();
        Self {
            session: Session::with_sinks("hsh", out, err),
            stdout,
            stderr,
        }
    }

    pub fn run(&mut self, builtin: &dyn Builtin, args: &[&str]) -> Outcome {
        self.session
            .set_args(args.iter().map(|s| s.to_string()).collect());
        builtin.call(&mut self.session)
    }

    pub fn stdout(&mut self) -> String {
        self.session.out.flush().unwrap();
        String::from_utf8(self.stdout.borrow().clone()).unwrap()
    }

    pub fn stderr(&mut self) -> String {
        self.session.err.flush().unwrap();
        String::from_utf8(self.stderr.borrow().clone()).unwrap()
    }

    pub fn clear_output(&mut self) {
        self.session.flush();
        self.stdout.borrow_mut().clear();
        self.stderr.borrow_mut().clear();
    }
}
