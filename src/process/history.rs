use crate::process::builtin::{Builtin, Outcome};
use crate::session::Session;

/// Lists recorded command lines, oldest first, as `<index>: <line>`.
pub struct History {}

impl Builtin for History {
    fn call(&self, session: &mut Session) -> Outcome {
        session.history.print(&mut session.out);
        Outcome::Continue
    }
}

impl History {
    pub fn new() -> Self {
        History {}
    }
}
