use crate::process::builtin::{Builtin, Outcome};
use crate::session::Session;

/// Placeholder `help` builtin.
pub struct Help {}

impl Builtin for Help {
    fn call(&self, session: &mut Session) -> Outcome {
        session
            .out
            .put_str(Some("help call works. Function not yet implemented \n"));
        Outcome::Continue
    }
}

impl Help {
    /// Create a new help builtin instance.
    pub fn new() -> Self {
        Help {}
    }
}
