use crate::process::builtin::{Builtin, Outcome};
use crate::session::Session;

/// `env`: print the environment list, one `KEY=VALUE` per line.
pub struct Env {}

impl Builtin for Env {
    fn call(&self, session: &mut Session) -> Outcome {
        session.env.print_text(&mut session.out);
        Outcome::Continue
    }
}

impl Env {
    pub fn new() -> Self {
        Env {}
    }
}

/// `setenv NAME VALUE`
pub struct SetEnv {}

impl Builtin for SetEnv {
    fn call(&self, session: &mut Session) -> Outcome {
        if session.argc() != 3 {
            session.err.put_str(Some("Incorrect number of arguements\n"));
            return Outcome::Error;
        }

        let name = session.args()[1].clone();
        let value = session.args()[2].clone();
        session.set_env(&name, &value);
        Outcome::Continue
    }
}

impl SetEnv {
    pub fn new() -> Self {
        SetEnv {}
    }
}

/// `unsetenv NAME...`
pub struct UnsetEnv {}

impl Builtin for UnsetEnv {
    fn call(&self, session: &mut Session) -> Outcome {
        if session.argc() == 1 {
            session.err.put_str(Some("Too few arguements.\n"));
            return Outcome::Error;
        }

        let names = session.args()[1..].to_vec();
        for name in names {
            session.unset_env(&name);
        }
        Outcome::Continue
    }
}

impl UnsetEnv {
    pub fn new() -> Self {
        UnsetEnv {}
    }
}
