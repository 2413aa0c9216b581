use crate::process::builtin::{Builtin, Outcome};
use crate::session::Session;
use std::env;

/// Implements `cd [dir|-]` against the session's environment list.
///
/// With no operand the target is `HOME`, then `PWD`, then `/`. With `-` the target
/// is `OLDPWD`, which is echoed first. A successful change stores the previous `PWD`
/// in `OLDPWD` and the new working directory in `PWD`; a failed one is reported and
/// leaves the environment alone.
pub struct Cd {}

impl Builtin for Cd {
    fn call(&self, session: &mut Session) -> Outcome {
        let cwd = match env::current_dir() {
            Ok(path) => Some(path.to_string_lossy().into_owned()),
            Err(err) => {
                session.report(&format!("unable to read current directory: {err}"));
                None
            }
        };

        let operand = session.arg(1).map(str::to_string);
        let target = match operand.as_deref() {
            None => session
                .get_env("HOME")
                .or_else(|| session.get_env("PWD"))
                .unwrap_or("/")
                .to_string(),
            Some("-") => {
                let Some(oldpwd) = session.get_env("OLDPWD").map(str::to_string) else {
                    session.out.put_str(cwd.as_deref());
                    session.out.put_byte(b'\n');
                    return Outcome::Error;
                };
                session.out.put_str(Some(oldpwd.as_str()));
                session.out.put_byte(b'\n');
                oldpwd
            }
            Some(dir) => dir.to_string(),
        };

        if env::set_current_dir(&target).is_err() {
            let shown = operand.as_deref().unwrap_or(&target);
            session.report(&format!("can't cd to {shown}"));
            return Outcome::Continue;
        }

        if let Some(pwd) = session.get_env("PWD").map(str::to_string) {
            session.set_env("OLDPWD", &pwd);
        }
        match env::current_dir() {
            Ok(now) => session.set_env("PWD", &now.to_string_lossy()),
            Err(err) => session.report(&format!("unable to read current directory: {err}")),
        }
        Outcome::Continue
    }
}

impl Cd {
    pub fn new() -> Self {
        Cd {}
    }
}
