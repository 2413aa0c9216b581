//! Builtin implementations and the dispatch entry point.

pub mod alias;
pub mod builtin;
pub mod cd;
pub mod env;
pub mod exit;
pub mod help;
pub mod history;

use crate::process::builtin::Outcome;
use crate::process::builtin::map::BuiltinMap;
use crate::session::Session;

/// Status reported for a command that is neither a builtin nor handled externally.
pub const NOT_FOUND_STATUS: i32 = 127;

/// Run the builtin named by `argv[0]`, reporting anything else as not found.
pub fn execute(builtin_map: &BuiltinMap, session: &mut Session) -> Outcome {
    let Some(name) = session.arg(0).map(str::to_string) else {
        return Outcome::Continue;
    };

    // Determine if command is builtin, and call function
    if builtin_map.contains(&name) {
        session.line_count += 1;
        tracing::debug!(command = %name, args = session.argc() - 1, "dispatching builtin");
        if let Some(outcome) = builtin_map.invoke(&name, session) {
            return outcome;
        }
    }

    if session.linecount_flag {
        session.line_count += 1;
        session.linecount_flag = false;
    }
    session.status = NOT_FOUND_STATUS;
    session.report("not found");
    Outcome::Error
}
