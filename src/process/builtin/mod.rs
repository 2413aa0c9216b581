pub mod map;

use crate::session::Session;

/// Names of every command handled in-process, in dispatch-table order.
pub const BUILTIN_NAMES: [&str; 8] = [
    "exit", "env", "help", "history", "setenv", "unsetenv", "cd", "alias",
];

/// What the interpreter loop should do after a builtin returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Success, keep reading input.
    Continue,
    /// Recoverable failure already reported; keep reading input.
    Error,
    /// Stop the loop. `None` asks to exit with the last command's status.
    Exit(Option<i32>),
}

impl Outcome {
    /// Numeric control code handed back to callers that still speak integers.
    pub const EXIT_CODE: i32 = -2;

    pub fn code(self) -> i32 {
        match self {
            Outcome::Continue => 0,
            Outcome::Error => 1,
            Outcome::Exit(_) => Self::EXIT_CODE,
        }
    }

    pub fn is_exit(self) -> bool {
        matches!(self, Outcome::Exit(_))
    }
}

/// A command executed inside the interpreter's own process.
pub trait Builtin {
    fn call(&self, session: &mut Session) -> Outcome;
}
