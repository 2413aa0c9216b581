use crate::process::builtin::{Builtin, Outcome};
use crate::session::Session;

/// Implements the `exit` builtin, asking the interpreter loop to terminate.
pub struct Exit {}

impl Builtin for Exit {
    /// Record the requested exit code in `err_num` and signal termination.
    ///
    /// An operand that is not a non-negative integer sets `status` to 2 and does not
    /// terminate.
    fn call(&self, session: &mut Session) -> Outcome {
        let Some(arg) = session.arg(1).map(str::to_string) else {
            session.err_num = -1;
            return Outcome::Exit(None);
        };

        match parse_exit_code(&arg) {
            Some(code) => {
                session.err_num = code;
                Outcome::Exit(Some(code))
            }
            None => {
                session.status = 2;
                session.report(&format!("Illegal number: {arg}"));
                Outcome::Error
            }
        }
    }
}

impl Exit {
    /// Construct a new exit builtin instance.
    pub fn new() -> Self {
        Exit {}
    }
}

/// Parse an optional `+` followed by decimal digits into a value that fits an `i32`.
pub fn parse_exit_code(arg: &str) -> Option<i32> {
    let digits = arg.strip_prefix('+').unwrap_or(arg);
    let mut value: i64 = 0;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            return None;
        }
        value = value * 10 + i64::from(byte - b'0');
        if value > i64::from(i32::MAX) {
            return None;
        }
    }
    i32::try_from(value).ok()
}
