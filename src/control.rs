use crate::control_state::{ControlFlow, ControlState};
use crate::error::{ShellError, ShellResult};
use std::io::BufRead;

/// Read lines from `input` until EOF or `exit`, returning the process status.
///
/// When `interactive` is set a `$ ` prompt is written before every line.
pub fn run_loop<R: BufRead>(
    state: &mut ControlState,
    mut input: R,
    interactive: bool,
) -> ShellResult<i32> {
    let mut line = String::new();

    // Main command control loop for processing commands
    loop {
        if interactive {
            let session = state.session_mut();
            session.out.put_str(Some("$ "));
            session.out.flush().map_err(ShellError::Output)?;
        }

        line.clear();
        let read = input.read_line(&mut line).map_err(ShellError::Input)?;
        if read == 0 {
            if interactive {
                state.session_mut().out.put_byte(b'\n');
            }
            let status = state.session().status;
            state.shutdown()?;
            return Ok(status);
        }

        match state.handle_line(&line) {
            ControlFlow::Continue => state.session_mut().flush(),
            ControlFlow::Exit(code) => {
                state.shutdown()?;
                return Ok(code);
            }
        }
    }
}
