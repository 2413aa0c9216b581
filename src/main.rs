use hsh::control;
use hsh::control_state::ControlState;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the `tracing` filter directive.
const LOG_ENV: &str = "HSH_LOG";

/// Entry point that starts the control loop.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env(LOG_ENV))
        .with_writer(io::stderr)
        .init();

    let config = hsh::conf::load();
    let mut state = ControlState::new(&config);
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    match control::run_loop(&mut state, stdin.lock(), interactive) {
        Ok(status) => ExitCode::from((status & 0xff) as u8),
        Err(err) => {
            eprintln!("{}: {err}", state.session().fname());
            ExitCode::FAILURE
        }
    }
}
