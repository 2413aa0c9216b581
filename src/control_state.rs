//! State machine backing the line-driven control loop.

use crate::conf::ConfigurationModel;
use crate::process;
use crate::process::builtin::map::BuiltinMap;
use crate::session::Session;
use crate::store::history_file;
use crate::store::StoreResult;
use std::path::PathBuf;

/// Signals whether the control loop should continue or exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    /// Keep reading input.
    Continue,
    /// Terminate with the given process status.
    Exit(i32),
}

/// Session plus dispatch table and history location for one interpreter run.
pub struct ControlState {
    session: Session,
    builtin_map: BuiltinMap,
    history_path: Option<PathBuf>,
}

impl ControlState {
    /// Build a control state from configuration, seeding environment and history.
    pub fn new(config: &ConfigurationModel) -> Self {
        let mut session = Session::from_config(config);
        session.populate_env();

        let history_path = config.history.resolved_file(config);
        if let Some(path) = history_path.as_deref() {
            if let Err(err) = history_file::read_history(&mut session, path) {
                tracing::warn!("{err}");
            }
        }

        Self {
            session,
            builtin_map: BuiltinMap::new(),
            history_path,
        }
    }

    /// Wrap an existing session with no history file attached.
    pub fn with_session(session: Session) -> Self {
        Self {
            session,
            builtin_map: BuiltinMap::new(),
            history_path: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn set_history_path(&mut self, path: Option<PathBuf>) {
        self.history_path = path;
    }

    /// Record, split and dispatch one input line.
    pub fn handle_line(&mut self, line: &str) -> ControlFlow {
        let line = line.trim_end_matches(['\n', '\r']);
        self.session.linecount_flag = true;
        if line.trim().is_empty() {
            return ControlFlow::Continue;
        }
        self.session.record_history(line);

        let Some(tokens) = shlex::split(line) else {
            self.session.line_count += 1;
            self.session.status = 2;
            let message = format!("{}: unterminated quote\n", self.session.fname());
            self.session.err.put_str(Some(message.as_str()));
            return ControlFlow::Continue;
        };
        self.dispatch(tokens)
    }

    /// Dispatch an already tokenized argument vector.
    pub fn dispatch(&mut self, argv: Vec<String>) -> ControlFlow {
        if argv.is_empty() {
            return ControlFlow::Continue;
        }

        self.session.set_args(argv);
        let outcome = process::execute(&self.builtin_map, &mut self.session);
        self.session.clear_args();

        if outcome.is_exit() {
            ControlFlow::Exit(self.session.exit_status())
        } else {
            ControlFlow::Continue
        }
    }

    /// Persist history, release the session and return the status to exit with.
    pub fn shutdown(&mut self) -> StoreResult<()> {
        let saved = match self.history_path.as_deref() {
            Some(path) => history_file::write_history(&self.session, path).map(|_| ()),
            None => Ok(()),
        };
        self.session.release();
        saved
    }
}
