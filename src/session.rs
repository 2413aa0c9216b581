//! Shared state threaded through every builtin call.

use crate::conf::ConfigurationModel;
use crate::output::{BufferedWriter, Sink};
use crate::store::list::List;
use std::env;
use std::fmt::Write as _;

/// Program name used as the diagnostic prefix when nothing else is configured.
pub const DEFAULT_NAME: &str = "hsh";
/// Largest number of history entries kept in memory and on disk.
pub const HIST_MAX: usize = 4096;

/// Mutable record owned by the interpreter loop and lent to each builtin.
///
/// The loop fills `argv` before dispatch and reads `err_num`/`status` back once a
/// builtin asks it to terminate.
pub struct Session {
    argv: Vec<String>,
    fname: String,
    max_history: usize,
    pub env: List,
    pub alias: List,
    pub history: List,
    /// Exit status of the last command.
    pub status: i32,
    /// Exit code requested by `exit`; `-1` means "use `status`".
    pub err_num: i32,
    pub line_count: u32,
    pub linecount_flag: bool,
    pub env_changed: bool,
    pub readfd: i32,
    pub histcount: usize,
    pub out: BufferedWriter<Sink>,
    pub err: BufferedWriter<Sink>,
}

impl Session {
    /// Create a session writing to the process's standard streams.
    pub fn new(fname: impl Into<String>) -> Self {
        Self::with_sinks(fname, Sink::Stdout, Sink::Stderr)
    }

    /// Create a session with explicit output and diagnostic destinations.
    pub fn with_sinks(fname: impl Into<String>, out: Sink, err: Sink) -> Self {
        Session {
            argv: Vec::new(),
            fname: fname.into(),
            max_history: HIST_MAX,
            env: List::new(),
            alias: List::new(),
            history: List::new(),
            status: 0,
            err_num: 0,
            line_count: 0,
            linecount_flag: false,
            env_changed: false,
            readfd: 0,
            histcount: 0,
            out: BufferedWriter::new(out),
            err: BufferedWriter::new(err),
        }
    }

    pub fn from_config(config: &ConfigurationModel) -> Self {
        let mut session = Self::new(config.shell.name.as_deref().unwrap_or(DEFAULT_NAME));
        session.max_history = config.history.max_entries();
        session
    }

    pub fn fname(&self) -> &str {
        &self.fname
    }

    pub fn max_history(&self) -> usize {
        self.max_history
    }

    pub fn set_max_history(&mut self, max: usize) {
        self.max_history = max;
    }

    pub fn set_args(&mut self, argv: Vec<String>) {
        self.argv = argv;
    }

    pub fn clear_args(&mut self) {
        self.argv.clear();
    }

    pub fn args(&self) -> &[String] {
        &self.argv
    }

    pub fn argc(&self) -> usize {
        self.argv.len()
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.argv.get(index).map(String::as_str)
    }

    /// Write `<fname>: <line>: <command>: <message>` and a newline to the diagnostic stream.
    pub fn report(&mut self, message: &str) {
        let command = self.argv.first().map(String::as_str).unwrap_or("");
        let _ = writeln!(self.err, "{}: {}: {command}: {message}", self.fname, self.line_count);
    }

    /// Value of the `name=` entry in the environment list.
    pub fn get_env(&self, name: &str) -> Option<&str> {
        self.env
            .starts_with(name, Some('='))
            .map(|node| &node.text()[name.len() + 1..])
    }

    /// Replace the `name=` entry in place or append a new one.
    pub fn set_env(&mut self, name: &str, value: &str) {
        let entry = format!("{name}={value}");
        match self.env.starts_with_mut(name, Some('=')) {
            Some(node) => node.set_text(entry),
            None => {
                self.env.push_back(entry, 0);
            }
        }
        self.env_changed = true;
    }

    /// Remove every `name=` entry. Returns whether anything was removed.
    pub fn unset_env(&mut self, name: &str) -> bool {
        let mut removed = false;
        while let Some(index) = self.env.index_of(self.env.starts_with(name, Some('='))) {
            removed |= self.env.delete_at(index);
        }
        if removed {
            self.env_changed = true;
        }
        removed
    }

    /// Snapshot of the environment as `KEY=VALUE` strings.
    pub fn environ(&self) -> Vec<String> {
        self.env.to_strings()
    }

    /// Copy the process environment into the environment list.
    ///
    /// Names and values that are not valid UTF-8 are stored lossily.
    pub fn populate_env(&mut self) -> usize {
        for (key, value) in env::vars_os() {
            let entry = format!("{}={}", key.to_string_lossy(), value.to_string_lossy());
            self.env.push_back(entry, 0);
        }
        self.env.len()
    }

    /// Append a command line to history, dropping the oldest entries past the limit.
    pub fn record_history(&mut self, line: &str) {
        self.history.push_back(line, self.histcount as i32);
        self.histcount += 1;
        self.trim_history();
    }

    pub(crate) fn trim_history(&mut self) {
        let mut len = self.history.len();
        while len > self.max_history && self.history.delete_at(0) {
            len -= 1;
        }
        self.histcount = self.history.renumber();
    }

    /// Exit status the interpreter should terminate with after `exit`.
    pub fn exit_status(&self) -> i32 {
        if self.err_num == -1 {
            self.status
        } else {
            self.err_num
        }
    }

    /// Drain both writers, logging rather than failing on a closed destination.
    pub fn flush(&mut self) {
        if let Err(err) = self.out.flush() {
            tracing::warn!("unable to flush standard output: {err}");
        }
        if let Err(err) = self.err.flush() {
            tracing::warn!("unable to flush diagnostics: {err}");
        }
    }

    /// Release every owned list and flush pending output.
    pub fn release(&mut self) {
        tracing::debug!(
            env = self.env.len(),
            alias = self.alias.len(),
            history = self.history.len(),
            "releasing session"
        );
        self.argv.clear();
        self.env.clear();
        self.alias.clear();
        self.history.clear();
        self.histcount = 0;
        self.flush();
    }
}
