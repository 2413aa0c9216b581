use super::{Builtin, Outcome};
use crate::process::alias::Alias;
use crate::process::cd::Cd;
use crate::process::env::{Env, SetEnv, UnsetEnv};
use crate::process::exit::Exit;
use crate::process::help::Help;
use crate::process::history::History;
use crate::session::Session;
use std::collections::HashMap;

/// Dispatch table from command name to builtin.
pub struct BuiltinMap {
    func_map: HashMap<String, Box<dyn Builtin>>,
}

impl BuiltinMap {
    /// Build the table with every shipped builtin registered.
    pub fn new() -> Self {
        let mut builtin = BuiltinMap {
            func_map: HashMap::new(),
        };
        builtin.populate_func_map();
        builtin
    }

    fn populate_func_map(&mut self) {
        // If builtin map is not empty abort inital population
        if !self.is_empty() {
            return;
        }

        self.add("exit", Box::new(Exit::new()));
        self.add("env", Box::new(Env::new()));
        self.add("help", Box::new(Help::new()));
        self.add("history", Box::new(History::new()));
        self.add("setenv", Box::new(SetEnv::new()));
        self.add("unsetenv", Box::new(UnsetEnv::new()));
        self.add("cd", Box::new(Cd::new()));
        self.add("alias", Box::new(Alias::new()));
    }

    pub fn get(&self, func_name: &str) -> Option<&dyn Builtin> {
        self.func_map.get(func_name).map(|builtin| builtin.as_ref())
    }

    pub fn add(&mut self, func_name: &str, func_ptr: Box<dyn Builtin>) {
        self.func_map.insert(func_name.to_string(), func_ptr);
    }

    pub fn contains(&self, func_name: &str) -> bool {
        self.func_map.contains_key(func_name)
    }

    pub fn is_empty(&self) -> bool {
        self.func_map.is_empty()
    }

    /// Run `func_name` against the session, or `None` when it is not a builtin.
    pub fn invoke(&self, func_name: &str, session: &mut Session) -> Option<Outcome> {
        let builtin = self.get(func_name)?;
        Some(builtin.call(session))
    }
}

impl Default for BuiltinMap {
    fn default() -> Self {
        Self::new()
    }
}
