use crate::output::BufferedWriter;
use crate::process::builtin::{Builtin, Outcome};
use crate::session::Session;
use crate::store::list::{List, Node};
use std::io::Write;
use thiserror::Error;

// man page: https://www.man7.org/linux/man-pages/man1/alias.1p.html

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasError {
    #[error("alias definition '{0}' has no '='")]
    MissingSeparator(String),
    #[error("no alias named '{0}'")]
    NotFound(String),
}

/// Implements `alias [name[=value] ...]` over the session's alias list.
pub struct Alias {}

impl Builtin for Alias {
    /// Print, query, or define aliases according to the provided arguments.
    fn call(&self, session: &mut Session) -> Outcome {
        if session.argc() <= 1 {
            for node in session.alias.iter() {
                print_alias(Some(node), &mut session.out);
            }
            return Outcome::Continue;
        }

        let operands = session.args()[1..].to_vec();
        for operand in operands {
            if operand.contains('=') {
                if let Err(err) = set_alias(&mut session.alias, &operand) {
                    tracing::debug!("alias: {err}");
                }
                continue;
            }

            let node = session.alias.starts_with(&operand, Some('='));
            print_alias(node, &mut session.out);
        }

        Outcome::Continue
    }
}

impl Alias {
    pub fn new() -> Self {
        Alias {}
    }
}

/// Define `name=value`, replacing any earlier definition of `name`.
///
/// An empty value removes the alias instead.
pub fn set_alias(aliases: &mut List, definition: &str) -> Result<(), AliasError> {
    let Some((_, value)) = definition.split_once('=') else {
        return Err(AliasError::MissingSeparator(definition.to_string()));
    };
    if value.is_empty() {
        return unset_alias(aliases, definition);
    }

    let _ = unset_alias(aliases, definition);
    aliases.push_back(definition, 0);
    Ok(())
}

/// Remove the alias named by the text before the first `=` of `definition`.
pub fn unset_alias(aliases: &mut List, definition: &str) -> Result<(), AliasError> {
    let Some((name, _)) = definition.split_once('=') else {
        return Err(AliasError::MissingSeparator(definition.to_string()));
    };

    let index = aliases.index_of(aliases.starts_with(name, Some('=')));
    match index {
        Some(index) if aliases.delete_at(index) => Ok(()),
        _ => Err(AliasError::NotFound(name.to_string())),
    }
}

/// Write `name='value'` for `node`. Returns `false` when there is nothing to print.
pub fn print_alias<W: Write>(node: Option<&Node>, out: &mut BufferedWriter<W>) -> bool {
    let Some(node) = node else {
        return false;
    };

    let (name, value) = node.text().split_once('=').unwrap_or((node.text(), ""));
    out.put_str(Some(name));
    out.put_str(Some("='"));
    out.put_str(Some(value));
    out.put_str(Some("'\n"));
    true
}
