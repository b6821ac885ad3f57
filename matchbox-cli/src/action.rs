use std::str::FromStr;

use matchbox_lib::{PreferenceReconciler, ResourceId, preferences};
use strum::{Display, EnumString};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Verb {
    Prefer,
    Unprefer,
    Up,
    Down,
}

/// A user edit replayed against the working set, written as `<verb>:<resource id>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub verb: Verb,
    pub resource_id: ResourceId,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseActionError {
    #[error("expected `<verb>:<resource id>`, got '{0}'")]
    Syntax(String),
    #[error("unknown verb '{0}'; expected prefer, unprefer, up or down")]
    Verb(String),
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (verb, id) = s
            .split_once(':')
            .filter(|(_, id)| !id.is_empty())
            .ok_or_else(|| ParseActionError::Syntax(s.to_owned()))?;
        let verb = verb
            .parse()
            .map_err(|_| ParseActionError::Verb(verb.to_owned()))?;

        Ok(Self {
            verb,
            resource_id: id.into(),
        })
    }
}

/// Apply `actions` in order, stopping at the first that fails.
pub fn replay(
    reconciler: &mut PreferenceReconciler,
    actions: &[Action],
) -> preferences::Result<()> {
    for action in actions {
        let id = &action.resource_id;
        match action.verb {
            Verb::Prefer => reconciler.prefer(id)?,
            Verb::Unprefer => reconciler.unprefer(id)?,
            Verb::Up => reconciler.move_up(id)?,
            Verb::Down => reconciler.move_down(id)?,
        };
    }

    Ok(())
}
