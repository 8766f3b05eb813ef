//! The four-way action selector.

use std::fmt;
use std::str::FromStr;

/// What a submission does. Exactly one is selected at a time; the user
/// switches it directly and no transition depends on a previous outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    #[default]
    Read,
    Update,
    Delete,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Create, Action::Read, Action::Update, Action::Delete];

    pub fn label(self) -> &'static str {
        match self {
            Action::Create => "Create",
            Action::Read => "Read",
            Action::Update => "Update",
            Action::Delete => "Delete",
        }
    }

    /// Status shown after a successful mutation when the server sends no
    /// message of its own. `Read` never mutates.
    pub fn default_message(self) -> Option<&'static str> {
        match self {
            Action::Create => Some("Course created"),
            Action::Update => Some("Course updated"),
            Action::Delete => Some("Course deleted"),
            Action::Read => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown action: {s}"))
    }
}
