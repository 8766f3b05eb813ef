//! Line commands understood by the interactive session.

use course_core::{Action, DraftField};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Switch the action selector.
    Action(Action),
    /// Replace one draft field. The value may be empty or contain spaces.
    Set(DraftField, String),
    /// Load a listed course into the draft.
    Select(i64),
    /// Reset the draft to empty fields.
    Clear,
    Submit,
    Show,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),
    #[error("missing {0}")]
    MissingArgument(&'static str),
    #[error("{0}")]
    InvalidArgument(String),
    #[error("course id must be an integer, got {0:?}")]
    InvalidId(String),
}

pub const HELP: &str = "\
commands:
  action <create|read|update|delete>      select what submit does
  set <id|name|description|price> [value] edit one draft field
  select <id>                             load a listed course into the draft
  clear                                   empty the draft
  submit                                  run the selected action
  show                                    redraw the page
  help                                    show this help
  quit                                    leave";

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = split_word(line);

        let command = match word.to_ascii_lowercase().as_str() {
            "action" => {
                let (name, _) = split_word(rest);
                if name.is_empty() {
                    return Err(CommandError::MissingArgument("action name"));
                }
                Command::Action(name.parse().map_err(CommandError::InvalidArgument)?)
            }
            "set" => {
                let (field, value) = split_word(rest);
                if field.is_empty() {
                    return Err(CommandError::MissingArgument("field name"));
                }
                let field: DraftField = field.parse().map_err(CommandError::InvalidArgument)?;
                Command::Set(field, value.to_string())
            }
            "select" => {
                let (id, _) = split_word(rest);
                if id.is_empty() {
                    return Err(CommandError::MissingArgument("course id"));
                }
                Command::Select(id.parse().map_err(|_| CommandError::InvalidId(id.to_string()))?)
            }
            "clear" => Command::Clear,
            "submit" => Command::Submit,
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// First whitespace-delimited word and the trimmed remainder.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (s, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_is_no_command() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn parses_action() {
        assert_eq!(
            Command::parse("action Update").unwrap(),
            Some(Command::Action(Action::Update))
        );
        assert!(matches!(
            Command::parse("action upsert"),
            Err(CommandError::InvalidArgument(_))
        ));
        assert_eq!(
            Command::parse("action"),
            Err(CommandError::MissingArgument("action name"))
        );
    }

    #[test]
    fn set_keeps_inner_spaces() {
        assert_eq!(
            Command::parse("set description  Intro to   sets ").unwrap(),
            Some(Command::Set(DraftField::Description, "Intro to   sets".to_string()))
        );
    }

    #[test]
    fn set_without_value_clears_field() {
        assert_eq!(
            Command::parse("set price").unwrap(),
            Some(Command::Set(DraftField::Price, String::new()))
        );
    }

    #[test]
    fn set_accepts_non_numeric_values() {
        assert_eq!(
            Command::parse("set id abc").unwrap(),
            Some(Command::Set(DraftField::Id, "abc".to_string()))
        );
    }

    #[test]
    fn select_requires_integer() {
        assert_eq!(Command::parse("select 7").unwrap(), Some(Command::Select(7)));
        assert_eq!(
            Command::parse("select seven"),
            Err(CommandError::InvalidId("seven".to_string()))
        );
    }

    #[test]
    fn aliases() {
        assert_eq!(Command::parse("EXIT").unwrap(), Some(Command::Quit));
        assert_eq!(Command::parse("?").unwrap(), Some(Command::Help));
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            Command::parse("frobnicate now"),
            Err(CommandError::Unknown("frobnicate".to_string()))
        );
    }
}
