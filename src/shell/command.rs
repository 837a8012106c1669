//! Shell command parsing.

use std::str::FromStr;

use thiserror::Error;

use crate::models::Field;

/// Errors from parsing a shell line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("unknown command '{0}' (try `help`)")]
    UnknownCommand(String),

    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{0}' is not a valid user id")]
    InvalidId(String),

    #[error("unknown field '{0}' (first_name, last_name, email, department)")]
    UnknownField(String),
}

/// One shell action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Reload the mirror from the remote collection.
    Refresh,
    /// Render the page in the configured format.
    Show,
    /// Render the page as HTML.
    Html,
    /// Open the dialog in create mode.
    Add,
    /// Open the dialog for a record.
    Edit(u64),
    /// Write one draft field. The value is the rest of the line.
    Set(Field, String),
    /// Submit the dialog.
    Save,
    /// Close the dialog without saving.
    Cancel,
    /// Delete a record after confirmation.
    Delete(u64),
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, ShellError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "list" | "ls" | "refresh" | "reload" => ShellCommand::Refresh,
            "show" => ShellCommand::Show,
            "html" => ShellCommand::Html,
            "add" | "new" => ShellCommand::Add,
            "edit" => ShellCommand::Edit(parse_id("edit", rest)?),
            "delete" | "rm" => ShellCommand::Delete(parse_id("delete", rest)?),
            "set" => {
                let (name, value) = match rest.split_once(char::is_whitespace) {
                    Some((name, value)) => (name, value.trim()),
                    None => (rest, ""),
                };
                if name.is_empty() {
                    return Err(ShellError::MissingArgument {
                        command: "set",
                        argument: "a field name",
                    });
                }
                let field = Field::from_str(name)
                    .map_err(|_| ShellError::UnknownField(name.to_string()))?;
                ShellCommand::Set(field, value.to_string())
            }
            "save" | "submit" => ShellCommand::Save,
            "cancel" | "close" => ShellCommand::Cancel,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            other => return Err(ShellError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }

    /// Command reference printed by `help`.
    pub fn help() -> String {
        [
            "  list              reload users from the server",
            "  show              print the table",
            "  html              print the page as HTML",
            "  add               open the dialog to add a user",
            "  edit <id>         open the dialog for a user",
            "  set <field> <v>   set first_name, last_name, email or department",
            "  save              submit the dialog",
            "  cancel            close the dialog without saving",
            "  delete <id>       delete a user (asks first)",
            "  quit              leave the shell",
            "",
        ]
        .join("\n")
    }
}

fn parse_id(command: &'static str, arg: &str) -> Result<u64, ShellError> {
    if arg.is_empty() {
        return Err(ShellError::MissingArgument {
            command,
            argument: "a user id",
        });
    }
    arg.parse().map_err(|_| ShellError::InvalidId(arg.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> ShellCommand {
        ShellCommand::parse(line).unwrap().unwrap()
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert_eq!(ShellCommand::parse("   \n"), Ok(None));
        assert_eq!(ShellCommand::parse("# note"), Ok(None));
    }

    #[test]
    fn simple_commands_and_aliases() {
        assert_eq!(parse("list"), ShellCommand::Refresh);
        assert_eq!(parse("LS"), ShellCommand::Refresh);
        assert_eq!(parse("new"), ShellCommand::Add);
        assert_eq!(parse("submit"), ShellCommand::Save);
        assert_eq!(parse("close"), ShellCommand::Cancel);
        assert_eq!(parse("exit"), ShellCommand::Quit);
    }

    #[test]
    fn id_commands() {
        assert_eq!(parse("edit 3"), ShellCommand::Edit(3));
        assert_eq!(parse("rm  11 "), ShellCommand::Delete(11));
        assert_eq!(
            ShellCommand::parse("delete"),
            Err(ShellError::MissingArgument {
                command: "delete",
                argument: "a user id",
            })
        );
        assert_eq!(
            ShellCommand::parse("edit abc"),
            Err(ShellError::InvalidId("abc".into()))
        );
    }

    #[test]
    fn set_keeps_rest_of_line() {
        assert_eq!(
            parse("set department  Research and Development "),
            ShellCommand::Set(Field::Department, "Research and Development".into())
        );
        assert_eq!(parse("set last"), ShellCommand::Set(Field::LastName, String::new()));
        assert_eq!(
            ShellCommand::parse("set phone 555"),
            Err(ShellError::UnknownField("phone".into()))
        );
    }

    #[test]
    fn unknown_command() {
        let err = ShellCommand::parse("frobnicate now").unwrap_err();
        assert_eq!(err.to_string(), "unknown command 'frobnicate' (try `help`)");
    }
}
