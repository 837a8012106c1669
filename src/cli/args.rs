//! Clap argument types.

use clap::Parser;
use std::path::PathBuf;

use useradmin::models::{Field, FormDraft};
use useradmin::view::ViewFormat;

/// List, create, edit, and delete users on a REST collection.
#[derive(Parser, Debug)]
#[command(name = "useradmin", version = useradmin::constants::VERSION)]
pub struct Cli {
    /// Base address of the API (the collection lives at <URL>/users).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Read configuration from this file instead of ./.useradmin.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (default from config, else terminal).
    #[arg(long, global = true)]
    pub format: Option<ViewFormat>,

    /// Delete without asking for confirmation.
    #[arg(long, short = 'y', global = true, default_value_t = false)]
    pub yes: bool,

    /// Do not draw the loading indicator.
    #[arg(long, global = true, default_value_t = false)]
    pub no_progress: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Fetch and print all users.
    List,

    /// Create a user.
    Add(AddArgs),

    /// Edit a user. Omitted fields keep their current value.
    Edit(EditArgs),

    /// Delete a user.
    Delete {
        /// Id of the user to delete.
        id: u64,
    },

    /// Start an interactive session.
    Shell,

    /// Print the effective configuration.
    Config,

    /// Print version and build information.
    Version,
}

/// Arguments for the `add` subcommand.
#[derive(Parser, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long, default_value = "")]
    pub department: String,
}

impl AddArgs {
    pub fn draft(&self) -> FormDraft {
        FormDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            department: self.department.clone(),
        }
    }
}

/// Arguments for the `edit` subcommand.
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Id of the user to edit.
    pub id: u64,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub department: Option<String>,
}

impl EditArgs {
    /// The fields given on the command line.
    pub fn changes(&self) -> Vec<(Field, String)> {
        [
            (Field::FirstName, &self.first_name),
            (Field::LastName, &self.last_name),
            (Field::Email, &self.email),
            (Field::Department, &self.department),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.clone().map(|v| (field, v)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_add() {
        let cli = Cli::try_parse_from([
            "useradmin",
            "add",
            "--first-name",
            "Ann",
            "--last-name",
            "Lee",
            "--email",
            "a@x.com",
            "--department",
            "Ops",
        ])
        .unwrap();
        match cli.command {
            Command::Add(args) => {
                let draft = args.draft();
                assert_eq!(draft.first_name, "Ann");
                assert_eq!(draft.department, "Ops");
            }
            _ => panic!("expected Add command"),
        }
    }

    #[test]
    fn add_requires_names_and_email() {
        assert!(Cli::try_parse_from(["useradmin", "add", "--first-name", "Ann"]).is_err());
    }

    #[test]
    fn edit_collects_only_given_fields() {
        let cli =
            Cli::try_parse_from(["useradmin", "edit", "3", "--department", "Sales"]).unwrap();
        match cli.command {
            Command::Edit(args) => {
                assert_eq!(args.id, 3);
                assert_eq!(args.changes(), vec![(Field::Department, "Sales".to_string())]);
            }
            _ => panic!("expected Edit command"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "useradmin",
            "delete",
            "1",
            "--yes",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();
        assert!(cli.yes);
        assert_eq!(cli.format, Some(ViewFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Delete { id: 1 }));
    }

    #[test]
    fn delete_requires_numeric_id() {
        assert!(Cli::try_parse_from(["useradmin", "delete", "one"]).is_err());
    }
}
