use clap::{Parser, Subcommand};

/// Usage text printed by `help` and when no subcommand is given.
pub const USAGE: &str = r#"Usage :-
$ ./todo add "todo item"  # Add a new todo
$ ./todo ls               # Show remaining todos
$ ./todo del NUMBER       # Delete a todo
$ ./todo done NUMBER      # Complete a todo
$ ./todo help             # Show usage
$ ./todo report           # Statistics"#;

#[derive(Parser, Debug)]
#[command(
    name = "todo",
    version,
    about = "Plain-text pending and completed todo lists",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show usage
    Help,
    /// Add a new todo
    ///
    /// Example: todo add "buy milk"
    Add { description: Option<String> },
    /// Show remaining todos, newest first
    Ls,
    /// Statistics
    Report,
    /// Delete a todo
    ///
    /// Example: todo del 2
    Del {
        #[arg(allow_hyphen_values = true)]
        number: Option<String>,
    },
    /// Complete a todo
    ///
    /// Example: todo done 1
    Done {
        #[arg(allow_hyphen_values = true)]
        number: Option<String>,
    },
}
