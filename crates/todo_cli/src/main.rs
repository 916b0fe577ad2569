use clap::Parser;
use clap::error::ErrorKind;
use todo_cli::cli::{Cli, Command, USAGE};
use todo_core::TaskStore;
use todo_core::error::AppError;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("{USAGE}");
}

fn print_error(err: &AppError) {
    println!("Error: {}", err.message());
}

fn normalize_parse_error(err: clap::Error) -> AppError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or("invalid command").trim();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string();
    AppError::invalid_input(message)
}

fn open_store() -> Result<TaskStore, AppError> {
    let store = TaskStore::open()?;
    tracing::debug!(config = ?store.config(), "opened task store");
    Ok(store)
}

fn run_command(command: Command) -> Result<(), AppError> {
    match command {
        Command::Help => print_usage(),
        Command::Add { description } => {
            let added = open_store()?.add_task(description.as_deref())?;
            println!("Added todo: \"{added}\"");
        }
        Command::Ls => {
            let listing = open_store()?.list_pending();
            if listing.is_empty() {
                println!("There are no pending todos!");
            }
            for task in listing {
                println!("{task}");
            }
        }
        Command::Report => println!("{}", open_store()?.stats()),
        Command::Del { number } => {
            let removed = open_store()?.delete_task(number.as_deref())?;
            println!("Deleted todo #{}", removed.number);
        }
        Command::Done { number } => {
            let removed = open_store()?.complete_task(number.as_deref())?;
            println!("Marked todo #{} as done.", removed.number);
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                print_usage();
                return;
            }
            ErrorKind::DisplayVersion => {
                print!("{err}");
                return;
            }
            _ => {
                print_error(&normalize_parse_error(err));
                print_usage();
                return;
            }
        },
    };

    let Some(command) = cli.command else {
        print_usage();
        return;
    };

    if let Err(err) = run_command(command) {
        print_error(&err);
    }
}
