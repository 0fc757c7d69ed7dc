use anyhow::Context;
use bookshelf_core::{BookCollection, BookshelfConfig, JsonFileStorage};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod display;
mod shell;

use commands::BookCommand;

/// Bookshelf - keep track of the books you own and the ones you have read
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON file holding the collection (default: books-data.json)
    #[arg(short, long, value_name = "FILE", global = true)]
    data_file: Option<PathBuf>,

    /// TOML config file (default: bookshelf.toml when present)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default)
    Shell,

    #[command(flatten)]
    Book(BookCommand),
}

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = BookshelfConfig::discover(cli.config.as_deref())?.apply_env();
    if let Some(path) = cli.data_file {
        config = config.with_data_file(path);
    }
    tracing::debug!("Using data file {}", config.data_file.display());

    let storage = JsonFileStorage::new(&config.data_file);
    let mut shelf = BookCollection::open(storage).context("Opening book collection")?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = std::io::stdin();
            shell::Shell::new(shelf, stdin.lock(), std::io::stdout()).run()?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Book(command) => {
            let outcome = commands::run(command, &mut shelf, &mut std::io::stdout());
            commands::report_outcome(outcome)
        }
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    if verbose {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("debug"))
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}
