use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

use cents::cli::{handle_history_command, handle_transaction_command, TransactionCommands};
use cents::config::{CentsPaths, Settings};
use cents::display::DisplayOptions;
use cents::storage::Storage;
use cents::CentsError;

#[derive(Parser)]
#[command(
    name = "cents",
    version,
    about = "Cents, a CLI for managing your finances.",
    long_about = "Cents records income and expenses in a plain CSV ledger under \
                  your home directory (or $CENTS_HOME) and lets you list, edit \
                  and delete them from the command line."
)]
struct Cli {
    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Ledger(TransactionCommands),

    /// Show recent changes to the ledger
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let code = err
                .downcast_ref::<CentsError>()
                .map(CentsError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = CentsPaths::new().context("Failed to resolve the cents directory")?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone())?.with_audit(settings.audit_enabled);

    let color = !cli.no_color && std::io::stdout().is_terminal();
    let display = DisplayOptions::from_settings(&settings, color);

    match cli.command {
        Some(Commands::Ledger(cmd)) => {
            handle_transaction_command(&storage, &settings, &display, cmd)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&storage, limit)?;
        }
        Some(Commands::Config) => {
            println!("Cents Configuration");
            println!("===================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.transactions_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Default type:    {}", settings.default_type);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Color:           {}", settings.color);
            println!("  Audit log:       {}", settings.audit_enabled);
        }
        None => {
            println!("Cents, a CLI for managing your finances.");
            if storage.ensure_initialized()? {
                println!(
                    "Created an empty ledger at {}",
                    storage.transactions.path().display()
                );
            }
            println!();
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
