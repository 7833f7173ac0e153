use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use spendlog::core::log::init_logging;
use spendlog::core::settings::SettingsUpdate;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for spendlog::AppCommand {
    fn from(cmd: Commands) -> spendlog::AppCommand {
        match cmd {
            Commands::Add {
                amount,
                description,
                date,
            } => spendlog::AppCommand::Add {
                amount,
                description,
                date,
            },
            Commands::Edit {
                id,
                amount,
                description,
            } => spendlog::AppCommand::Edit {
                id,
                amount,
                description,
            },
            Commands::Delete { id } => spendlog::AppCommand::Delete { id },
            Commands::List { view, date } => spendlog::AppCommand::List { view, date },
            Commands::Summary => spendlog::AppCommand::Summary,
            Commands::Settings {
                timezone,
                currency,
                symbol,
                reset,
            } => spendlog::AppCommand::Settings {
                update: SettingsUpdate {
                    timezone,
                    currency,
                    currency_symbol: symbol,
                },
                reset,
            },
            Commands::Currencies => spendlog::AppCommand::Currencies,
            Commands::Clear => spendlog::AppCommand::Clear,
            Commands::Format { amount, preset } => spendlog::AppCommand::Format { amount, preset },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Record a new expense
    Add {
        amount: f64,
        description: String,
        /// Day the expense belongs to (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Change the amount and description of an expense
    Edit {
        id: String,
        amount: f64,
        description: String,
    },
    /// Delete an expense
    Delete { id: String },
    /// List expenses for a day, week or month
    List {
        /// daily, weekly or monthly
        #[arg(long)]
        view: Option<String>,
        /// Any day inside the period to show (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Display weekly and monthly spending analytics
    Summary,
    /// Show or change timezone and currency preferences
    Settings {
        /// IANA timezone name, e.g. Europe/Berlin
        #[arg(long)]
        timezone: Option<String>,
        /// ISO currency code, e.g. EUR
        #[arg(long)]
        currency: Option<String>,
        /// Currency symbol, overrides the symbol picked from the currency code
        #[arg(long)]
        symbol: Option<String>,
        /// Reset all settings to defaults
        #[arg(long)]
        reset: bool,
    },
    /// List known currencies
    Currencies,
    /// Delete all expenses
    Clear,
    /// Format an amount with the currency presets
    Format {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// standard, compact, detailed, input or analytics
        #[arg(short, long)]
        preset: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => match cli.config_path.as_deref() {
            Some(path) => spendlog::cli::setup::setup_at_path(path),
            None => spendlog::cli::setup::setup(),
        },
        Some(cmd) => spendlog::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
