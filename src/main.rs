use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::{
    handle_add_command, handle_categories_command, handle_clear_command, handle_delete_command,
    handle_export_command, handle_list_command, handle_show_command, handle_monthly_command, handle_stats_command,
    handle_summary_command,
    AddArgs, ExportArgs, ListArgs,
};
use budget_tracker::config::{BudgetPaths, Settings, DATA_DIR_ENV};
use budget_tracker::logging::{self, LOG_ENV};
use budget_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Track income and expenses in a local CSV ledger",
    long_about = "Budget Tracker records income and expense transactions in a plain \
                  CSV file and reports totals, category breakdowns and monthly \
                  summaries from the command line."
)]
struct Cli {
    /// Base directory for the ledger, settings and log file
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory, ledger and settings file
    Init,

    /// Record a new transaction
    Add(AddArgs),

    /// List transactions
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show every field of one transaction
    Show {
        /// Transaction ID (or unambiguous id prefix)
        id: String,
    },

    /// Delete a transaction by id (or unambiguous id prefix)
    #[command(alias = "rm")]
    Delete {
        /// Transaction ID
        id: String,
    },

    /// Remove every transaction
    Clear {
        /// Confirm the removal
        #[arg(long)]
        yes: bool,
    },

    /// Show totals and per-category breakdowns
    Summary {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
        /// Also list the N largest expense categories
        #[arg(long)]
        top: Option<usize>,
    },

    /// Show a quick statistics snapshot
    Stats {
        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show income, expenses and balance per month
    Monthly,

    /// Show suggested categories
    Categories {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export all transactions with a summary
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => BudgetPaths::with_base_dir(dir),
        None => BudgetPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    let _log = logging::init(&settings, &paths)?;

    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Initialized budget tracker at: {}", paths.base_dir().display());
            println!("  Ledger:   {}", storage.transactions.path().display());
            println!("  Settings: {}", paths.settings_file().display());
            println!();
            println!("Run 'budget add Expense Food 12.50' to record a transaction.");
        }
        Some(Commands::Add(args)) => {
            handle_add_command(&storage, args)?;
        }
        Some(Commands::List(args)) => handle_list_command(&storage, args)?,
        Some(Commands::Show { id }) => handle_show_command(&storage, &id)?,
        Some(Commands::Delete { id }) => handle_delete_command(&storage, &id)?,
        Some(Commands::Clear { yes }) => handle_clear_command(&storage, yes)?,
        Some(Commands::Summary { json, top }) => {
            handle_summary_command(&storage, &settings, json, top)?
        }
        Some(Commands::Stats { json }) => handle_stats_command(&storage, &settings, json)?,
        Some(Commands::Monthly) => handle_monthly_command(&storage, &settings)?,
        Some(Commands::Categories { json }) => handle_categories_command(json)?,
        Some(Commands::Export(args)) => handle_export_command(&storage, args)?,
        Some(Commands::Config) => {
            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.transactions_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Log level:       {}", settings.log_level);
            println!("  Log to file:     {}", settings.log_to_file);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!();
            println!("Environment overrides: {}, {}", DATA_DIR_ENV, LOG_ENV);
        }
        None => {
            println!("Budget Tracker - income and expense ledger");
            println!();
            println!("Run 'budget --help' for usage information.");
        }
    }

    Ok(())
}
