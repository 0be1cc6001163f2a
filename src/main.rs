use anyhow::Result;
use clap::{Parser, Subcommand};

use wallet_cli::cli::{
    handle_backup_command, handle_budget_command, handle_report_command, handle_settings_command,
    handle_transaction_command, BackupCommands, BudgetCommands, ReportCommands, SettingsCommands,
    TransactionCommands,
};
use wallet_cli::config::{Settings, WalletPaths};
use wallet_cli::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "wallet",
    version,
    about = "Command-line personal finance tracker",
    long_about = "wallet-cli tracks income and expense transactions, a monthly \
                  budget, and spending summaries, all stored locally as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Spending reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// User settings
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Backup and restore
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wallet_cli=warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = WalletPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Settings(cmd)) => {
            handle_settings_command(&paths, &mut settings, cmd)?;
        }
        Some(Commands::Backup(cmd)) => {
            handle_backup_command(&storage, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing wallet-cli at: {}", paths.data_dir().display());
            initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'wallet transaction add' to record your first transaction");
            println!("and 'wallet budget set' to set a monthly budget.");
        }
        Some(Commands::Config) => {
            println!("wallet-cli configuration");
            println!("========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency:      {} ({})", settings.currency_code, settings.currency_symbol);
            println!("  Budget alerts: {}", settings.budget_alerts_enabled);
        }
        None => {
            println!("wallet-cli - Command-line personal finance tracker");
            println!();
            println!("Run 'wallet --help' for usage information.");
            println!("Run 'wallet init' to set up a new data directory.");
        }
    }

    Ok(())
}
