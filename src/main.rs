use anyhow::Result;
use clap::{Parser, Subcommand};

use teller::config::{paths::TellerPaths, settings::Settings};
use teller::ledger::Ledger;
use teller::shell;

#[derive(Parser)]
#[command(
    name = "teller",
    version,
    about = "Terminal-based banking ledger application",
    long_about = "Teller is a terminal-based banking ledger. It keeps an \
                  in-memory ledger of checking and savings accounts and \
                  supports deposits, withdrawals, transfers, interest \
                  accrual, and reporting through an interactive menu."
)]
struct Cli {
    /// Override the bank name from settings
    #[arg(short, long)]
    name: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current configuration and paths
    Config,

    /// Create the configuration directory and default settings file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TellerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Config) => {
            println!("Teller Configuration");
            println!("====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Bank name:             {}", settings.bank_name);
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!(
                "  Default interest rate: {}",
                settings.default_interest_rate
            );
        }
        Some(Commands::Init) => {
            println!("Initializing Teller at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'teller' to start the interactive shell.");
        }
        None => {
            let bank_name = cli.name.unwrap_or_else(|| settings.bank_name.clone());
            let mut ledger = Ledger::new(bank_name);
            shell::run(&mut ledger, &settings)?;
        }
    }

    Ok(())
}
