//! Clear CLI
//!
//! Offline tooling for building record update payloads

use clap::{Parser, Subcommand};
use clear_core::logging_facility;
use clear_core::ClearConfig;
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "clear")]
#[command(about = "Clear - events admin record tooling", long_about = None)]
struct Cli {
    /// Configuration file (missing file means defaults)
    #[arg(long, global = true, default_value = clear_core::config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute the update payload between two JSON records
    Diff(commands::diff::DiffArgs),
    /// Promo code operations
    PromoCode(commands::promo_code::PromoCodeArgs),
}

fn main() {
    let cli = Cli::parse();

    let config = match ClearConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    logging_facility::init(config.log_profile);

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args, &config),
        Commands::PromoCode(args) => commands::promo_code::execute(args, &config),
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
