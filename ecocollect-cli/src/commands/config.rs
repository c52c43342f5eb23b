//! Configuration management.

use clap::{Args, Subcommand};

use ecocollect::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Arguments for the `config` subcommand.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the loaded configuration values
    Show,
    /// Create the default configuration file if it doesn't exist
    Init,
    /// Print the configuration file path
    Path,
}

/// Execute the `config` subcommand.
pub fn execute(args: ConfigArgs) -> Result<(), CliError> {
    match args.action {
        ConfigAction::Show => {
            let config = ConfigFile::load()?;
            println!("[route]");
            println!("confirm_delay_ms = {}", config.route.confirm_delay_ms);
            println!();
            println!("[scanner]");
            println!("frame_interval_ms = {}", config.scanner.frame_interval_ms);
            println!();
            println!("[logging]");
            println!("file = {}", config.logging.file.display());
        }
        ConfigAction::Init => {
            let path = ConfigFile::ensure_exists()?;
            println!("Configuration file: {}", path.display());
        }
        ConfigAction::Path => {
            println!("{}", config_file_path().display());
        }
    }
    Ok(())
}
