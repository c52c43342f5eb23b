//! EcoCollect CLI - Command-line interface
//!
//! This binary provides a command-line interface to the EcoCollect library:
//! a demonstration collection session, weighed-collection recording, and
//! configuration management.

mod commands;
mod error;
mod notifier;
mod runner;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ecocollect")]
#[command(version = ecocollect::VERSION)]
#[command(about = "Collection validation for waste-pickup routes", long_about = None)]
struct Cli {
    /// Enable debug-level logging regardless of RUST_LOG
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a demonstration collection session against a seeded route
    Run(commands::run::RunArgs),
    /// Record a weighed, pay-by-weight collection
    Weigh(commands::weigh::WeighArgs),
    /// Manage the configuration file
    Config(commands::config::ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Run(args) => commands::run::execute(args, cli.debug),
        Command::Weigh(args) => commands::weigh::execute(args, cli.debug),
        Command::Config(args) => commands::config::execute(args),
    };

    if let Err(e) = result {
        e.exit();
    }
}
