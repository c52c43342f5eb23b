//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use ecocollect::config::ConfigFileError;
use ecocollect::service::ServiceError;
use ecocollect::weigh::WeighError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(ConfigFileError),
    /// Workflow operation failed
    Service(ServiceError),
    /// Weighed-collection input was rejected
    Weigh(WeighError),
    /// Failed to create the async runtime
    Runtime(String),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Config(_) => {
                eprintln!();
                eprintln!("Check the configuration file:");
                eprintln!("  ecocollect config path   - show where it lives");
                eprintln!("  ecocollect config show   - show the loaded values");
            }
            CliError::Service(ServiceError::ScanningUnavailable(_)) => {
                eprintln!();
                eprintln!("Scanning is disabled, but stops can still be completed manually:");
                eprintln!("  ecocollect run --manual <stop-id>");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Service(e) => write!(f, "{}", e),
            CliError::Weigh(e) => write!(f, "{}", e),
            CliError::Runtime(msg) => write!(f, "Runtime error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Service(e) => Some(e),
            CliError::Weigh(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<ServiceError> for CliError {
    fn from(e: ServiceError) -> Self {
        CliError::Service(e)
    }
}

impl From<WeighError> for CliError {
    fn from(e: WeighError) -> Self {
        CliError::Weigh(e)
    }
}
