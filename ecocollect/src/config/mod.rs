//! Configuration for EcoCollect components.
//!
//! User configuration lives at `~/.ecocollect/config.ini`. Settings structs
//! live in [`settings`], constants in [`defaults`], parsing in [`parser`],
//! and serialization in [`writer`]; [`file`] ties them together with
//! load/save helpers.
//!
//! # Example
//!
//! ```no_run
//! use ecocollect::config::ConfigFile;
//!
//! let config = ConfigFile::load()?;
//! println!("confirm delay: {} ms", config.route.confirm_delay_ms);
//! # Ok::<(), ecocollect::config::ConfigFileError>(())
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{ConfigFile, LoggingSettings, RouteSettings, ScannerSettings};
