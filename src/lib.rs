pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, ArchivePaths};
pub use core::archiver::Archiver;
pub use domain::model::{ArchiveReport, PlannedCopy};
pub use utils::error::{ArchiveError, Result};
