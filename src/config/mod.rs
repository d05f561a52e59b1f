pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_dirs, validate_path, Validate};
use std::path::{Path, PathBuf};

pub const DEFAULT_ARCHIVE_DIR: &str = "data/archive";
pub const DEFAULT_POOL_DIR: &str = "data/train_pool";

/// Destination directories for one run. Relative paths resolve against the
/// working directory of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivePaths {
    pub archive_dir: PathBuf,
    pub pool_dir: PathBuf,
}

impl ArchivePaths {
    pub fn new(archive_dir: impl Into<PathBuf>, pool_dir: impl Into<PathBuf>) -> Self {
        Self {
            archive_dir: archive_dir.into(),
            pool_dir: pool_dir.into(),
        }
    }

    /// 以 base 為根目錄, 沿用預設的相對路徑 (測試時指向暫存目錄)
    pub fn rooted_at(base: &Path) -> Self {
        Self::new(base.join(DEFAULT_ARCHIVE_DIR), base.join(DEFAULT_POOL_DIR))
    }
}

impl Default for ArchivePaths {
    fn default() -> Self {
        Self::new(DEFAULT_ARCHIVE_DIR, DEFAULT_POOL_DIR)
    }
}

impl ConfigProvider for ArchivePaths {
    fn archive_dir(&self) -> &Path {
        &self.archive_dir
    }

    fn pool_dir(&self) -> &Path {
        &self.pool_dir
    }
}

impl Validate for ArchivePaths {
    fn validate(&self) -> Result<()> {
        validate_path("archive_dir", &self.archive_dir)?;
        validate_path("pool_dir", &self.pool_dir)?;
        validate_distinct_dirs(&self.archive_dir, &self.pool_dir)
    }
}

#[cfg(feature = "cli")]
pub use self::args::CliConfig;

#[cfg(feature = "cli")]
mod args {
    use super::toml_config::TomlConfig;
    use super::ArchivePaths;
    use crate::utils::error::Result;
    use crate::utils::validation::Validate;
    use clap::{CommandFactory, Parser};
    use std::ffi::OsString;
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "sim-archiver")]
    #[command(about = "Copy a daily simulation CSV into the archive and the training pool")]
    #[command(override_usage = "sim-archiver [OPTIONS] <path-to-csv>")]
    pub struct CliConfig {
        /// Path to the daily simulation CSV
        #[arg(value_name = "PATH_TO_CSV")]
        pub source: Option<OsString>,

        /// Archive directory (default: data/archive)
        #[arg(long)]
        pub archive_dir: Option<PathBuf>,

        /// Training pool directory (default: data/train_pool)
        #[arg(long)]
        pub pool_dir: Option<PathBuf>,

        /// TOML file with a [paths] table overriding the default directories
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        /// Print the archive report as JSON instead of the confirmation line
        #[arg(long)]
        pub json: bool,

        /// Show the planned copies without touching the filesystem
        #[arg(long)]
        pub dry_run: bool,

        /// Emit logs as JSON lines on stderr
        #[arg(long)]
        pub log_json: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        /// The positional argument as a path, `None` when absent or empty.
        pub fn source_path(&self) -> Option<PathBuf> {
            self.source
                .as_ref()
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        }

        /// 路徑優先序: 命令列 > TOML 檔 > 預設值
        pub fn resolve_paths(&self) -> Result<ArchivePaths> {
            let mut paths = match &self.config {
                Some(file) => TomlConfig::from_file(file)?.into_paths(),
                None => ArchivePaths::default(),
            };

            if let Some(dir) = &self.archive_dir {
                paths.archive_dir = dir.clone();
            }
            if let Some(dir) = &self.pool_dir {
                paths.pool_dir = dir.clone();
            }

            paths.validate()?;
            Ok(paths)
        }

        pub fn usage() -> String {
            Self::command().render_usage().to_string()
        }
    }

}
