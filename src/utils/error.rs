use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Usage error: {message}")]
    UsageError { message: String },

    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDirError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {} -> {}: {source}", .from.display(), .to.display())]
    CopyError {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {reason} (got '{value}')")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Filesystem,
    Configuration,
}

impl ArchiveError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::UsageError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UsageError { .. } => ErrorCategory::Usage,
            Self::CreateDirError { .. }
            | Self::CopyError { .. }
            | Self::SerializationError(_) => ErrorCategory::Filesystem,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// 程序退出碼: 1 = 檔案系統錯誤, 2 = 用法錯誤, 3 = 配置錯誤
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Filesystem => 1,
            ErrorCategory::Usage => 2,
            ErrorCategory::Configuration => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::UsageError { message } => message.clone(),
            Self::CreateDirError { path, .. } => {
                format!("Cannot create destination directory {}", path.display())
            }
            Self::CopyError { from, to, source } => format!(
                "Cannot copy {} to {}: {}",
                from.display(),
                to.display(),
                source
            ),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::UsageError { .. } => "Pass the path of the daily simulation CSV as the only argument",
            Self::CreateDirError { .. } => {
                "Check write permissions on the parent of the destination directory"
            }
            Self::CopyError { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                "Check that the source file exists; nothing was copied"
            }
            Self::CopyError { .. } => {
                "Check permissions and free disk space, then re-run; re-running is safe"
            }
            Self::SerializationError(_) => "Re-run without --json",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file or the --archive-dir/--pool-dir flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ArchiveError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_exit_codes_by_category() {
        assert_eq!(ArchiveError::usage("missing source").exit_code(), 2);

        let copy = ArchiveError::CopyError {
            from: PathBuf::from("a.csv"),
            to: PathBuf::from("data/archive/a.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(copy.exit_code(), 1);
        assert_eq!(copy.category(), ErrorCategory::Filesystem);

        let config = ArchiveError::ConfigError {
            message: "bad toml".to_string(),
        };
        assert_eq!(config.exit_code(), 3);
    }

    #[test]
    fn test_missing_source_suggestion() {
        let err = ArchiveError::CopyError {
            from: PathBuf::from("missing.csv"),
            to: PathBuf::from("data/archive/missing.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.recovery_suggestion().contains("source file exists"));
        assert!(err.user_friendly_message().contains("missing.csv"));
    }
}
