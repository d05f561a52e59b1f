use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Result of one successful archive run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveReport {
    pub source: PathBuf,
    pub file_name: String,
    pub archive_dir: PathBuf,
    pub pool_dir: PathBuf,
    pub archive_path: PathBuf,
    pub pool_path: PathBuf,
    /// Bytes written to each destination.
    pub bytes: u64,
    pub archived_at: DateTime<Utc>,
}

impl ArchiveReport {
    /// `Copied <source> -> <archive-dir>/ and <pool-dir>/`
    pub fn confirmation(&self) -> String {
        format!(
            "Copied {} -> {}/ and {}/",
            self.source.display(),
            dir_display(&self.archive_dir),
            dir_display(&self.pool_dir)
        )
    }
}

/// Directory without trailing separators; the root becomes "" so the
/// caller's appended `/` is the only one.
fn dir_display(dir: &Path) -> String {
    dir.display()
        .to_string()
        .trim_end_matches(['/', '\\'])
        .to_string()
}

/// One copy the archiver would perform. Used for `--dry-run` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCopy {
    pub from: PathBuf,
    pub to: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(archive_dir: &str, pool_dir: &str) -> ArchiveReport {
        ArchiveReport {
            source: PathBuf::from("daily_sim_20250301.csv"),
            file_name: "daily_sim_20250301.csv".to_string(),
            archive_dir: PathBuf::from(archive_dir),
            pool_dir: PathBuf::from(pool_dir),
            archive_path: PathBuf::from(archive_dir).join("daily_sim_20250301.csv"),
            pool_path: PathBuf::from(pool_dir).join("daily_sim_20250301.csv"),
            bytes: 0,
            archived_at: Utc::now(),
        }
    }

    #[test]
    fn test_confirmation_message() {
        assert_eq!(
            report("data/archive", "data/train_pool").confirmation(),
            "Copied daily_sim_20250301.csv -> data/archive/ and data/train_pool/"
        );
        assert_eq!(
            report("data/archive/", "data/train_pool/").confirmation(),
            "Copied daily_sim_20250301.csv -> data/archive/ and data/train_pool/"
        );
    }

    #[test]
    fn test_confirmation_message_root_dir() {
        assert_eq!(
            report("/", "/srv/pool").confirmation(),
            "Copied daily_sim_20250301.csv -> / and /srv/pool/"
        );
    }
}
