use crate::core::{ArchiveReport, ConfigProvider, PlannedCopy, Storage};
use crate::utils::error::Result;
use crate::utils::validation::validate_source;
use chrono::Utc;
use std::path::Path;

/// Copies one daily simulation file into the archive and the training pool.
///
/// Steps run in a fixed order and the first failure aborts the run: nothing
/// after a failed directory creation or a failed archive copy is attempted.
pub struct Archiver<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> Archiver<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// The two copies `run` would perform, without touching the filesystem.
    pub fn plan(&self, source: &Path) -> Result<Vec<PlannedCopy>> {
        let file_name = validate_source(source)?;

        Ok([self.config.archive_dir(), self.config.pool_dir()]
            .into_iter()
            .map(|dir| PlannedCopy {
                from: source.to_path_buf(),
                to: dir.join(file_name),
            })
            .collect())
    }

    pub fn run(&self, source: &Path) -> Result<ArchiveReport> {
        let file_name = validate_source(source)?;
        let archive_dir = self.config.archive_dir();
        let pool_dir = self.config.pool_dir();

        tracing::info!("📦 Archiving {}", source.display());

        // 先建立兩個目錄, 任一失敗就不做任何複製
        tracing::debug!("Ensuring archive directory {}", archive_dir.display());
        self.storage.ensure_dir(archive_dir)?;
        tracing::debug!("Ensuring pool directory {}", pool_dir.display());
        self.storage.ensure_dir(pool_dir)?;

        let archive_path = archive_dir.join(file_name);
        let bytes = self.storage.copy_file(source, &archive_path)?;
        tracing::info!("📁 Archived to {}", archive_path.display());

        let pool_path = pool_dir.join(file_name);
        self.storage.copy_file(source, &pool_path)?;
        tracing::info!("🧪 Added to training pool {}", pool_path.display());

        Ok(ArchiveReport {
            source: source.to_path_buf(),
            file_name: file_name.to_string_lossy().into_owned(),
            archive_dir: archive_dir.to_path_buf(),
            pool_dir: pool_dir.to_path_buf(),
            archive_path,
            pool_path,
            bytes,
            archived_at: Utc::now(),
        })
    }
}
