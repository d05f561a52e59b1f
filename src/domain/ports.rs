use crate::utils::error::Result;
use std::path::Path;

/// Filesystem operations the archiver needs. Every call either completes or
/// returns the error that aborts the run.
pub trait Storage {
    /// Create `dir` and any missing parents. Succeeds if it already exists.
    fn ensure_dir(&self, dir: &Path) -> Result<()>;

    /// Duplicate the contents of `from` into `to`, replacing `to` if present.
    /// Returns the number of bytes written.
    fn copy_file(&self, from: &Path, to: &Path) -> Result<u64>;
}

pub trait ConfigProvider {
    fn archive_dir(&self) -> &Path;
    fn pool_dir(&self) -> &Path;
}
