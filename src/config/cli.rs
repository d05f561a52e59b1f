use crate::core::Storage;
use crate::utils::error::{ArchiveError, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Local-disk storage. Copies go through a hidden `.<name>.partial` file in
/// the destination directory and are renamed into place, so a failed copy
/// never leaves a truncated file under the final name.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn staging_path(to: &Path) -> PathBuf {
        let mut name = OsString::from(".");
        if let Some(file_name) = to.file_name() {
            name.push(file_name);
        }
        name.push(".partial");
        to.with_file_name(name)
    }
}

impl Storage for LocalStorage {
    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).map_err(|source| ArchiveError::CreateDirError {
            path: dir.to_path_buf(),
            source,
        })
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<u64> {
        let staging = Self::staging_path(to);
        let copy_error = |source| ArchiveError::CopyError {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        };

        let bytes = match fs::copy(from, &staging) {
            Ok(bytes) => bytes,
            Err(e) => {
                // 來源不存在時 staging 檔不會被建立, 這裡只清理寫到一半的情況
                let _ = fs::remove_file(&staging);
                return Err(copy_error(e));
            }
        };

        if let Err(e) = fs::rename(&staging, to) {
            let _ = fs::remove_file(&staging);
            return Err(copy_error(e));
        }

        tracing::debug!("Copied {} bytes: {} -> {}", bytes, from.display(), to.display());
        Ok(bytes)
    }
}
