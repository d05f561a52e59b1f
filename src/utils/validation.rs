use crate::utils::error::{ArchiveError, Result};
use std::ffi::OsStr;
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.to_string_lossy();

    if raw.is_empty() {
        return Err(ArchiveError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.into_owned(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if raw.contains('\0') {
        return Err(ArchiveError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.into_owned(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 兩個目的地相同時, 第二次複製會覆蓋第一次, 等於只留一份
pub fn validate_distinct_dirs(archive_dir: &Path, pool_dir: &Path) -> Result<()> {
    if archive_dir == pool_dir {
        return Err(ArchiveError::InvalidConfigValueError {
            field: "pool_dir".to_string(),
            value: pool_dir.display().to_string(),
            reason: "Pool directory must differ from the archive directory".to_string(),
        });
    }
    Ok(())
}

/// Checks the positional source argument and returns its base name.
///
/// Any failure here is a usage error: nothing on disk has been touched yet.
pub fn validate_source(source: &Path) -> Result<&OsStr> {
    let raw = source.to_string_lossy();

    if raw.is_empty() {
        return Err(ArchiveError::usage("missing path to the daily simulation CSV"));
    }

    if raw.contains('\0') {
        return Err(ArchiveError::usage(format!(
            "source path contains null bytes: {:?}",
            raw
        )));
    }

    source.file_name().ok_or_else(|| {
        ArchiveError::usage(format!("source path has no file name: {}", source.display()))
    })
}
