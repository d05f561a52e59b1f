use super::ArchivePaths;
use crate::utils::error::{ArchiveError, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    pub archive_dir: Option<PathBuf>,
    pub pool_dir: Option<PathBuf>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ArchiveError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ArchiveError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SIM_DATA_ROOT}), 未定義的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| {
            ArchiveError::ConfigError {
                message: format!("env var pattern: {}", e),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// 未設定的欄位沿用預設路徑
    pub fn into_paths(self) -> ArchivePaths {
        let defaults = ArchivePaths::default();
        ArchivePaths {
            archive_dir: self.paths.archive_dir.unwrap_or(defaults.archive_dir),
            pool_dir: self.paths.pool_dir.unwrap_or(defaults.pool_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_paths_table() {
        let toml_content = r#"
[paths]
archive_dir = "/srv/sim/archive"
pool_dir = "/srv/sim/train_pool"
"#;

        let paths = TomlConfig::from_toml_str(toml_content).unwrap().into_paths();

        assert_eq!(paths.archive_dir, PathBuf::from("/srv/sim/archive"));
        assert_eq!(paths.pool_dir, PathBuf::from("/srv/sim/train_pool"));
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let paths = TomlConfig::from_toml_str("[paths]\npool_dir = \"pool\"\n")
            .unwrap()
            .into_paths();
        assert_eq!(paths.archive_dir, PathBuf::from("data/archive"));
        assert_eq!(paths.pool_dir, PathBuf::from("pool"));

        let empty = TomlConfig::from_toml_str("").unwrap().into_paths();
        assert_eq!(empty, ArchivePaths::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SIM_ARCHIVER_TEST_ROOT", "/mnt/sim");

        let toml_content = r#"
[paths]
archive_dir = "${SIM_ARCHIVER_TEST_ROOT}/archive"
pool_dir = "${SIM_ARCHIVER_TEST_UNSET}/pool"
"#;

        let paths = TomlConfig::from_toml_str(toml_content).unwrap().into_paths();
        assert_eq!(paths.archive_dir, PathBuf::from("/mnt/sim/archive"));
        assert_eq!(paths.pool_dir, PathBuf::from("${SIM_ARCHIVER_TEST_UNSET}/pool"));

        std::env::remove_var("SIM_ARCHIVER_TEST_ROOT");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[paths\narchive_dir = 1").unwrap_err();
        assert_eq!(err.exit_code(), 3);

        let err = TomlConfig::from_toml_str("[paths]\nstaging = true\n").unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            "[paths]\narchive_dir = \"data/same\"\npool_dir = \"data/same\"\n",
        )
        .unwrap();
        assert!(config.into_paths().validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[paths]\narchive_dir = \"file/archive\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.paths.archive_dir, Some(PathBuf::from("file/archive")));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = TomlConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
