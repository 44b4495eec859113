use crate::core::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// SQL dialect of the statements being extracted.
///
/// The dialect decides which clause extractors the engine runs, for example
/// `TOP` for SQL Server and `LIMIT` for MySQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    #[default]
    SqlServer,
    MySql,
    PostgreSql,
    Oracle,
    H2,
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DatabaseType::SqlServer => "SQLServer",
            DatabaseType::MySql => "MySQL",
            DatabaseType::PostgreSql => "PostgreSQL",
            DatabaseType::Oracle => "Oracle",
            DatabaseType::H2 => "H2",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
    /// Write to rotated files under `dir` instead of stderr
    pub to_file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "sqlsegment".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
            to_file: false,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ExtractConfig {
    pub database_type: DatabaseType,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub extract: ExtractConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log.level, "info");
        assert!(!config.log.to_file);
        assert_eq!(config.extract.database_type, DatabaseType::SqlServer);
    }

    #[test]
    fn test_config_load_save() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temporary file");

        let mut config = Config::default();
        config.extract.database_type = DatabaseType::MySql;
        let toml_content =
            toml::to_string_pretty(&config).expect("Failed to serialize config to TOML");
        temp_file
            .write_all(toml_content.as_bytes())
            .expect("Failed to write TOML content to temporary file");

        let loaded_config =
            Config::load(temp_file.path()).expect("Failed to load config from temporary file");
        assert_eq!(config, loaded_config);
    }

    #[test]
    fn test_config_save_then_load() {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("sqlsegment.toml");

        let mut config = Config::default();
        config.log.level = "debug".to_string();
        config.save(&path).expect("Failed to save config");

        let loaded = Config::load(&path).expect("Failed to load saved config");
        assert_eq!(loaded.log.level, "debug");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_toml_str("[extract]\ndatabase_type = \"postgresql\"\n")
            .expect("Partial config should parse");
        assert_eq!(config.extract.database_type, DatabaseType::PostgreSql);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_unknown_database_type_is_rejected() {
        let result = Config::from_toml_str("[extract]\ndatabase_type = \"db2\"\n");
        assert!(matches!(result, Err(ConfigError::Decode(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Config::load("/nonexistent/sqlsegment.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
