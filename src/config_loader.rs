use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::distance::Metric;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub logging: Logging,
    pub search: Search,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Logging {
    pub level: String,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Search {
    pub default_metric: Metric,
    /// Batches with fewer queries than this run on the calling thread.
    pub parallel_threshold: usize,
    pub threads: usize,
}

impl Default for Search {
    fn default() -> Self {
        Self {
            default_metric: Metric::default(),
            parallel_threshold: 64,
            threads: num_cpus::get(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to load config file: {}", e),
            ConfigError::Parse(e) => write!(f, "Failed to parse config file contents: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(contents)?)
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let config_contents = fs::read_to_string(path)?;
    parse_config(&config_contents)
}

/// Loads `path` if given (it must exist); otherwise `config.toml` in the
/// working directory when present, else built-in defaults.
pub fn load_config_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                load_config(default_path)
            } else {
                Ok(Config::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"
            [logging]
            level = "debug"

            [search]
            default_metric = "squared_dist_norm2"
            parallel_threshold = 8
            threads = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.search.default_metric, Metric::SquaredDistNorm2);
        assert_eq!(config.search.parallel_threshold, 8);
        assert_eq!(config.search.threads, 2);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = parse_config("[search]\nthreads = 3\n").unwrap();
        assert_eq!(config.logging, Logging::default());
        assert_eq!(config.search.default_metric, Metric::DistNorm2);
        assert_eq!(config.search.parallel_threshold, 64);
        assert_eq!(config.search.threads, 3);
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_metric_is_a_parse_error() {
        assert!(matches!(
            parse_config("[search]\ndefault_metric = \"dist_cosine\"\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"warn\"").unwrap();
        let config = load_config_or_default(Some(file.path())).unwrap();
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(matches!(
            load_config_or_default(Some(&missing)),
            Err(ConfigError::Io(_))
        ));
    }
}
