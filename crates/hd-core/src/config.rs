//! Configuration types and parsing for hivedump.yml

use crate::error::{CoreError, CoreResult};
use crate::options::DumpOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration from hivedump.yml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How to invoke the warehouse query tool
    #[serde(default)]
    pub hive: HiveConfig,

    /// Maximum number of concurrent fetches per database
    #[serde(default = "default_jobs")]
    pub jobs: usize,

    /// Fail on `CREATE` statements that match no recognized header
    #[serde(default)]
    pub strict: bool,

    /// Default dump options, CLI flags add to these
    #[serde(default)]
    pub options: DumpOptions,
}

/// Query tool invocation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HiveConfig {
    /// Executable name or path
    #[serde(default = "default_hive_command")]
    pub command: String,

    /// Extra arguments placed before the query (e.g. `--hiveconf k=v`)
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for HiveConfig {
    fn default() -> Self {
        Self {
            command: default_hive_command(),
            args: Vec::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hive: HiveConfig::default(),
            jobs: default_jobs(),
            strict: false,
            options: DumpOptions::default(),
        }
    }
}

fn default_hive_command() -> String {
    "hive".to_string()
}

fn default_jobs() -> usize {
    4
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `hivedump.yml` or `hivedump.yaml` from a directory, falling back
    /// to defaults when neither exists.
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let yml_path = dir.join("hivedump.yml");
        let yaml_path = dir.join("hivedump.yaml");

        if yml_path.exists() {
            Self::load(&yml_path)
        } else if yaml_path.exists() {
            Self::load(&yaml_path)
        } else {
            log::debug!("No hivedump.yml in {}, using defaults", dir.display());
            Ok(Self::default())
        }
    }

    /// Validate value ranges
    pub fn validate(&self) -> CoreResult<()> {
        if self.jobs == 0 {
            return Err(CoreError::ConfigInvalid {
                message: "jobs must be at least 1".to_string(),
            });
        }
        if self.hive.command.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "hive.command must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
