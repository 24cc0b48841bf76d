//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{LimitsConfig, MinimumWage, RegimeMetadata, StatutoryConfig};

/// Loads and provides access to statutory configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/clt/
/// ├── regime.yaml     # Legal regime metadata
/// ├── limits.yaml     # Validation ceilings and floors
/// └── wages/
///     └── 2024-01-01.yaml  # Minimum wage effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/clt").unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let wage = loader.config().minimum_wage_on(date);
/// println!("Minimum wage: {:?}", wage);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StatutoryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/clt")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let regime_path = path.join("regime.yaml");
        let metadata = Self::load_yaml::<RegimeMetadata>(&regime_path)?;

        let limits_path = path.join("limits.yaml");
        let limits_config = Self::load_yaml::<LimitsConfig>(&limits_path)?;

        let wages_dir = path.join("wages");
        let wages = Self::load_wages(&wages_dir)?;

        let config = StatutoryConfig::new(metadata, limits_config.limits, wages);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all minimum wage files from the wages directory.
    fn load_wages(wages_dir: &Path) -> EngineResult<Vec<MinimumWage>> {
        let wages_dir_str = wages_dir.display().to_string();

        if !wages_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: wages_dir_str,
            });
        }

        let entries = fs::read_dir(wages_dir).map_err(|_| EngineError::ConfigNotFound {
            path: wages_dir_str.clone(),
        })?;

        let mut wages = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: wages_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let wage = Self::load_yaml::<MinimumWage>(&path)?;
                wages.push(wage);
            }
        }

        if wages.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no wage files found)", wages_dir_str),
            });
        }

        Ok(wages)
    }

    /// Returns the underlying statutory configuration.
    pub fn config(&self) -> &StatutoryConfig {
        &self.config
    }
}
