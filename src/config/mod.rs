//! Configuration loading and management for the CLT Payroll Engine.
//!
//! Legal constants change per fiscal year (the minimum wage above all), so
//! they are loaded from YAML files into a [`StatutoryConfig`] that callers
//! inject into the validator, rather than living as literals in the source.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/clt").unwrap();
//! println!("Loaded regime: {}", config.config().metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LimitsConfig, MinimumWage, RegimeMetadata, StatutoryConfig, ValidationLimits};
