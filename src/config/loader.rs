//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading payroll
//! policy tables from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

use super::types::{PolicyConfig, PolicyMetadata, SalaryPolicy, TaxSlabsConfig};

/// Top-level structure of `policy.yaml`.
#[derive(Debug, Clone, Deserialize)]
struct PolicyFile {
    metadata: PolicyMetadata,
    salary: SalaryPolicy,
}

/// Loads and provides access to the payroll policy tables.
///
/// The `PolicyLoader` reads YAML configuration files from a directory and
/// exposes the resulting [`PolicyConfig`] to the calculators.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── policy.yaml      # Salary ratios, statutory caps, compliance bands
/// └── tax_slabs.yaml   # Tax slab table
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/default").unwrap();
/// println!("Policy: {}", loader.config().metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    config: PolicyConfig,
}

impl PolicyLoader {
    /// Loads policy tables from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the policy directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` on success, or an error if:
    /// - Either required file is missing (`ConfigNotFound`)
    /// - Either file contains invalid YAML (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let policy_file = Self::load_yaml::<PolicyFile>(&policy_path)?;

        let slabs_path = path.join("tax_slabs.yaml");
        let slabs = Self::load_yaml::<TaxSlabsConfig>(&slabs_path)?;

        let config = PolicyConfig::new(policy_file.metadata, policy_file.salary, slabs.slabs);

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

    /// Returns the loaded policy configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Returns the salary policy table.
    pub fn salary(&self) -> &SalaryPolicy {
        self.config.salary()
    }

    /// Finds the tax rate for the given annual taxable income.
    pub fn tax_rate_for(&self, annual_taxable: Decimal) -> Option<Decimal> {
        self.config.slab_for(annual_taxable).map(|s| s.rate)
    }
}
