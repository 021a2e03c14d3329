// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! TOML config loading.

use std::path::Path;

use tracing::{debug, info, warn};

use super::schema::VenueConfig;
use super::validation;
use crate::error::ConfigError;

/// Parses a config from TOML text.
///
/// Missing sections and fields take their defaults. Validation failures are
/// logged and the parsed config is returned as-is; call
/// [`VenueConfig::validate`] for strict checking.
pub fn load_from_str(content: &str) -> Result<VenueConfig, ConfigError> {
    let config: VenueConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    if let Err(e) = validation::validate(&config) {
        warn!("{e}; using parsed config with potentially invalid values");
    }
    Ok(config)
}

/// Loads a config from a TOML file. See [`load_from_str`].
pub fn load_from_path(path: &Path) -> Result<VenueConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = load_from_str(&content)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Loads `path` when given, otherwise returns the defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<VenueConfig, ConfigError> {
    match path {
        Some(path) => load_from_path(path),
        None => {
            debug!("no config file given, using defaults");
            Ok(VenueConfig::default())
        }
    }
}

impl VenueConfig {
    /// Strict validation of every range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate(self)
    }
}
