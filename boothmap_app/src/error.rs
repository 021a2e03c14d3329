// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for configuration and dataset loading.
//!
//! Runtime conditions of the map itself (viewport not ready, booth without a
//! position, booth without an exhibitor, empty search results) are states, not
//! errors, and never show up here.

use std::path::PathBuf;

use boothmap_catalog::CatalogError;

/// Failure to load or validate a [`VenueConfig`](crate::config::VenueConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid TOML for the config schema.
    #[error("config parse error: {0}")]
    Parse(String),

    /// One or more values are out of range.
    #[error("config validation error: {0}")]
    Validation(String),
}

/// Failure to load a booth dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The file could not be read.
    #[error("failed to read dataset {path}: {source}")]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid TOML for the dataset schema.
    #[error("dataset parse error: {0}")]
    Parse(String),

    /// A record has a value the catalog cannot represent.
    #[error("invalid dataset record: {0}")]
    InvalidRecord(String),

    /// Records are inconsistent with each other.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Umbrella error for hosts that load both config and dataset.
#[derive(Debug, thiserror::Error)]
pub enum VenueError {
    /// Configuration failure.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Dataset failure.
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// Any other I/O failure, such as writing rendered output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
