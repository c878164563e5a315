// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

use super::CompositionError;

/// Errors raised while loading a pipeline document.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The document could not be read.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML or does not match the schema.
    #[error("invalid YAML pipeline: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document is not valid TOML or does not match the schema.
    #[error("invalid TOML pipeline: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file extension names no supported format.
    #[error("unsupported pipeline format '{0}' (expected .yaml, .yml or .toml)")]
    UnsupportedFormat(String),

    /// The document parsed but describes an invalid step tree.
    #[error("invalid pipeline: {0}")]
    Composition(#[from] CompositionError),
}
