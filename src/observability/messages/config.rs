// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline configuration loading.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Configuration file parsed.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use stepwise::observability::messages::config::ConfigLoaded;
///
/// let msg = ConfigLoaded {
///     path: "pipelines/numbers.yaml",
///     format: "yaml",
///     pipeline: "numbers",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ConfigLoaded<'a> {
    pub path: &'a str,
    pub format: &'a str,
    pub pipeline: &'a str,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded {} pipeline configuration '{}' from {}",
            self.format, self.pipeline, self.path
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            format = self.format,
            pipeline = self.pipeline,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "config_loaded",
            span_name = name,
            path = self.path,
            format = self.format,
            pipeline = self.pipeline,
        )
    }
}

/// Configuration file could not be read, parsed or turned into a step tree.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use stepwise::observability::messages::config::ConfigRejected;
///
/// let error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
/// let msg = ConfigRejected {
///     path: "pipelines/missing.yaml",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ConfigRejected<'a> {
    pub path: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ConfigRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Rejected pipeline configuration {}: {}", self.path, self.error)
    }
}

impl StructuredLog for ConfigRejected<'_> {
    fn log(&self) {
        tracing::error!(
            path = self.path,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "config_rejected",
            span_name = name,
            path = self.path,
            error = %self.error,
        )
    }
}
