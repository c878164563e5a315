// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline construction and run lifecycle.
//!
//! A run starts when the first output is requested and ends when the output
//! sequence is exhausted or yields its first failure.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Step tree built from configuration.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use stepwise::observability::messages::pipeline::PipelineBuilt;
///
/// let msg = PipelineBuilt {
///     pipeline: "numbers",
///     root: "StepChain",
///     size: 4,
///     depth: 2,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct PipelineBuilt<'a> {
    pub pipeline: &'a str,
    pub root: &'a str,
    pub size: usize,
    pub depth: usize,
}

impl Display for PipelineBuilt<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Built pipeline '{}': {} root, {} steps, depth {}",
            self.pipeline, self.root, self.size, self.depth
        )
    }
}

impl StructuredLog for PipelineBuilt<'_> {
    fn log(&self) {
        tracing::info!(
            pipeline = self.pipeline,
            root = self.root,
            size = self.size,
            depth = self.depth,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline_built",
            span_name = name,
            pipeline = self.pipeline,
            root = self.root,
            size = self.size,
            depth = self.depth,
        )
    }
}

/// Pipeline run started.
///
/// # Log Level
/// `info!` - Important operational event
pub struct PipelineRunStarted<'a> {
    pub pipeline: &'a str,
    pub input: &'a str,
}

impl Display for PipelineRunStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Running pipeline '{}' on input {}", self.pipeline, self.input)
    }
}

impl StructuredLog for PipelineRunStarted<'_> {
    fn log(&self) {
        tracing::info!(pipeline = self.pipeline, input = self.input, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline_run",
            span_name = name,
            pipeline = self.pipeline,
            input = self.input,
        )
    }
}

/// Pipeline run exhausted its output sequence.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use stepwise::observability::messages::pipeline::PipelineRunCompleted;
/// use std::time::Duration;
///
/// let msg = PipelineRunCompleted {
///     pipeline: "numbers",
///     outputs: 5,
///     duration: Duration::from_millis(3),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct PipelineRunCompleted<'a> {
    pub pipeline: &'a str,
    pub outputs: usize,
    pub duration: Duration,
}

impl Display for PipelineRunCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline '{}' completed: {} outputs in {:?}",
            self.pipeline, self.outputs, self.duration
        )
    }
}

impl StructuredLog for PipelineRunCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            pipeline = self.pipeline,
            outputs = self.outputs,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline_run_completed",
            span_name = name,
            pipeline = self.pipeline,
            outputs = self.outputs,
            duration = ?self.duration,
        )
    }
}

/// Pipeline run yielded a failure.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct PipelineRunFailed<'a> {
    pub pipeline: &'a str,
    pub outputs: usize,
    pub error: &'a dyn std::error::Error,
}

impl Display for PipelineRunFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline '{}' failed after {} outputs: {}",
            self.pipeline, self.outputs, self.error
        )
    }
}

impl StructuredLog for PipelineRunFailed<'_> {
    fn log(&self) {
        tracing::error!(
            pipeline = self.pipeline,
            outputs = self.outputs,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "pipeline_run_failed",
            span_name = name,
            pipeline = self.pipeline,
            outputs = self.outputs,
            error = %self.error,
        )
    }
}
