// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for events raised by individual steps.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// The placeholder step was executed.
///
/// # Log Level
/// `warn!` - Placeholder reached at runtime, produces nothing
///
/// # Example
/// ```
/// use stepwise::observability::messages::step::StubStepInvoked;
///
/// let msg = StubStepInvoked { step: "Step" };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct StubStepInvoked<'a> {
    pub step: &'a str,
}

impl Display for StubStepInvoked<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Placeholder step '{}' invoked; it produces no values", self.step)
    }
}

impl StructuredLog for StubStepInvoked<'_> {
    fn log(&self) {
        tracing::warn!(step = self.step, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("stub_step", span_name = name, step = self.step)
    }
}

/// A parallel step finished one batch of inputs.
///
/// # Log Level
/// `debug!` - Per-batch detail
///
/// # Example
/// ```
/// use stepwise::observability::messages::step::ParallelBatchCompleted;
/// use std::time::Duration;
///
/// let msg = ParallelBatchCompleted {
///     step: "Parallel[Multiply]",
///     inputs: 64,
///     outputs: 64,
///     duration: Duration::from_micros(420),
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ParallelBatchCompleted<'a> {
    pub step: &'a str,
    pub inputs: usize,
    pub outputs: usize,
    pub duration: Duration,
}

impl Display for ParallelBatchCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} processed a batch of {} inputs into {} outputs in {:?}",
            self.step, self.inputs, self.outputs, self.duration
        )
    }
}

impl StructuredLog for ParallelBatchCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            step = self.step,
            inputs = self.inputs,
            outputs = self.outputs,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "parallel_batch",
            span_name = name,
            step = self.step,
            inputs = self.inputs,
            outputs = self.outputs,
        )
    }
}
