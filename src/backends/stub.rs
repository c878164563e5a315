// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::StepError;
use crate::observability::messages::step::StubStepInvoked;
use crate::observability::messages::StructuredLog;
use crate::traits::{no_outputs, one_output, Outputs, Step};
use crate::types::{Options, Value};

/// A placeholder step that produces nothing
///
/// Used to sketch the shape of a tree before real steps exist. Executing it
/// is almost always a mistake, so every invocation logs a warning.
#[derive(Debug, Clone, Default)]
pub struct StubStep;

impl StubStep {
    pub fn new() -> Self {
        Self
    }
}

impl Step for StubStep {
    fn make<'a>(&'a self, _value: Value, _options: &Options) -> Outputs<'a> {
        StubStepInvoked { step: self.name() }.log();
        no_outputs()
    }

    fn name(&self) -> &str {
        "Step"
    }
}

/// A step that always fails, for testing failure propagation
#[derive(Debug, Clone)]
pub struct FailingStep {
    name: String,
}

impl FailingStep {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Step for FailingStep {
    fn make<'a>(&'a self, value: Value, _options: &Options) -> Outputs<'a> {
        one_output(Err(StepError::failed(
            &self.name,
            format!("refused input {}", value),
        )))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
