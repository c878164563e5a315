// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::engine::Node;
use crate::errors::CompositionError;
use crate::traits::{one_output, Outputs, Step};
use crate::types::{Options, Value};

/// Sequential composition: every output of step *i* is fed into step *i + 1*.
///
/// Each step after the first receives the whole upstream sequence through
/// `make_all`, so a step that batches or parallelises its inputs gets the
/// chance to do so. An empty intermediate sequence simply contributes
/// nothing downstream.
#[derive(Clone)]
pub struct StepChain {
    pub(crate) steps: Vec<Node>,
}

impl StepChain {
    pub fn new(steps: Vec<Node>) -> Result<Self, CompositionError> {
        if steps.is_empty() {
            return Err(CompositionError::EmptyComposite { kind: "StepChain" });
        }
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Node] {
        &self.steps
    }
}

impl Step for StepChain {
    fn make<'a>(&'a self, value: Value, options: &Options) -> Outputs<'a> {
        self.steps
            .iter()
            .fold(one_output(Ok(value)), |values, step| step.make_all(values, options))
    }

    fn name(&self) -> &str {
        "StepChain"
    }
}
