// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::iter;

use crate::engine::Node;
use crate::errors::CompositionError;
use crate::traits::{no_outputs, Outputs, Step};
use crate::types::{Options, Value};

/// Ordered fallback: yields the full sequence of the first step that produces anything.
///
/// Steps after the selected one are never invoked. Selection happens when
/// the consumer first pulls, not when `make` is called.
#[derive(Clone)]
pub struct OrChain {
    pub(crate) steps: Vec<Node>,
}

impl OrChain {
    pub fn new(steps: Vec<Node>) -> Result<Self, CompositionError> {
        if steps.is_empty() {
            return Err(CompositionError::EmptyComposite { kind: "OrChain" });
        }
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Node] {
        &self.steps
    }

    fn select<'a>(&'a self, value: Value, options: &Options) -> Outputs<'a> {
        for step in &self.steps {
            let mut outputs = step.make(value.clone(), options);
            // an Err item counts as output, so failures are not masked by fallbacks
            if let Some(first) = outputs.next() {
                return Box::new(iter::once(first).chain(outputs));
            }
        }
        no_outputs()
    }
}

impl Step for OrChain {
    fn make<'a>(&'a self, value: Value, options: &Options) -> Outputs<'a> {
        let options = options.clone();
        Box::new(iter::once_with(move || self.select(value, &options)).flatten())
    }

    fn name(&self) -> &str {
        "OrChain"
    }
}
