// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::engine::Node;
use crate::traits::{Outputs, Step};
use crate::types::{Options, Value};

/// An isolated sub-tree.
///
/// Execution is forwarded to the wrapped step unchanged. The wrapper only
/// keeps composition operators from flattening the sub-tree into an
/// enclosing chain or or-chain.
#[derive(Clone)]
pub struct UnionStep {
    pub(crate) step: Box<Node>,
}

impl UnionStep {
    pub fn new(step: impl Into<Node>) -> Self {
        Self {
            step: Box::new(step.into()),
        }
    }

    pub fn step(&self) -> &Node {
        &self.step
    }
}

impl Step for UnionStep {
    fn make<'a>(&'a self, value: Value, options: &Options) -> Outputs<'a> {
        self.step.make(value, options)
    }

    fn make_all<'a>(&'a self, values: Outputs<'a>, options: &Options) -> Outputs<'a> {
        self.step.make_all(values, options)
    }

    fn name(&self) -> &str {
        "UnionStep"
    }
}
