// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::StepError;
use crate::traits::{one_output, Outputs, Step};
use crate::types::{Options, Value};

/// Range step - an integer `n` becomes the sequence `start..n`
///
/// The sequence is produced lazily, so large bounds cost nothing until
/// pulled. A bound at or below `start` yields nothing.
#[derive(Debug, Clone, Default)]
pub struct Range {
    start: i64,
}

impl Range {
    pub fn new() -> Self {
        Self { start: 0 }
    }

    pub fn starting_at(start: i64) -> Self {
        Self { start }
    }
}

impl Step for Range {
    fn make<'a>(&'a self, value: Value, _options: &Options) -> Outputs<'a> {
        match value {
            Value::Int(end) => Box::new((self.start..end).map(|i| Ok(Value::Int(i)))),
            other => one_output(Err(StepError::invalid_input(self.name(), "int", &other))),
        }
    }
}
