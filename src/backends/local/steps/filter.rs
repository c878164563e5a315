// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::{CompositionError, StepError};
use crate::traits::{no_outputs, one_output, Outputs, Step};
use crate::types::{Options, Value};

/// DivisibleBy step - passes an integer through when the divisor divides it
#[derive(Debug, Clone)]
pub struct DivisibleBy {
    divisor: i64,
}

impl DivisibleBy {
    pub fn new(divisor: i64) -> Result<Self, CompositionError> {
        if divisor == 0 {
            return Err(CompositionError::InvalidArgument {
                step: "divisible_by".to_string(),
                argument: "divisor".to_string(),
                reason: "must be non-zero".to_string(),
            });
        }
        Ok(Self { divisor })
    }
}

impl Step for DivisibleBy {
    fn make<'a>(&'a self, value: Value, _options: &Options) -> Outputs<'a> {
        match value {
            // checked_rem guards i64::MIN % -1
            Value::Int(n) if n.checked_rem(self.divisor).unwrap_or(0) == 0 => one_output(Ok(value)),
            Value::Int(_) => no_outputs(),
            other => one_output(Err(StepError::invalid_input(self.name(), "int", &other))),
        }
    }
}

/// OneOf step - passes its input through when it equals one of the accepted values
///
/// Inputs of any type are accepted; a value outside the set yields nothing.
#[derive(Debug, Clone)]
pub struct OneOf {
    accepted: Vec<Value>,
}

impl OneOf {
    pub fn new(accepted: Vec<Value>) -> Self {
        Self { accepted }
    }
}

impl Step for OneOf {
    fn make<'a>(&'a self, value: Value, _options: &Options) -> Outputs<'a> {
        if self.accepted.contains(&value) {
            one_output(Ok(value))
        } else {
            no_outputs()
        }
    }
}
