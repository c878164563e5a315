// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::StepError;
use crate::traits::{one_output, Outputs, Step};
use crate::types::{Options, Value};

fn checked<F>(step: &str, value: Value, op: F) -> Outputs<'static>
where
    F: FnOnce(i64) -> Option<i64>,
{
    let result = match value {
        Value::Int(n) => op(n).map(Value::Int).ok_or_else(|| StepError::Overflow {
            step: step.to_string(),
            input: n,
        }),
        other => Err(StepError::invalid_input(step, "int", &other)),
    };
    one_output(result)
}

/// Multiply step - multiplies an integer by a fixed factor
#[derive(Debug, Clone)]
pub struct Multiply {
    factor: i64,
}

impl Multiply {
    pub fn new(factor: i64) -> Self {
        Self { factor }
    }
}

impl Step for Multiply {
    fn make<'a>(&'a self, value: Value, _options: &Options) -> Outputs<'a> {
        checked(self.name(), value, |n| n.checked_mul(self.factor))
    }
}

/// Add step - adds a fixed amount to an integer
#[derive(Debug, Clone)]
pub struct Add {
    amount: i64,
}

impl Add {
    pub fn new(amount: i64) -> Self {
        Self { amount }
    }
}

impl Step for Add {
    fn make<'a>(&'a self, value: Value, _options: &Options) -> Outputs<'a> {
        checked(self.name(), value, |n| n.checked_add(self.amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one(step: &dyn Step, input: Value) -> Result<Value, StepError> {
        let mut outputs = step.make(input, &Options::new());
        let first = outputs.next().unwrap();
        assert!(outputs.next().is_none());
        first
    }

    #[test]
    fn test_multiply() {
        assert_eq!(one(&Multiply::new(10), Value::from(4)).unwrap(), Value::from(40));
        assert_eq!(one(&Multiply::new(-2), Value::from(3)).unwrap(), Value::from(-6));
    }

    #[test]
    fn test_add() {
        assert_eq!(one(&Add::new(1), Value::from(4)).unwrap(), Value::from(5));
    }

    #[test]
    fn test_overflow_is_reported() {
        assert!(matches!(
            one(&Multiply::new(2), Value::from(i64::MAX)),
            Err(StepError::Overflow { input: i64::MAX, .. })
        ));
        assert!(matches!(
            one(&Add::new(1), Value::from(i64::MAX)),
            Err(StepError::Overflow { .. })
        ));
    }

    #[test]
    fn test_wrong_input_type() {
        assert!(matches!(
            one(&Add::new(1), Value::from(true)),
            Err(StepError::InvalidInput { expected: "int", .. })
        ));
    }
}
