// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::StepResult;
use crate::traits::{one_output, Outputs, Step};
use crate::types::{Options, Value};

/// Adapts a closure into a named leaf step.
///
/// The closure runs once per input when `make` is called; its returned
/// collection or iterator is then drained lazily. An `Err` return becomes
/// the single output item.
pub struct FnStep<F> {
    name: String,
    func: F,
}

impl<F, I> FnStep<F>
where
    F: Fn(Value, &Options) -> StepResult<I> + Send + Sync,
    I: IntoIterator<Item = Value>,
    I::IntoIter: 'static,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F, I> Step for FnStep<F>
where
    F: Fn(Value, &Options) -> StepResult<I> + Send + Sync,
    I: IntoIterator<Item = Value>,
    I::IntoIter: 'static,
{
    fn make<'a>(&'a self, value: Value, options: &Options) -> Outputs<'a> {
        match (self.func)(value, options) {
            Ok(values) => Box::new(values.into_iter().map(Ok)),
            Err(error) => one_output(Err(error)),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StepError;

    #[test]
    fn test_closure_outputs_and_name() {
        let step = FnStep::new("twice", |value: Value, _options: &Options| Ok(vec![value.clone(), value]));
        let outputs: Vec<Value> = step
            .make(Value::from(1), &Options::new())
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(outputs, vec![Value::from(1), Value::from(1)]);
        assert_eq!(step.name(), "twice");
    }

    #[test]
    fn test_closure_reads_options() {
        let step = FnStep::new("scaled", |value: Value, options: &Options| {
            let factor = options.get("factor").and_then(Value::as_int).unwrap_or(1);
            Ok(value.as_int().map(|n| Value::from(n * factor)))
        });
        let options = Options::new().with("factor", Value::from(3));
        let outputs: Vec<Value> = step
            .make(Value::from(2), &options)
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(outputs, vec![Value::from(6)]);
    }

    #[test]
    fn test_closure_error_becomes_single_item() {
        let step = FnStep::new("grumpy", |_value: Value, _options: &Options| -> StepResult<Vec<Value>> {
            Err(anyhow::anyhow!("not today").into())
        });
        let outputs: Vec<_> = step.make(Value::Null, &Options::new()).collect();

        assert_eq!(outputs.len(), 1);
        assert!(matches!(&outputs[0], Err(StepError::Other(e)) if e.to_string() == "not today"));
    }
}
