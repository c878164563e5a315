// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::StepError;
use crate::traits::{one_output, Outputs, Step};
use crate::types::{Options, Value};

/// Items step - a container becomes the sequence of its elements
///
/// Lists and tuples keep their order, sets yield in sorted order, dicts
/// yield `(key, value)` tuples sorted by key, and strings yield their
/// characters.
#[derive(Debug, Clone, Default)]
pub struct Items;

impl Items {
    pub fn new() -> Self {
        Self
    }
}

impl Step for Items {
    fn make<'a>(&'a self, value: Value, _options: &Options) -> Outputs<'a> {
        let items: Vec<Value> = match value {
            Value::List(items) | Value::Tuple(items) => items,
            Value::Set(items) => items.into_iter().collect(),
            Value::Dict(entries) => entries
                .into_iter()
                .map(|(key, value)| Value::tuple([Value::Str(key), value]))
                .collect(),
            Value::Str(text) => text.chars().map(Value::from).collect(),
            other => {
                return one_output(Err(StepError::invalid_input(self.name(), "container", &other)))
            }
        };
        Box::new(items.into_iter().map(Ok))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: Value) -> Vec<Value> {
        Items::new()
            .make(input, &Options::new())
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn test_sequences_keep_order() {
        let items = vec![Value::from(3), Value::from(1)];
        assert_eq!(run(Value::list(items.clone())), items);
        assert_eq!(run(Value::tuple(items.clone())), items);
    }

    #[test]
    fn test_dict_yields_pairs() {
        let dict = Value::dict([("b", Value::from(2)), ("a", Value::from(1))]);
        assert_eq!(
            run(dict),
            vec![
                Value::tuple([Value::from("a"), Value::from(1)]),
                Value::tuple([Value::from("b"), Value::from(2)]),
            ]
        );
    }

    #[test]
    fn test_scalar_is_rejected() {
        let outputs: Vec<_> = Items::new().make(Value::from(5), &Options::new()).collect();
        assert!(matches!(
            &outputs[..],
            [Err(StepError::InvalidInput { expected: "container", .. })]
        ));
    }
}
