// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use super::steps::*;
use crate::backends::stub::StubStep;
use crate::config::LeafConfig;
use crate::errors::CompositionError;
use crate::traits::Step;
use crate::types::Value;

/// Factory for creating built-in (in-process) leaf steps
pub struct LocalStepFactory;

impl LocalStepFactory {
    /// Create a step instance from configuration
    ///
    /// The `step` field selects the built-in, `args` supplies its arguments:
    /// - "identity" -> Identity
    /// - "range" -> Range (optional `start`)
    /// - "multiply" -> Multiply (`factor`)
    /// - "add" -> Add (`amount`)
    /// - "divisible_by" -> DivisibleBy (`divisor`, non-zero)
    /// - "one_of" -> OneOf (`values`, a list)
    /// - "constant" -> Constant (`value`, optional `times`)
    /// - "chars" -> Chars
    /// - "split" -> Split (optional `separator`, whitespace when absent)
    /// - "items" -> Items
    /// - "stub" -> StubStep
    pub fn create_step(config: &LeafConfig) -> Result<Arc<dyn Step>, CompositionError> {
        let args = Args { config };

        match config.step.as_str() {
            "identity" => Ok(Arc::new(Identity::new())),

            // Sequence producers
            "range" => Ok(Arc::new(Range::starting_at(args.optional_int("start")?.unwrap_or(0)))),
            "chars" => Ok(Arc::new(Chars::new())),
            "split" => Ok(Arc::new(Split::new(
                args.optional_str("separator")?.unwrap_or_default(),
            ))),
            "items" => Ok(Arc::new(Items::new())),
            "constant" => {
                let value = args.required("value")?.clone();
                let times = match args.optional_int("times")? {
                    Some(times) => usize::try_from(times)
                        .map_err(|_| args.invalid("times", "must not be negative"))?,
                    None => 1,
                };
                Ok(Arc::new(Constant::repeated(value, times)))
            }

            // Arithmetic
            "multiply" => Ok(Arc::new(Multiply::new(args.required_int("factor")?))),
            "add" => Ok(Arc::new(Add::new(args.required_int("amount")?))),

            // Filters
            "divisible_by" => Ok(Arc::new(DivisibleBy::new(args.required_int("divisor")?)?)),
            "one_of" => match args.required("values")? {
                Value::List(values) | Value::Tuple(values) => Ok(Arc::new(OneOf::new(values.clone()))),
                Value::Set(values) => Ok(Arc::new(OneOf::new(values.iter().cloned().collect()))),
                _ => Err(args.invalid("values", "expected a list")),
            },

            "stub" => Ok(Arc::new(StubStep::new())),

            _ => Err(CompositionError::UnknownStep(config.step.clone())),
        }
    }

    /// List all available built-in step names
    pub fn list_available_implementations() -> Vec<&'static str> {
        vec![
            "identity",
            "range",
            "chars",
            "split",
            "items",
            "constant",
            "multiply",
            "add",
            "divisible_by",
            "one_of",
            "stub",
        ]
    }

    /// Check if a built-in step name is available
    pub fn is_implementation_available(step: &str) -> bool {
        Self::list_available_implementations().contains(&step)
    }
}

struct Args<'a> {
    config: &'a LeafConfig,
}

impl<'a> Args<'a> {
    fn invalid(&self, argument: &str, reason: &str) -> CompositionError {
        CompositionError::InvalidArgument {
            step: self.config.step.clone(),
            argument: argument.to_string(),
            reason: reason.to_string(),
        }
    }

    fn required(&self, argument: &str) -> Result<&'a Value, CompositionError> {
        self.config
            .args
            .get(argument)
            .ok_or_else(|| CompositionError::MissingArgument {
                step: self.config.step.clone(),
                argument: argument.to_string(),
            })
    }

    fn required_int(&self, argument: &str) -> Result<i64, CompositionError> {
        let value = self.required(argument)?;
        value
            .as_int()
            .ok_or_else(|| self.invalid(argument, &format!("expected int, got {}", value.type_name())))
    }

    fn optional_int(&self, argument: &str) -> Result<Option<i64>, CompositionError> {
        match self.config.args.get(argument) {
            None => Ok(None),
            Some(value) => value.as_int().map(Some).ok_or_else(|| {
                self.invalid(argument, &format!("expected int, got {}", value.type_name()))
            }),
        }
    }

    fn optional_str(&self, argument: &str) -> Result<Option<String>, CompositionError> {
        match self.config.args.get(argument) {
            None => Ok(None),
            Some(value) => value.as_str().map(|s| Some(s.to_string())).ok_or_else(|| {
                self.invalid(argument, &format!("expected str, got {}", value.type_name()))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Options;

    fn run(config: &LeafConfig, input: Value) -> Vec<Value> {
        let step = LocalStepFactory::create_step(config)
            .unwrap_or_else(|e| panic!("Failed to create step {}: {}", config.step, e));
        step.make(input, &Options::new())
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn test_create_sequence_steps() {
        let test_cases = vec![
            (LeafConfig::new("range"), Value::from(3), vec![0, 1, 2]),
            (
                LeafConfig::new("range").with_arg("start", Value::from(1)),
                Value::from(3),
                vec![1, 2],
            ),
            (
                LeafConfig::new("multiply").with_arg("factor", Value::from(5)),
                Value::from(3),
                vec![15],
            ),
            (
                LeafConfig::new("add").with_arg("amount", Value::from(-1)),
                Value::from(3),
                vec![2],
            ),
            (
                LeafConfig::new("divisible_by").with_arg("divisor", Value::from(2)),
                Value::from(3),
                vec![],
            ),
        ];

        for (config, input, expected) in test_cases {
            let expected: Vec<Value> = expected.into_iter().map(Value::from).collect();
            assert_eq!(run(&config, input), expected, "Failed for step: {}", config.step);
        }
    }

    #[test]
    fn test_create_text_steps() {
        assert_eq!(
            run(&LeafConfig::new("chars"), Value::from("ab")),
            vec![Value::from("a"), Value::from("b")]
        );
        assert_eq!(
            run(
                &LeafConfig::new("split").with_arg("separator", Value::from("-")),
                Value::from("x-y")
            ),
            vec![Value::from("x"), Value::from("y")]
        );
        assert_eq!(
            run(&LeafConfig::new("split"), Value::from("x y")),
            vec![Value::from("x"), Value::from("y")]
        );
    }

    #[test]
    fn test_create_constant_and_one_of() {
        let constant = LeafConfig::new("constant")
            .with_arg("value", Value::from("z"))
            .with_arg("times", Value::from(2));
        assert_eq!(run(&constant, Value::Null), vec![Value::from("z"); 2]);

        let one_of = LeafConfig::new("one_of")
            .with_arg("values", Value::list([Value::from("a"), Value::from("b")]));
        assert_eq!(run(&one_of, Value::from("b")), vec![Value::from("b")]);
        assert!(run(&one_of, Value::from("c")).is_empty());
    }

    #[test]
    fn test_stub_and_identity() {
        assert!(run(&LeafConfig::new("stub"), Value::from(1)).is_empty());
        assert_eq!(run(&LeafConfig::new("identity"), Value::from(1)), vec![Value::from(1)]);
    }

    #[test]
    fn test_create_step_unknown() {
        let result = LocalStepFactory::create_step(&LeafConfig::new("teleport"));
        assert_eq!(result.err(), Some(CompositionError::UnknownStep("teleport".to_string())));
    }

    #[test]
    fn test_create_step_argument_errors() {
        let missing = LocalStepFactory::create_step(&LeafConfig::new("multiply")).err();
        assert_eq!(
            missing,
            Some(CompositionError::MissingArgument {
                step: "multiply".to_string(),
                argument: "factor".to_string(),
            })
        );

        let wrong_type = LeafConfig::new("add").with_arg("amount", Value::from("one"));
        assert!(matches!(
            LocalStepFactory::create_step(&wrong_type).err(),
            Some(CompositionError::InvalidArgument { argument, .. }) if argument == "amount"
        ));

        let zero = LeafConfig::new("divisible_by").with_arg("divisor", Value::from(0));
        assert!(LocalStepFactory::create_step(&zero).is_err());

        let negative = LeafConfig::new("constant")
            .with_arg("value", Value::from(1))
            .with_arg("times", Value::from(-1));
        assert!(LocalStepFactory::create_step(&negative).is_err());
    }

    #[test]
    fn test_list_available_implementations() {
        let implementations = LocalStepFactory::list_available_implementations();
        assert!(implementations.contains(&"range"));
        assert!(implementations.contains(&"stub"));

        for name in implementations {
            assert!(LocalStepFactory::is_implementation_available(name));
        }
        assert!(!LocalStepFactory::is_implementation_available("nonexistent_step"));
    }
}
