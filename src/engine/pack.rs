// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structural packers.
//!
//! Every child of a packer receives the same input value. At most one value
//! is taken from each child (its first output); a child producing nothing
//! leaves its slot missing. The packers differ in how they treat missing
//! slots:
//!
//! * `TupleStep` emits only when every slot is present (all or nothing)
//! * `ListStep` and `SetStep` keep the present values in declaration order
//! * `DictStep` keeps the entries whose step produced a value
//!
//! List, set and dict packers emit nothing when every slot is missing.
//! Children are asked in declaration order; the first failure taken from a
//! child is emitted instead of a container and later children are skipped.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::iter;

use crate::engine::Node;
use crate::errors::{CompositionError, StepResult};
use crate::traits::{Outputs, Step};
use crate::types::{Options, Value};

fn first_outputs<'a, I>(steps: I, value: &Value, options: &Options) -> StepResult<Vec<Option<Value>>>
where
    I: IntoIterator<Item = &'a Node>,
{
    steps
        .into_iter()
        .map(|step| step.make(value.clone(), options).next().transpose())
        .collect()
}

fn require_steps<T>(steps: &[T], kind: &'static str) -> Result<(), CompositionError> {
    if steps.is_empty() {
        return Err(CompositionError::EmptyComposite { kind });
    }
    Ok(())
}

/// Defers packing until the consumer pulls.
fn deferred<'a, F>(pack: F) -> Outputs<'a>
where
    F: FnOnce() -> Option<StepResult<Value>> + 'a,
{
    Box::new(iter::once_with(pack).flatten())
}

/// All-or-nothing positional packing.
#[derive(Clone)]
pub struct TupleStep {
    pub(crate) steps: Vec<Node>,
}

impl TupleStep {
    pub fn new(steps: Vec<Node>) -> Result<Self, CompositionError> {
        require_steps(&steps, "TupleStep")?;
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Node] {
        &self.steps
    }

    fn pack(&self, value: Value, options: &Options) -> Option<StepResult<Value>> {
        match first_outputs(&self.steps, &value, options) {
            Ok(slots) => slots
                .into_iter()
                .collect::<Option<Vec<Value>>>()
                .map(|items| Ok(Value::Tuple(items))),
            Err(error) => Some(Err(error)),
        }
    }
}

impl Step for TupleStep {
    fn make<'a>(&'a self, value: Value, options: &Options) -> Outputs<'a> {
        let options = options.clone();
        deferred(move || self.pack(value, &options))
    }

    fn name(&self) -> &str {
        "TupleStep"
    }
}

/// Packs the present values into a list.
#[derive(Clone)]
pub struct ListStep {
    pub(crate) steps: Vec<Node>,
}

impl ListStep {
    pub fn new(steps: Vec<Node>) -> Result<Self, CompositionError> {
        require_steps(&steps, "ListStep")?;
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Node] {
        &self.steps
    }

    fn pack(&self, value: Value, options: &Options) -> Option<StepResult<Value>> {
        match first_outputs(&self.steps, &value, options) {
            Ok(slots) => {
                let items: Vec<Value> = slots.into_iter().flatten().collect();
                (!items.is_empty()).then(|| Ok(Value::List(items)))
            }
            Err(error) => Some(Err(error)),
        }
    }
}

impl Step for ListStep {
    fn make<'a>(&'a self, value: Value, options: &Options) -> Outputs<'a> {
        let options = options.clone();
        deferred(move || self.pack(value, &options))
    }

    fn name(&self) -> &str {
        "ListStep"
    }
}

/// Packs the present values into a set; equal values collapse.
#[derive(Clone)]
pub struct SetStep {
    pub(crate) steps: Vec<Node>,
}

impl SetStep {
    pub fn new(steps: Vec<Node>) -> Result<Self, CompositionError> {
        require_steps(&steps, "SetStep")?;
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Node] {
        &self.steps
    }

    fn pack(&self, value: Value, options: &Options) -> Option<StepResult<Value>> {
        match first_outputs(&self.steps, &value, options) {
            Ok(slots) => {
                let items: BTreeSet<Value> = slots.into_iter().flatten().collect();
                (!items.is_empty()).then(|| Ok(Value::Set(items)))
            }
            Err(error) => Some(Err(error)),
        }
    }
}

impl Step for SetStep {
    fn make<'a>(&'a self, value: Value, options: &Options) -> Outputs<'a> {
        let options = options.clone();
        deferred(move || self.pack(value, &options))
    }

    fn name(&self) -> &str {
        "SetStep"
    }
}

/// Packs the present values into a dict under their declared keys.
///
/// Children run in declaration order, but the packed `Value::Dict` is a
/// `BTreeMap`, so its entries iterate and print sorted by key.
#[derive(Clone)]
pub struct DictStep {
    pub(crate) steps: Vec<(String, Node)>,
}

impl DictStep {
    pub fn new(steps: Vec<(String, Node)>) -> Result<Self, CompositionError> {
        require_steps(&steps, "DictStep")?;
        let mut seen = HashSet::new();
        for (key, _) in &steps {
            if !seen.insert(key.as_str()) {
                return Err(CompositionError::DuplicateKey(key.clone()));
            }
        }
        Ok(Self { steps })
    }

    /// Keyed children in declaration order.
    pub fn steps(&self) -> &[(String, Node)] {
        &self.steps
    }

    fn pack(&self, value: Value, options: &Options) -> Option<StepResult<Value>> {
        let slots = first_outputs(self.steps.iter().map(|(_, step)| step), &value, options);
        match slots {
            Ok(slots) => {
                let entries: BTreeMap<String, Value> = self
                    .steps
                    .iter()
                    .zip(slots)
                    .filter_map(|((key, _), slot)| slot.map(|v| (key.clone(), v)))
                    .collect();
                (!entries.is_empty()).then(|| Ok(Value::Dict(entries)))
            }
            Err(error) => Some(Err(error)),
        }
    }
}

impl Step for DictStep {
    fn make<'a>(&'a self, value: Value, options: &Options) -> Outputs<'a> {
        let options = options.clone();
        deferred(move || self.pack(value, &options))
    }

    fn name(&self) -> &str {
        "DictStep"
    }
}

/// A step or a raw container of steps, as written in a bind position.
pub enum RawSteps {
    Step(Node),
    Tuple(Vec<Node>),
    List(Vec<Node>),
    Dict(Vec<(String, Node)>),
    Set(Vec<Node>),
}

impl From<Node> for RawSteps {
    fn from(node: Node) -> Self {
        RawSteps::Step(node)
    }
}

/// Converts a raw container of steps into the matching packer.
pub fn to_step(raw: impl Into<RawSteps>) -> Result<Node, CompositionError> {
    match raw.into() {
        RawSteps::Step(node) => Ok(node),
        RawSteps::Tuple(steps) => TupleStep::new(steps).map(Node::Tuple),
        RawSteps::List(steps) => ListStep::new(steps).map(Node::List),
        RawSteps::Dict(steps) => DictStep::new(steps).map(Node::Dict),
        RawSteps::Set(steps) => SetStep::new(steps).map(Node::Set),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::local::steps::{Constant, OneOf};
    use crate::backends::stub::{FailingStep, StubStep};
    use crate::engine::leaf;
    use crate::errors::StepError;

    fn run(node: &Node) -> Vec<Value> {
        node.make(Value::Null, &Options::new())
            .collect::<Result<_, _>>()
            .unwrap()
    }

    fn three_present() -> Vec<Node> {
        vec![
            leaf(Constant::new(Value::from(1))),
            leaf(Constant::new(Value::from("a"))),
            leaf(Constant::new(Value::from(true))),
        ]
    }

    fn one_missing() -> Vec<Node> {
        vec![
            leaf(Constant::new(Value::from(1))),
            leaf(StubStep::new()),
            leaf(Constant::new(Value::from(true))),
        ]
    }

    fn keyed(steps: Vec<Node>) -> Vec<(String, Node)> {
        ["one", "two", "three"]
            .iter()
            .map(|k| k.to_string())
            .zip(steps)
            .collect()
    }

    #[test]
    fn test_tuple_all_present() {
        let node = to_step(RawSteps::Tuple(three_present())).unwrap();
        assert_eq!(
            run(&node),
            vec![Value::tuple([Value::from(1), Value::from("a"), Value::from(true)])]
        );
    }

    #[test]
    fn test_tuple_one_missing_yields_nothing() {
        let node = to_step(RawSteps::Tuple(one_missing())).unwrap();
        assert!(run(&node).is_empty());
    }

    #[test]
    fn test_list_keeps_present_values() {
        let node = to_step(RawSteps::List(one_missing())).unwrap();
        assert_eq!(run(&node), vec![Value::list([Value::from(1), Value::from(true)])]);
    }

    #[test]
    fn test_set_keeps_present_values() {
        let node = to_step(RawSteps::Set(one_missing())).unwrap();
        assert_eq!(run(&node), vec![Value::set([Value::from(1), Value::from(true)])]);
    }

    #[test]
    fn test_set_collapses_duplicates() {
        let node = to_step(RawSteps::Set(vec![
            leaf(Constant::new(Value::from(7))),
            leaf(Constant::new(Value::from(7))),
        ]))
        .unwrap();
        assert_eq!(run(&node), vec![Value::set([Value::from(7)])]);
    }

    #[test]
    fn test_dict_keeps_present_keys() {
        let node = to_step(RawSteps::Dict(keyed(one_missing()))).unwrap();
        assert_eq!(
            run(&node),
            vec![Value::dict([("one", Value::from(1)), ("three", Value::from(true))])]
        );
    }

    #[test]
    fn test_dict_entries_are_sorted_by_key() {
        let node = to_step(RawSteps::Dict(keyed(three_present()))).unwrap();
        let packed = run(&node);

        assert_eq!(packed.len(), 1);
        assert_eq!(packed[0].to_string(), r#"{"one": 1, "three": true, "two": "a"}"#);
        match &packed[0] {
            Value::Dict(entries) => {
                let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
                assert_eq!(keys, vec!["one", "three", "two"]);
            }
            other => panic!("expected a dict, got {}", other),
        }
    }

    #[test]
    fn test_all_missing_emits_nothing() {
        let missing = || vec![leaf(StubStep::new()), leaf(StubStep::new())];
        for raw in [
            RawSteps::List(missing()),
            RawSteps::Set(missing()),
            RawSteps::Dict(vec![("k".to_string(), leaf(StubStep::new()))]),
        ] {
            let node = to_step(raw).unwrap();
            assert!(run(&node).is_empty());
        }
    }

    #[test]
    fn test_only_first_value_is_taken() {
        let node = to_step(RawSteps::List(vec![leaf(Constant::repeated(Value::from("x"), 3))])).unwrap();
        assert_eq!(run(&node), vec![Value::list([Value::from("x")])]);
    }

    #[test]
    fn test_children_share_the_input() {
        let node = to_step(RawSteps::Tuple(vec![
            leaf(OneOf::new(vec![Value::from("a")])),
            leaf(OneOf::new(vec![Value::from("a"), Value::from("b")])),
        ]))
        .unwrap();
        let outputs: Vec<Value> = node
            .make(Value::from("a"), &Options::new())
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(outputs, vec![Value::tuple([Value::from("a"), Value::from("a")])]);
    }

    #[test]
    fn test_failure_replaces_container() {
        let node = to_step(RawSteps::List(vec![
            leaf(Constant::new(Value::from(1))),
            leaf(FailingStep::new("bad")),
        ]))
        .unwrap();
        let outputs: Vec<_> = node.make(Value::Null, &Options::new()).collect();

        assert_eq!(outputs.len(), 1);
        assert!(matches!(outputs[0], Err(StepError::Failed { .. })));
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            to_step(RawSteps::Tuple(vec![])).err(),
            Some(CompositionError::EmptyComposite { kind: "TupleStep" })
        );
        let duplicated = vec![
            ("k".to_string(), leaf(StubStep::new())),
            ("k".to_string(), leaf(StubStep::new())),
        ];
        assert_eq!(
            to_step(RawSteps::Dict(duplicated)).err(),
            Some(CompositionError::DuplicateKey("k".to_string()))
        );
    }
}
