// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Text rendering of a step tree.
//!
//! Every composite prints its label on one row and its children below it,
//! hung from a `|` column placed under the middle of the type name:
//!
//! ```text
//! StepChain(3)
//!    |__Step()
//!    |__LoopStep()
//!    |     |__Step()
//!    |     |_<< Step()
//!    |
//!    |__OrChain(2)
//!           |__Step()
//!           |__Step()
//! ```
//!
//! A child spanning several rows is followed by a bare `|` spacer unless it
//! is the last one. The feedback step of a loop hangs from `|_<< ` instead
//! of `|__`.

use serde::Deserialize;

use crate::engine::Node;
use crate::traits::Step;

/// Display toggles for [`Node::tree`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Expand everything: implies `show_union` and ignores `max_depth`.
    pub full: bool,
    /// Render `UnionStep()` wrappers instead of eliding them.
    pub show_union: bool,
    /// Composites at this depth or deeper print their label only; the root is depth 0.
    pub max_depth: Option<usize>,
}

impl RenderOptions {
    pub fn full() -> Self {
        Self {
            full: true,
            ..Self::default()
        }
    }

    pub fn show_union() -> Self {
        Self {
            show_union: true,
            ..Self::default()
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    fn shows_union(&self) -> bool {
        self.full || self.show_union
    }

    fn expands(&self, depth: usize) -> bool {
        self.full || self.max_depth.map_or(true, |max| depth < max)
    }
}

impl Node {
    /// Renders the tree as indented text. The tree itself is not touched.
    pub fn tree(&self, options: &RenderOptions) -> String {
        rows(self, options, 0).join("\n")
    }
}

struct Child<'a> {
    key: Option<&'a str>,
    node: &'a Node,
}

enum Connector {
    Branch,
    LoopBack,
}

fn rows(node: &Node, options: &RenderOptions, depth: usize) -> Vec<String> {
    let (kind, label, children): (&str, String, Vec<Child>) = match node {
        Node::Leaf(step) => return vec![format!("{}()", step.name())],
        Node::Union(union) if !options.shows_union() => return rows(union.step(), options, depth),
        Node::Union(union) => (
            "UnionStep",
            "UnionStep()".to_string(),
            vec![Child { key: None, node: union.step() }],
        ),
        Node::Loop(lp) => (
            "LoopStep",
            "LoopStep()".to_string(),
            vec![
                Child { key: None, node: lp.step() },
                Child { key: None, node: lp.loop_step() },
            ],
        ),
        Node::Dict(dict) => {
            let children: Vec<Child> = dict
                .steps()
                .iter()
                .map(|(key, node)| Child { key: Some(key.as_str()), node })
                .collect();
            ("DictStep", format!("DictStep({})", children.len()), children)
        }
        other => {
            let kind = other.name();
            let children: Vec<Child> = other
                .children()
                .into_iter()
                .map(|node| Child { key: None, node })
                .collect();
            (kind, format!("{}({})", kind, children.len()), children)
        }
    };

    let mut out = vec![label];
    if !options.expands(depth) {
        return out;
    }

    let pad = " ".repeat(column(kind).saturating_sub(1));
    let last = children.len().saturating_sub(1);
    let loops = matches!(node, Node::Loop(_));

    for (index, child) in children.iter().enumerate() {
        let mut child_rows = rows(child.node, options, depth + 1).into_iter();
        let head = child_rows.next().unwrap_or_default();
        let head = match child.key {
            Some(key) => format!("{}: {}", quoted(key), head),
            None => head,
        };
        let connector = if loops && index == last {
            Connector::LoopBack
        } else {
            Connector::Branch
        };
        let head = match connector {
            Connector::Branch => format!("{}|__{}", pad, head),
            Connector::LoopBack => format!("{}|_<< {}", pad, head),
        };
        out.push(head);

        if index < last {
            let rest: Vec<String> = child_rows.map(|row| format!("{}|  {}", pad, row)).collect();
            if !rest.is_empty() {
                out.extend(rest);
                out.push(format!("{}|", pad));
            }
        } else {
            out.extend(child_rows.map(|row| format!("{} {}{}", pad, pad, row)));
        }
    }

    out
}

/// Column of the `|` connector: half the type name length, ties rounded to even.
fn column(kind: &str) -> usize {
    let len = kind.chars().count();
    let half = len / 2;
    if len % 2 == 1 && half % 2 == 1 {
        half + 1
    } else {
        half
    }
}

/// Single-quoted key, escaped the way the expression form prints it.
pub(crate) fn quoted(key: &str) -> String {
    format!("'{}'", key.replace('\\', "\\\\").replace('\'', "\\'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::stub::StubStep;
    use crate::engine::{leaf, to_step, RawSteps};

    fn stub() -> Node {
        leaf(StubStep::new())
    }

    fn sample() -> Node {
        stub() >> (!(stub() >> stub() >> stub()) << stub()) >> (stub() | stub() | stub())
    }

    #[test]
    fn test_column_rounds_half_to_even() {
        assert_eq!(column("StepChain"), 4);
        assert_eq!(column("OrChain"), 4);
        assert_eq!(column("LoopStep"), 4);
        assert_eq!(column("Chain"), 2);
        assert_eq!(column("ab"), 1);
    }

    #[test]
    fn test_default_tree() {
        let expected = [
            "StepChain(3)",
            "   |__Step()",
            "   |__LoopStep()",
            "   |     |__StepChain(3)",
            "   |     |     |__Step()",
            "   |     |     |__Step()",
            "   |     |     |__Step()",
            "   |     |",
            "   |     |_<< Step()",
            "   |",
            "   |__OrChain(3)",
            "          |__Step()",
            "          |__Step()",
            "          |__Step()",
        ]
        .join("\n");

        assert_eq!(sample().tree(&RenderOptions::default()), expected);
    }

    #[test]
    fn test_show_union_changes_only_the_group() {
        let expected = [
            "StepChain(3)",
            "   |__Step()",
            "   |__LoopStep()",
            "   |     |__UnionStep()",
            "   |     |     |__StepChain(3)",
            "   |     |            |__Step()",
            "   |     |            |__Step()",
            "   |     |            |__Step()",
            "   |     |",
            "   |     |_<< Step()",
            "   |",
            "   |__OrChain(3)",
            "          |__Step()",
            "          |__Step()",
            "          |__Step()",
        ]
        .join("\n");

        assert_eq!(sample().tree(&RenderOptions::show_union()), expected);
        assert_eq!(sample().tree(&RenderOptions::full()), expected);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let tree = sample();
        let options = RenderOptions::default();
        assert_eq!(tree.tree(&options), tree.tree(&options));
    }

    #[test]
    fn test_max_depth_summarises_deep_composites() {
        let options = RenderOptions::default().with_max_depth(1);
        let expected = [
            "StepChain(3)",
            "   |__Step()",
            "   |__LoopStep()",
            "   |__OrChain(3)",
        ]
        .join("\n");

        assert_eq!(sample().tree(&options), expected);
        assert_eq!(sample().tree(&RenderOptions::default().with_max_depth(0)), "StepChain(3)");

        let full = RenderOptions {
            full: true,
            max_depth: Some(0),
            ..RenderOptions::default()
        };
        assert_eq!(sample().tree(&full), sample().tree(&RenderOptions::full()));
    }

    #[test]
    fn test_dict_children_carry_keys() {
        let dict = to_step(RawSteps::Dict(vec![
            ("one".to_string(), stub()),
            ("two".to_string(), stub() >> stub()),
        ]))
        .unwrap();
        let expected = [
            "DictStep(2)",
            "   |__'one': Step()",
            "   |__'two': StepChain(2)",
            "          |__Step()",
            "          |__Step()",
        ]
        .join("\n");

        assert_eq!(dict.tree(&RenderOptions::default()), expected);
    }

    #[test]
    fn test_leaf_and_packers() {
        assert_eq!(stub().tree(&RenderOptions::default()), "Step()");

        let tuple = to_step(RawSteps::Tuple(vec![stub(), stub()])).unwrap();
        assert_eq!(
            tuple.tree(&RenderOptions::default()),
            ["TupleStep(2)", "   |__Step()", "   |__Step()"].join("\n")
        );
    }
}
