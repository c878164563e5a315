// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The step tree and its composition operators.
//!
//! A tree is built from [`Node`] values with four bindings:
//!
//! | method      | operator | result                                        |
//! |-------------|----------|-----------------------------------------------|
//! | `bind`      | `a >> b` | `StepChain`, flattened                        |
//! | `loop_bind` | `a << b` | `LoopStep(a, b)`; on a chain, wraps its last step |
//! | `or_bind`   | `a \| b` | `OrChain`, flattened                          |
//! | `isolate`   | `!a`     | `UnionStep(a)` for chains, loops and or-chains |
//!
//! `>>` and `<<` share a precedence level and associate to the left, `|`
//! binds looser, so `a >> b << c | d` reads as `((a >> b) << c) | d`.
//!
//! ```
//! use stepwise::backends::local::steps::{DivisibleBy, Multiply, Range};
//! use stepwise::engine::leaf;
//! use stepwise::traits::Step;
//! use stepwise::types::{Options, Value};
//!
//! let tree = leaf(Range::new()) >> leaf(Multiply::new(10)) >> leaf(DivisibleBy::new(20).unwrap());
//! let outputs: Vec<Value> = tree
//!     .make(Value::from(10), &Options::new())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(outputs, [0, 20, 40, 60, 80].map(Value::from).to_vec());
//! ```

use std::ops::{BitOr, Not, Shl, Shr};
use std::sync::Arc;

use crate::engine::{
    DictStep, ListStep, LoopStep, OrChain, RawSteps, SetStep, StepChain, TupleStep, UnionStep,
};
use crate::errors::CompositionError;
use crate::traits::{Outputs, Step};
use crate::types::{Options, Value};

/// A node of a step tree: a leaf step or one of the composites.
#[derive(Clone)]
pub enum Node {
    Leaf(Arc<dyn Step>),
    Chain(StepChain),
    Loop(LoopStep),
    Or(OrChain),
    Tuple(TupleStep),
    List(ListStep),
    Dict(DictStep),
    Set(SetStep),
    Union(UnionStep),
}

/// Wraps a step as a leaf node.
pub fn leaf(step: impl Step + 'static) -> Node {
    Node::Leaf(Arc::new(step))
}

impl Node {
    fn as_step(&self) -> &dyn Step {
        match self {
            Node::Leaf(step) => &**step,
            Node::Chain(step) => step,
            Node::Loop(step) => step,
            Node::Or(step) => step,
            Node::Tuple(step) => step,
            Node::List(step) => step,
            Node::Dict(step) => step,
            Node::Set(step) => step,
            Node::Union(step) => step,
        }
    }

    /// Sequential bind. Chains on either side are flattened into one.
    pub fn bind(self, next: impl Into<Node>) -> Node {
        let mut steps = match self {
            Node::Chain(chain) => chain.steps,
            other => vec![other],
        };
        match next.into() {
            Node::Chain(chain) => steps.extend(chain.steps),
            other => steps.push(other),
        }
        Node::Chain(StepChain { steps })
    }

    /// Binds a step or a raw container of steps, converting the container into a packer.
    pub fn bind_raw(self, next: impl Into<RawSteps>) -> Result<Node, CompositionError> {
        Ok(self.bind(crate::engine::to_step(next)?))
    }

    /// Feedback bind. On a chain only the last step enters the loop.
    pub fn loop_bind(self, loop_step: impl Into<Node>) -> Node {
        match self {
            Node::Chain(mut chain) => match chain.steps.pop() {
                Some(last) => {
                    chain.steps.push(Node::Loop(LoopStep::new(last, loop_step)));
                    Node::Chain(chain)
                }
                None => Node::Loop(LoopStep::new(Node::Chain(chain), loop_step)),
            },
            other => Node::Loop(LoopStep::new(other, loop_step)),
        }
    }

    /// Fallback bind. Or-chains on either side are flattened into one.
    pub fn or_bind(self, alternative: impl Into<Node>) -> Node {
        let mut steps = match self {
            Node::Or(or) => or.steps,
            other => vec![other],
        };
        match alternative.into() {
            Node::Or(or) => steps.extend(or.steps),
            other => steps.push(other),
        }
        Node::Or(OrChain { steps })
    }

    /// Groups this sub-tree so later bindings treat it as one opaque step.
    ///
    /// Only chains, loops and or-chains are wrapped. Leaves and packers are
    /// never flattened by a binding and unions are already grouped, so all
    /// three are returned as they are.
    pub fn isolate(self) -> Node {
        match self {
            node @ (Node::Chain(_) | Node::Loop(_) | Node::Or(_)) => Node::Union(UnionStep::new(node)),
            other => other,
        }
    }

    /// Direct children in declaration order; a loop lists its feedback step last.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Leaf(_) => Vec::new(),
            Node::Chain(chain) => chain.steps().iter().collect(),
            Node::Loop(lp) => vec![lp.step(), lp.loop_step()],
            Node::Or(or) => or.steps().iter().collect(),
            Node::Tuple(pack) => pack.steps().iter().collect(),
            Node::List(pack) => pack.steps().iter().collect(),
            Node::Dict(pack) => pack.steps().iter().map(|(_, step)| step).collect(),
            Node::Set(pack) => pack.steps().iter().collect(),
            Node::Union(union) => vec![union.step()],
        }
    }

    /// Number of nodes in the tree, this one included.
    pub fn size(&self) -> usize {
        1 + self.children().into_iter().map(Node::size).sum::<usize>()
    }

    /// Number of levels in the tree; a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(Node::depth)
            .max()
            .unwrap_or(0)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }
}

impl Step for Node {
    fn make<'a>(&'a self, value: Value, options: &Options) -> Outputs<'a> {
        self.as_step().make(value, options)
    }

    fn make_all<'a>(&'a self, values: Outputs<'a>, options: &Options) -> Outputs<'a> {
        self.as_step().make_all(values, options)
    }

    fn name(&self) -> &str {
        self.as_step().name()
    }
}

impl From<Arc<dyn Step>> for Node {
    fn from(step: Arc<dyn Step>) -> Self {
        Node::Leaf(step)
    }
}

macro_rules! node_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(step: $ty) -> Self {
                    Node::$variant(step)
                }
            }
        )*
    };
}

node_from!(
    Chain(StepChain),
    Loop(LoopStep),
    Or(OrChain),
    Tuple(TupleStep),
    List(ListStep),
    Dict(DictStep),
    Set(SetStep),
    Union(UnionStep),
);

impl<N: Into<Node>> Shr<N> for Node {
    type Output = Node;

    fn shr(self, next: N) -> Node {
        self.bind(next)
    }
}

impl<N: Into<Node>> Shl<N> for Node {
    type Output = Node;

    fn shl(self, loop_step: N) -> Node {
        self.loop_bind(loop_step)
    }
}

impl<N: Into<Node>> BitOr<N> for Node {
    type Output = Node;

    fn bitor(self, alternative: N) -> Node {
        self.or_bind(alternative)
    }
}

impl Not for Node {
    type Output = Node;

    fn not(self) -> Node {
        self.isolate()
    }
}
