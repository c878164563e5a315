// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! One-line expression form of a step tree.
//!
//! Each composite prints its type name around its children joined by the
//! operator or container syntax that built it, e.g.
//! `StepChain(Range() >> LoopStep(Step() << Step()))`.

use std::fmt::{self, Display, Formatter};

use super::render::quoted;
use crate::engine::Node;

fn joined(f: &mut Formatter<'_>, nodes: &[Node], separator: &str) -> fmt::Result {
    for (index, node) in nodes.iter().enumerate() {
        if index > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{}", node)?;
    }
    Ok(())
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf(step) => write!(f, "{}()", step.name()),
            Node::Chain(chain) => {
                f.write_str("StepChain(")?;
                joined(f, chain.steps(), " >> ")?;
                f.write_str(")")
            }
            Node::Loop(lp) => write!(f, "LoopStep({} << {})", lp.step(), lp.loop_step()),
            Node::Or(or) => {
                f.write_str("OrChain(")?;
                joined(f, or.steps(), " | ")?;
                f.write_str(")")
            }
            Node::Tuple(pack) => {
                f.write_str("TupleStep((")?;
                joined(f, pack.steps(), ", ")?;
                f.write_str("))")
            }
            Node::List(pack) => {
                f.write_str("ListStep([")?;
                joined(f, pack.steps(), ", ")?;
                f.write_str("])")
            }
            Node::Dict(pack) => {
                f.write_str("DictStep({")?;
                for (index, (key, node)) in pack.steps().iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", quoted(key), node)?;
                }
                f.write_str("})")
            }
            Node::Set(pack) => {
                f.write_str("SetStep({")?;
                joined(f, pack.steps(), ", ")?;
                f.write_str("})")
            }
            Node::Union(union) => write!(f, "UnionStep({})", union.step()),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use crate::backends::local::steps::{Multiply, Range};
    use crate::backends::stub::StubStep;
    use crate::engine::{leaf, to_step, Node, RawSteps};

    fn stub() -> Node {
        leaf(StubStep::new())
    }

    #[test]
    fn test_chain_loop_and_or() {
        let tree = leaf(Range::new()) >> leaf(Multiply::new(10)) << stub() | stub();
        assert_eq!(
            tree.to_string(),
            "OrChain(StepChain(Range() >> LoopStep(Multiply() << Step())) | Step())"
        );
    }

    #[test]
    fn test_union_is_always_shown() {
        let tree = stub() >> !(stub() >> stub());
        assert_eq!(
            tree.to_string(),
            "StepChain(Step() >> UnionStep(StepChain(Step() >> Step())))"
        );
    }

    #[test]
    fn test_packers() {
        let tuple = to_step(RawSteps::Tuple(vec![stub(), stub()])).unwrap();
        let list = to_step(RawSteps::List(vec![stub()])).unwrap();
        let set = to_step(RawSteps::Set(vec![stub(), stub()])).unwrap();
        let dict = to_step(RawSteps::Dict(vec![
            ("a".to_string(), stub()),
            ("it's".to_string(), stub()),
        ]))
        .unwrap();

        assert_eq!(tuple.to_string(), "TupleStep((Step(), Step()))");
        assert_eq!(list.to_string(), "ListStep([Step()])");
        assert_eq!(set.to_string(), "SetStep({Step(), Step()})");
        assert_eq!(dict.to_string(), r"DictStep({'a': Step(), 'it\'s': Step()})");
        assert_eq!(format!("{:?}", list), list.to_string());
    }
}
