// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod chain;
pub mod loop_step;
pub mod node;
pub mod or_chain;
pub mod pack;
pub mod parallel;
pub mod union;

pub use chain::StepChain;
pub use loop_step::LoopStep;
pub use node::{leaf, Node};
pub use or_chain::OrChain;
pub use pack::{to_step, DictStep, ListStep, RawSteps, SetStep, TupleStep};
pub use parallel::ParallelStep;
pub use union::UnionStep;
