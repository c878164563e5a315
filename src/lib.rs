// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;      // built-in leaf steps
pub mod config;        // pipeline documents + builder
pub mod engine;        // step tree composites
pub mod errors;        // error handling
pub mod observability;
pub mod traits;        // the Step contract
pub mod tree;          // tree and expression rendering
pub mod types;         // Value and Options

pub use engine::{leaf, Node};
pub use errors::{CompositionError, ConfigError, StepError, StepResult};
pub use traits::Step;
pub use types::{Options, Value};
