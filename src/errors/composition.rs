// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised while building a step tree.
///
/// These always surface at composition time, never while a tree runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompositionError {
    /// A composite was declared without any child steps.
    #[error("{kind} requires at least one step")]
    EmptyComposite { kind: &'static str },

    /// Two children of a dict packer share the same key.
    #[error("duplicate key '{0}' in DictStep")]
    DuplicateKey(String),

    /// A loop was declared with a step count other than two.
    #[error("LoopStep takes exactly two steps (a step and its feedback step), got {0}")]
    LoopArity(usize),

    /// A step name that no factory knows about.
    #[error("unknown step '{0}'")]
    UnknownStep(String),

    /// A built-in step is missing a required argument.
    #[error("step '{step}' requires argument '{argument}'")]
    MissingArgument { step: String, argument: String },

    /// A built-in step argument has the wrong shape or value.
    #[error("step '{step}' argument '{argument}' is invalid: {reason}")]
    InvalidArgument {
        step: String,
        argument: String,
        reason: String,
    },

    /// The worker pool for a parallel step could not be created.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}
