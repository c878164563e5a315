// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors produced by leaf steps while a tree runs.
///
/// Composites pass these through untouched, so the error a caller sees is
/// the one the failing leaf raised.
#[derive(Error, Debug)]
pub enum StepError {
    /// The step received a value of a type it cannot handle.
    #[error("step '{step}' expected {expected} input, got {found}")]
    InvalidInput {
        step: String,
        expected: &'static str,
        found: String,
    },

    /// Integer arithmetic left the `i64` range.
    #[error("step '{step}' overflowed on input {input}")]
    Overflow { step: String, input: i64 },

    /// The step reported a failure of its own.
    #[error("step '{step}' failed: {message}")]
    Failed { step: String, message: String },

    /// Failure raised by user-supplied step code.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StepError {
    /// Shorthand for an [`StepError::InvalidInput`] describing `value`.
    pub fn invalid_input(step: &str, expected: &'static str, value: &crate::types::Value) -> Self {
        StepError::InvalidInput {
            step: step.to_string(),
            expected,
            found: value.type_name().to_string(),
        }
    }

    pub fn failed(step: &str, message: impl Into<String>) -> Self {
        StepError::Failed {
            step: step.to_string(),
            message: message.into(),
        }
    }
}

/// Result type for values produced by steps.
pub type StepResult<T> = Result<T, StepError>;
