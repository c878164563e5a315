// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::iter;

use crate::errors::StepResult;
use crate::types::{Options, Value};

/// Lazy, pull-based output sequence of a step.
///
/// Nothing is computed until the consumer advances the iterator, and a
/// consumer abandons the rest of a run simply by dropping it. Failures are
/// `Err` items; a consumer collecting into `Result<Vec<_>, _>` stops at the
/// first one.
pub type Outputs<'a> = Box<dyn Iterator<Item = StepResult<Value>> + 'a>;

/// A processing unit mapping one input value to a lazy output sequence.
///
/// Steps are immutable once built and keep no state between calls, so a
/// tree can be run any number of times, including from several threads.
pub trait Step: Send + Sync {
    /// Produce the output sequence for one input value.
    fn make<'a>(&'a self, value: Value, options: &Options) -> Outputs<'a>;

    /// Produce the concatenated outputs of `make` for every input, in input order.
    ///
    /// `Err` items in `values` are passed through in place. Implementations
    /// may override this to spread work across threads as long as output
    /// order follows input order.
    fn make_all<'a>(&'a self, values: Outputs<'a>, options: &Options) -> Outputs<'a> {
        let options = options.clone();
        Box::new(values.flat_map(move |item| -> Outputs<'a> {
            match item {
                Ok(value) => self.make(value, &options),
                Err(error) => Box::new(iter::once(Err(error))),
            }
        }))
    }

    /// Label used when rendering the tree.
    fn name(&self) -> &str {
        short_type_name(std::any::type_name::<Self>())
    }
}

/// Strips the module path and generic arguments from a type name.
pub fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// An empty output sequence.
pub fn no_outputs<'a>() -> Outputs<'a> {
    Box::new(iter::empty())
}

/// A single-item output sequence.
pub fn one_output<'a>(item: StepResult<Value>) -> Outputs<'a> {
    Box::new(iter::once(item))
}
