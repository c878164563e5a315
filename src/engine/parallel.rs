// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Parallel `make_all`.
//!
//! [`ParallelStep`] wraps a step and overrides `make_all`: inputs are pulled
//! in batches, `make` runs for every value of a batch on a rayon pool, and
//! the outputs come back in input order. Pulling by batch keeps the wrapper
//! usable on unbounded upstream sequences, but each `make` output is
//! collected on its worker, so the wrapped step must produce finite
//! sequences.

use std::iter;
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::errors::{CompositionError, StepResult};
use crate::observability::messages::step::ParallelBatchCompleted;
use crate::observability::messages::StructuredLog;
use crate::traits::{Outputs, Step};
use crate::types::{Options, Value};

/// Default number of inputs pulled per batch.
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// Runs the wrapped step's `make` for many inputs concurrently.
pub struct ParallelStep {
    step: Arc<dyn Step>,
    name: String,
    batch_size: usize,
    max_concurrency: Option<usize>,
    pool: Option<ThreadPool>,
}

impl ParallelStep {
    /// Uses rayon's global pool and [`DEFAULT_BATCH_SIZE`].
    pub fn new(step: impl Step + 'static) -> Self {
        Self::from_arc(Arc::new(step))
    }

    pub fn from_arc(step: Arc<dyn Step>) -> Self {
        let name = format!("Parallel[{}]", step.name());
        Self {
            step,
            name,
            batch_size: DEFAULT_BATCH_SIZE,
            max_concurrency: None,
            pool: None,
        }
    }

    /// Number of inputs pulled from upstream before a batch is dispatched.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Runs batches on a dedicated pool of `max_concurrency` threads.
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Result<Self, CompositionError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(max_concurrency.max(1))
            .thread_name(|i| format!("stepwise-worker-{}", i))
            .build()
            .map_err(|e| CompositionError::ThreadPool(e.to_string()))?;
        self.max_concurrency = Some(max_concurrency.max(1));
        self.pool = Some(pool);
        Ok(self)
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn max_concurrency(&self) -> Option<usize> {
        self.max_concurrency
    }

    fn run_batch(&self, batch: Vec<StepResult<Value>>, options: &Options) -> Vec<StepResult<Value>> {
        let started = Instant::now();
        let inputs = batch.len();
        let step = &self.step;
        let work = move || {
            batch
                .into_par_iter()
                .map(|item| match item {
                    Ok(value) => step.make(value, options).collect::<Vec<_>>(),
                    Err(error) => vec![Err(error)],
                })
                .collect::<Vec<Vec<StepResult<Value>>>>()
        };
        let per_input = match &self.pool {
            Some(pool) => pool.install(work),
            None => work(),
        };
        let outputs: Vec<StepResult<Value>> = per_input.into_iter().flatten().collect();

        ParallelBatchCompleted {
            step: &self.name,
            inputs,
            outputs: outputs.len(),
            duration: started.elapsed(),
        }
        .log();

        outputs
    }
}

impl Step for ParallelStep {
    fn make<'a>(&'a self, value: Value, options: &Options) -> Outputs<'a> {
        self.step.make(value, options)
    }

    fn make_all<'a>(&'a self, mut values: Outputs<'a>, options: &Options) -> Outputs<'a> {
        let options = options.clone();
        let batch_size = self.batch_size;
        Box::new(
            iter::from_fn(move || {
                let batch: Vec<StepResult<Value>> = values.by_ref().take(batch_size).collect();
                (!batch.is_empty()).then(|| self.run_batch(batch, &options))
            })
            .flatten(),
        )
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::local::steps::{FnStep, Multiply, Range};
    use crate::backends::stub::FailingStep;
    use crate::engine::leaf;
    use std::time::Duration;

    #[test]
    fn test_output_order_follows_input_order() {
        // later inputs finish first
        let slow_small = FnStep::new("sleepy", |value: Value, _options: &Options| {
            let n = value.as_int().unwrap_or(0);
            std::thread::sleep(Duration::from_millis((10 - n) as u64 * 2));
            Ok(vec![Value::from(n), Value::from(n * 100)])
        });
        let tree = leaf(Range::new())
            >> leaf(ParallelStep::new(slow_small).with_batch_size(4).with_max_concurrency(4).unwrap());

        let outputs: Vec<Value> = tree
            .make(Value::from(10), &Options::new())
            .collect::<Result<_, _>>()
            .unwrap();
        let expected: Vec<Value> = (0..10)
            .flat_map(|n| [Value::from(n), Value::from(n * 100)])
            .collect();

        assert_eq!(outputs, expected);
    }

    #[test]
    fn test_matches_sequential_make_all() {
        let parallel = leaf(Range::new()) >> leaf(ParallelStep::new(Multiply::new(7)));
        let sequential = leaf(Range::new()) >> leaf(Multiply::new(7));

        let run = |node: &crate::engine::Node| -> Vec<Value> {
            node.make(Value::from(200), &Options::new())
                .collect::<Result<_, _>>()
                .unwrap()
        };
        assert_eq!(run(&parallel), run(&sequential));
    }

    #[test]
    fn test_unbounded_upstream_is_consumed_in_batches() {
        let naturals = FnStep::new("naturals", |_value: Value, _options: &Options| {
            Ok((0..).map(Value::from))
        });
        let tree = leaf(naturals) >> leaf(ParallelStep::new(Multiply::new(2)).with_batch_size(8));

        let first: Vec<Value> = tree
            .make(Value::Null, &Options::new())
            .take(20)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(first, (0..20).map(|n| Value::from(n * 2)).collect::<Vec<_>>());
    }

    #[test]
    fn test_errors_keep_their_position() {
        let tree = leaf(Range::new()) >> leaf(ParallelStep::new(FailingStep::new("nope")));
        let outputs: Vec<_> = tree.make(Value::from(3), &Options::new()).collect();

        assert_eq!(outputs.len(), 3);
        assert!(outputs.iter().all(|o| o.is_err()));
    }

    #[test]
    fn test_name_and_settings() {
        let step = ParallelStep::new(Multiply::new(2)).with_batch_size(0);
        assert_eq!(step.name(), "Parallel[Multiply]");
        assert_eq!(step.batch_size(), 1);
        assert_eq!(step.max_concurrency(), None);
    }
}
