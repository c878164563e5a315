// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Feedback composition.
//!
//! A `LoopStep` drives a FIFO worklist. The input is expanded by the first
//! step and every produced value is emitted, then queued for feedback. Once
//! the current expansion is drained, the oldest queued value is handed to
//! the feedback step and each of its outputs is expanded by the first step
//! in turn. The loop ends when nothing is left to feed back.
//!
//! The feedback step only runs when the consumer pulls past everything
//! already produced, so abandoning the sequence early never invokes it.
//!
//! ```text
//! value --> first --> emitted ----->
//!             ^           |
//!             |           v
//!          pending <-- feedback
//! ```
//!
//! There is no cycle detection or depth limit: a feedback step that never
//! stops producing keeps the sequence going forever, and it is up to the
//! caller to stop pulling.

use std::collections::VecDeque;

use crate::engine::Node;
use crate::errors::StepResult;
use crate::traits::{Outputs, Step};
use crate::types::{Options, Value};

/// Two steps bound into a feedback cycle.
#[derive(Clone)]
pub struct LoopStep {
    pub(crate) step: Box<Node>,
    pub(crate) loop_step: Box<Node>,
}

impl LoopStep {
    pub fn new(step: impl Into<Node>, loop_step: impl Into<Node>) -> Self {
        Self {
            step: Box::new(step.into()),
            loop_step: Box::new(loop_step.into()),
        }
    }

    /// The step whose outputs are emitted.
    pub fn step(&self) -> &Node {
        &self.step
    }

    /// The step whose outputs are fed back into [`LoopStep::step`].
    pub fn loop_step(&self) -> &Node {
        &self.loop_step
    }
}

impl Step for LoopStep {
    fn make<'a>(&'a self, value: Value, options: &Options) -> Outputs<'a> {
        Box::new(LoopOutputs {
            owner: self,
            options: options.clone(),
            current: Some(self.step.make(value, options)),
            feedback: None,
            emitted: VecDeque::new(),
        })
    }

    fn name(&self) -> &str {
        "LoopStep"
    }
}

/// Worklist iterator behind [`LoopStep::make`].
///
/// `emitted` holds values already handed to the consumer and not yet fed
/// back; `feedback` is the feedback sequence being drained.
struct LoopOutputs<'a> {
    owner: &'a LoopStep,
    options: Options,
    current: Option<Outputs<'a>>,
    feedback: Option<Outputs<'a>>,
    emitted: VecDeque<Value>,
}

impl<'a> Iterator for LoopOutputs<'a> {
    type Item = StepResult<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        let owner = self.owner;
        loop {
            if let Some(current) = self.current.as_mut() {
                match current.next() {
                    Some(Ok(value)) => {
                        self.emitted.push_back(value.clone());
                        return Some(Ok(value));
                    }
                    Some(Err(error)) => return Some(Err(error)),
                    None => self.current = None,
                }
            }

            if let Some(feedback) = self.feedback.as_mut() {
                match feedback.next() {
                    Some(Ok(work)) => self.current = Some(owner.step.make(work, &self.options)),
                    Some(Err(error)) => return Some(Err(error)),
                    None => self.feedback = None,
                }
                continue;
            }

            let value = self.emitted.pop_front()?;
            self.feedback = Some(owner.loop_step.make(value, &self.options));
        }
    }
}
