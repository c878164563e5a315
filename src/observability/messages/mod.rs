// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! # Organization
//!
//! * `config` - configuration loading events
//! * `pipeline` - pipeline build and run events
//! * `step` - step level events (stub invocation, parallel batches)
//!
//! # Usage Pattern
//!
//! ```rust
//! use stepwise::observability::messages::step::StubStepInvoked;
//!
//! let msg = StubStepInvoked { step: "Step" };
//!
//! tracing::warn!("{}", msg);
//! ```

use tracing::Span;

pub mod config;
pub mod pipeline;
pub mod step;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emits the message at its level with its fields attached.
    fn log(&self);

    /// Opens a span carrying the same fields.
    fn span(&self, name: &str) -> Span;
}
