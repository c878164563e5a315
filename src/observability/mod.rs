// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Diagnostic and operational log lines are emitted through message structs
//! rather than format strings at the call site. Each message implements
//! `Display` for the human-readable text and [`messages::StructuredLog`] for
//! the level, the structured fields and an optional span.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::config` - pipeline configuration loading and rejection
//! * `messages::pipeline` - pipeline construction and run lifecycle
//! * `messages::step` - events raised by individual steps
//!
//! Composite steps do not log per element; a pipeline run is logged once at
//! the start and once when its output sequence is exhausted or fails.
//!
//! # Usage
//!
//! ```rust
//! use stepwise::observability::messages::pipeline::PipelineRunStarted;
//! use stepwise::observability::messages::StructuredLog;
//!
//! let msg = PipelineRunStarted {
//!     pipeline: "numbers",
//!     input: "10",
//! };
//!
//! msg.log();
//! ```

pub mod messages;
