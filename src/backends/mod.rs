// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Leaf step implementations.
//!
//! # Available Backends
//!
//! ## Local Backend
//! In-process built-in steps over [`crate::types::Value`]:
//! - **Sequences**: `range`, `chars`, `split`, `items`, `constant`
//! - **Arithmetic**: `multiply`, `add` (checked, overflow is an error)
//! - **Filters**: `divisible_by`, `one_of`
//! - **Adapters**: `identity`, and `FnStep` for closures
//!
//! ## Stub Backend
//! - **StubStep**: the bare placeholder step, rendered as `Step()`; yields nothing
//! - **FailingStep**: always fails, for failure propagation tests
//!
//! # Architecture
//!
//! Configured leaves go through a factory, the same way for every backend:
//! ```text
//! LeafConfig → LocalStepFactory → Arc<dyn Step> → Node::Leaf
//! ```
//!
//! # Examples
//!
//! ```rust
//! use stepwise::backends::local::LocalStepFactory;
//! use stepwise::config::LeafConfig;
//! use stepwise::traits::Step;
//! use stepwise::types::Value;
//!
//! let config = LeafConfig::new("multiply").with_arg("factor", Value::from(3));
//! let step = LocalStepFactory::create_step(&config)?;
//! assert_eq!(step.name(), "Multiply");
//! # Ok::<(), stepwise::errors::CompositionError>(())
//! ```

pub mod local;
pub mod stub;
