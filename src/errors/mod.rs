// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod composition;
mod config;
mod execution;

pub use composition::CompositionError;
pub use config::ConfigError;
pub use execution::{StepError, StepResult};
