// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod runtime;


pub use loader::{
    load_config, parse_config, CompositeConfig, ConfigFormat, ExecutorOptions, LeafConfig,
    PipelineConfig, StepConfig,
};
pub use runtime::{Pipeline, PipelineBuilder, PipelineRun};
