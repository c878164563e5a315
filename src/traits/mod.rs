// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod step;

pub use step::{no_outputs, one_output, short_type_name, Outputs, Step};
