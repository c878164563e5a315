// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod options;
mod value;

pub use options::Options;
pub use value::Value;
