// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::iter;

use crate::traits::{Outputs, Step};
use crate::types::{Options, Value};

/// Constant step - ignores its input and yields a fixed value `times` times
#[derive(Debug, Clone)]
pub struct Constant {
    value: Value,
    times: usize,
}

impl Constant {
    pub fn new(value: Value) -> Self {
        Self::repeated(value, 1)
    }

    pub fn repeated(value: Value, times: usize) -> Self {
        Self { value, times }
    }
}

impl Step for Constant {
    fn make<'a>(&'a self, _value: Value, _options: &Options) -> Outputs<'a> {
        Box::new(iter::repeat_with(move || Ok(self.value.clone())).take(self.times))
    }
}
