// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::StepError;
use crate::traits::{one_output, Outputs, Step};
use crate::types::{Options, Value};

/// Chars step - a string becomes the sequence of its characters
#[derive(Debug, Clone, Default)]
pub struct Chars;

impl Chars {
    pub fn new() -> Self {
        Self
    }
}

impl Step for Chars {
    fn make<'a>(&'a self, value: Value, _options: &Options) -> Outputs<'a> {
        match value {
            Value::Str(text) => {
                let chars: Vec<char> = text.chars().collect();
                Box::new(chars.into_iter().map(|c| Ok(Value::from(c))))
            }
            other => one_output(Err(StepError::invalid_input(self.name(), "str", &other))),
        }
    }
}

/// Split step - a string becomes its pieces around a separator
///
/// An empty separator splits on whitespace and drops empty pieces.
#[derive(Debug, Clone)]
pub struct Split {
    separator: String,
}

impl Split {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    pub fn whitespace() -> Self {
        Self::new("")
    }
}

impl Step for Split {
    fn make<'a>(&'a self, value: Value, _options: &Options) -> Outputs<'a> {
        let text = match value {
            Value::Str(text) => text,
            other => return one_output(Err(StepError::invalid_input(self.name(), "str", &other))),
        };
        let pieces: Vec<String> = if self.separator.is_empty() {
            text.split_whitespace().map(str::to_string).collect()
        } else {
            text.split(self.separator.as_str()).map(str::to_string).collect()
        };
        Box::new(pieces.into_iter().map(|piece| Ok(Value::Str(piece))))
    }
}
