// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::{one_output, Outputs, Step};
use crate::types::{Options, Value};

/// Identity step - yields its input unchanged
#[derive(Debug, Clone, Default)]
pub struct Identity;

impl Identity {
    pub fn new() -> Self {
        Self
    }
}

impl Step for Identity {
    fn make<'a>(&'a self, value: Value, _options: &Options) -> Outputs<'a> {
        one_output(Ok(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_yields_input() {
        let outputs: Vec<_> = Identity::new()
            .make(Value::from("same"), &Options::new())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(outputs, vec![Value::from("same")]);
        assert_eq!(Identity::new().name(), "Identity");
    }
}
