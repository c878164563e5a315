// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::errors::ConfigError;
use crate::observability::messages::config::{ConfigLoaded, ConfigRejected};
use crate::observability::messages::StructuredLog;
use crate::tree::RenderOptions;
use crate::types::Value;

/// A pipeline document: one step tree plus the settings it runs with.
///
/// # Fields
/// * `name` - Pipeline name used in logs (optional, defaults to "pipeline")
/// * `options` - Options forwarded unchanged to every step invocation
/// * `render` - Tree rendering toggles used by `Pipeline::tree`
/// * `executor` - Settings for leaves marked `parallel`
/// * `pipeline` - The step tree
///
/// # Example
/// ```yaml
/// name: multiples
/// executor:
///   max_concurrency: 4
///   batch_size: 16
/// pipeline:
///   chain:
///     - step: range
///     - step: multiply
///       args: { factor: 10 }
///       parallel: true
///     - or:
///         - step: divisible_by
///           args: { divisor: 20 }
///         - step: constant
///           args: { value: -1 }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub options: BTreeMap<String, Value>,
    #[serde(default)]
    pub render: RenderOptions,
    #[serde(default)]
    pub executor: ExecutorOptions,
    pub pipeline: StepConfig,
}

fn default_name() -> String {
    "pipeline".to_string()
}

/// Settings for leaves marked `parallel: true`.
///
/// # Fields
/// * `max_concurrency` - Worker threads per parallel leaf (optional, rayon's global pool when absent)
/// * `batch_size` - Inputs pulled per batch (optional)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExecutorOptions {
    pub max_concurrency: Option<usize>,
    pub batch_size: Option<usize>,
}

/// One node of a configured step tree.
///
/// A bare string is shorthand for a leaf without arguments.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StepConfig {
    Named(String),
    Leaf(LeafConfig),
    Composite(CompositeConfig),
}

/// A built-in step and its arguments.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LeafConfig {
    pub step: String,
    #[serde(default)]
    pub args: BTreeMap<String, Value>,
    #[serde(default)]
    pub parallel: bool,
}

impl LeafConfig {
    pub fn new(step: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            args: BTreeMap::new(),
            parallel: false,
        }
    }

    pub fn with_arg(mut self, name: impl Into<String>, value: Value) -> Self {
        self.args.insert(name.into(), value);
        self
    }

    pub fn parallel(mut self) -> Self {
        self.parallel = true;
        self
    }
}

/// A composite written as a single-key map naming its kind.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeConfig {
    Chain(Vec<StepConfig>),
    Loop(Vec<StepConfig>),
    Or(Vec<StepConfig>),
    Tuple(Vec<StepConfig>),
    List(Vec<StepConfig>),
    Dict(IndexMap<String, StepConfig>),
    Set(Vec<StepConfig>),
    Isolate(Box<StepConfig>),
}

/// Pipeline document formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "toml" => Ok(ConfigFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Toml => "toml",
        }
    }
}

/// Parse a pipeline document from a string.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<PipelineConfig, ConfigError> {
    let cfg = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
    };
    Ok(cfg)
}

/// Load a pipeline document from a `.yaml`, `.yml` or `.toml` file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PipelineConfig, ConfigError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let result = ConfigFormat::from_path(path).and_then(|format| {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse_config(&content, format).map(|cfg| (format, cfg))
    });

    match result {
        Ok((format, cfg)) => {
            ConfigLoaded {
                path: &display,
                format: format.as_str(),
                pipeline: &cfg.name,
            }
            .log();
            Ok(cfg)
        }
        Err(error) => {
            ConfigRejected {
                path: &display,
                error: &error,
            }
            .log();
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
name: basic
options:
  verbose: true
pipeline:
  chain:
    - step: range
    - step: multiply
      args:
        factor: 10
"#;
        let cfg = parse_config(yaml, ConfigFormat::Yaml).unwrap();

        assert_eq!(cfg.name, "basic");
        assert_eq!(cfg.options.get("verbose"), Some(&Value::Bool(true)));
        assert_eq!(cfg.executor, ExecutorOptions::default());
        assert_eq!(
            cfg.pipeline,
            StepConfig::Composite(CompositeConfig::Chain(vec![
                StepConfig::Leaf(LeafConfig::new("range")),
                StepConfig::Leaf(LeafConfig::new("multiply").with_arg("factor", Value::from(10))),
            ]))
        );
    }

    #[test]
    fn parse_named_shorthand_and_defaults() {
        let cfg = parse_config("pipeline: chars", ConfigFormat::Yaml).unwrap();

        assert_eq!(cfg.name, "pipeline");
        assert_eq!(cfg.pipeline, StepConfig::Named("chars".to_string()));
        assert_eq!(cfg.render, RenderOptions::default());
    }

    #[test]
    fn parse_dict_keeps_declaration_order() {
        let yaml = r#"
pipeline:
  dict:
    zulu: stub
    alpha: stub
    mike: stub
"#;
        let cfg = parse_config(yaml, ConfigFormat::Yaml).unwrap();
        match cfg.pipeline {
            StepConfig::Composite(CompositeConfig::Dict(steps)) => {
                let keys: Vec<&str> = steps.keys().map(String::as_str).collect();
                assert_eq!(keys, vec!["zulu", "alpha", "mike"]);
            }
            other => panic!("expected a dict, got {:?}", other),
        }
    }

    #[test]
    fn parse_toml_config() {
        let toml = r#"
name = "from-toml"

[render]
show_union = true

[executor]
batch_size = 8

[pipeline]
loop = ["identity", { step = "add", args = { amount = 1 } }]
"#;
        let cfg = parse_config(toml, ConfigFormat::Toml).unwrap();

        assert_eq!(cfg.name, "from-toml");
        assert!(cfg.render.show_union);
        assert_eq!(cfg.executor.batch_size, Some(8));
        assert!(matches!(
            cfg.pipeline,
            StepConfig::Composite(CompositeConfig::Loop(ref steps)) if steps.len() == 2
        ));
    }

    #[test]
    fn reject_unknown_composite() {
        let result = parse_config("pipeline:\n  zip: [stub, stub]\n", ConfigFormat::Yaml);
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.yml")).unwrap(), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.YAML")).unwrap(), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.toml")).unwrap(), ConfigFormat::Toml);
        assert!(matches!(
            ConfigFormat::from_path(Path::new("a.json")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }
}
