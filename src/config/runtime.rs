// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;
use std::time::Instant;

use crate::backends::local::LocalStepFactory;
use crate::config::{CompositeConfig, ExecutorOptions, LeafConfig, PipelineConfig, StepConfig};
use crate::engine::{
    DictStep, ListStep, LoopStep, Node, OrChain, ParallelStep, SetStep, StepChain, TupleStep,
};
use crate::errors::{CompositionError, StepResult};
use crate::observability::messages::pipeline::{
    PipelineBuilt, PipelineRunCompleted, PipelineRunFailed, PipelineRunStarted,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{Outputs, Step};
use crate::tree::RenderOptions;
use crate::types::{Options, Value};

/// A built step tree together with the options it runs with.
#[derive(Clone)]
pub struct Pipeline {
    name: String,
    root: Node,
    options: Options,
    render: RenderOptions,
}

impl Pipeline {
    pub fn new(name: impl Into<String>, root: Node) -> Self {
        Self {
            name: name.into(),
            root,
            options: Options::new(),
            render: RenderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn with_render(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn render_options(&self) -> &RenderOptions {
        &self.render
    }

    /// Runs the tree on `input`; nothing executes until the first output is pulled.
    pub fn run(&self, input: Value) -> PipelineRun<'_> {
        PipelineRun {
            pipeline: self,
            input: Some(input),
            outputs: None,
            produced: 0,
            started: None,
            finished: false,
        }
    }

    /// Runs the tree to exhaustion, stopping at the first failure.
    pub fn collect(&self, input: Value) -> StepResult<Vec<Value>> {
        self.run(input).collect()
    }

    /// Renders the tree with the pipeline's configured toggles.
    pub fn tree(&self) -> String {
        self.root.tree(&self.render)
    }
}

/// Output sequence of one pipeline run; logs the run's start and end.
pub struct PipelineRun<'a> {
    pipeline: &'a Pipeline,
    input: Option<Value>,
    outputs: Option<Outputs<'a>>,
    produced: usize,
    started: Option<Instant>,
    finished: bool,
}

impl<'a> PipelineRun<'a> {
    fn start(&mut self) -> Option<&mut Outputs<'a>> {
        if let Some(input) = self.input.take() {
            let rendered = input.to_string();
            PipelineRunStarted {
                pipeline: &self.pipeline.name,
                input: &rendered,
            }
            .log();
            self.started = Some(Instant::now());
            self.outputs = Some(self.pipeline.root.make(input, &self.pipeline.options));
        }
        self.outputs.as_mut()
    }
}

impl<'a> Iterator for PipelineRun<'a> {
    type Item = StepResult<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let item = self.start()?.next();
        match &item {
            Some(Ok(_)) => self.produced += 1,
            Some(Err(error)) => PipelineRunFailed {
                pipeline: &self.pipeline.name,
                outputs: self.produced,
                error,
            }
            .log(),
            None => {
                self.finished = true;
                PipelineRunCompleted {
                    pipeline: &self.pipeline.name,
                    outputs: self.produced,
                    duration: self.started.map(|t| t.elapsed()).unwrap_or_default(),
                }
                .log();
            }
        }
        item
    }
}

/// Pipeline builder - turns a pipeline document into a runnable [`Pipeline`].
///
/// Leaves are created through [`LocalStepFactory`]; leaves marked `parallel`
/// are wrapped in a [`ParallelStep`] configured from the document's
/// `executor` section. Every shape problem (empty composite, duplicate dict
/// key, loop without exactly two steps, unknown step or bad argument) is
/// reported here, before anything runs.
///
/// # Examples
///
/// ```
/// use stepwise::config::{parse_config, ConfigFormat, PipelineBuilder};
/// use stepwise::types::Value;
///
/// let yaml = r#"
/// pipeline:
///   chain:
///     - range
///     - step: multiply
///       args: { factor: 10 }
/// "#;
/// let cfg = parse_config(yaml, ConfigFormat::Yaml).unwrap();
/// let pipeline = PipelineBuilder::from_config(&cfg).unwrap();
///
/// assert_eq!(
///     pipeline.collect(Value::from(3)).unwrap(),
///     vec![Value::from(0), Value::from(10), Value::from(20)]
/// );
/// ```
pub struct PipelineBuilder;

impl PipelineBuilder {
    /// Build a pipeline from configuration.
    pub fn from_config(cfg: &PipelineConfig) -> Result<Pipeline, CompositionError> {
        let root = Self::build_step(&cfg.pipeline, &cfg.executor)?;

        PipelineBuilt {
            pipeline: &cfg.name,
            root: root.name(),
            size: root.size(),
            depth: root.depth(),
        }
        .log();

        Ok(Pipeline::new(cfg.name.clone(), root)
            .with_options(cfg.options.clone().into())
            .with_render(cfg.render.clone()))
    }

    /// Build one configured node and its children.
    pub fn build_step(step: &StepConfig, executor: &ExecutorOptions) -> Result<Node, CompositionError> {
        match step {
            StepConfig::Named(name) => Self::build_leaf(&LeafConfig::new(name.clone()), executor),
            StepConfig::Leaf(leaf) => Self::build_leaf(leaf, executor),
            StepConfig::Composite(composite) => Self::build_composite(composite, executor),
        }
    }

    fn build_leaf(leaf: &LeafConfig, executor: &ExecutorOptions) -> Result<Node, CompositionError> {
        let step = LocalStepFactory::create_step(leaf)?;
        if !leaf.parallel {
            return Ok(Node::from(step));
        }

        let mut parallel = ParallelStep::from_arc(step);
        if let Some(batch_size) = executor.batch_size {
            parallel = parallel.with_batch_size(batch_size);
        }
        if let Some(max_concurrency) = executor.max_concurrency {
            parallel = parallel.with_max_concurrency(max_concurrency)?;
        }
        Ok(Node::Leaf(Arc::new(parallel)))
    }

    fn build_all(steps: &[StepConfig], executor: &ExecutorOptions) -> Result<Vec<Node>, CompositionError> {
        steps
            .iter()
            .map(|step| Self::build_step(step, executor))
            .collect()
    }

    fn build_composite(
        composite: &CompositeConfig,
        executor: &ExecutorOptions,
    ) -> Result<Node, CompositionError> {
        let node: Node = match composite {
            CompositeConfig::Chain(steps) => StepChain::new(Self::build_all(steps, executor)?)?.into(),
            CompositeConfig::Or(steps) => OrChain::new(Self::build_all(steps, executor)?)?.into(),
            CompositeConfig::Loop(steps) => match Self::build_all(steps, executor)?.as_slice() {
                [step, loop_step] => LoopStep::new(step.clone(), loop_step.clone()).into(),
                other => return Err(CompositionError::LoopArity(other.len())),
            },
            CompositeConfig::Tuple(steps) => TupleStep::new(Self::build_all(steps, executor)?)?.into(),
            CompositeConfig::List(steps) => ListStep::new(Self::build_all(steps, executor)?)?.into(),
            CompositeConfig::Set(steps) => SetStep::new(Self::build_all(steps, executor)?)?.into(),
            CompositeConfig::Dict(steps) => {
                let keyed = steps
                    .iter()
                    .map(|(key, step)| Ok((key.clone(), Self::build_step(step, executor)?)))
                    .collect::<Result<Vec<_>, CompositionError>>()?;
                DictStep::new(keyed)?.into()
            }
            CompositeConfig::Isolate(step) => Self::build_step(step, executor)?.isolate(),
        };
        Ok(node)
    }
}
