// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::process;

use anyhow::{bail, Context, Result};
use stepwise::config::{load_config, PipelineBuilder};
use stepwise::types::Value;
use tracing_subscriber::EnvFilter;

/// Command line settings
struct Args {
    config: String,
    input: String,
    tree: bool,
    full: bool,
    show_union: bool,
    json: bool,
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {} <pipeline.yaml|pipeline.toml> <input> [--tree] [--full] [--show-union] [--json]\n\
         Example: {} configs/multiples.yaml 10 --tree",
        program, program
    )
}

fn parse_args(args: &[String]) -> Result<Args> {
    let program = args.first().map(String::as_str).unwrap_or("stepwise");
    let mut positional = Vec::new();
    let mut parsed = Args {
        config: String::new(),
        input: String::new(),
        tree: false,
        full: false,
        show_union: false,
        json: false,
    };

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--tree" => parsed.tree = true,
            "--full" => parsed.full = true,
            "--show-union" => parsed.show_union = true,
            "--json" => parsed.json = true,
            flag if flag.starts_with("--") => bail!("unknown flag '{}'\n{}", flag, usage(program)),
            value => positional.push(value.to_string()),
        }
    }

    match <[String; 2]>::try_from(positional) {
        Ok([config, input]) => {
            parsed.config = config;
            parsed.input = input;
            Ok(parsed)
        }
        Err(_) => bail!("{}", usage(program)),
    }
}

/// Input is read as a YAML literal (`10`, `[1, 2]`, `{a: 1}`); anything else is a plain string.
fn parse_input(raw: &str) -> Value {
    serde_yaml::from_str::<Value>(raw).unwrap_or_else(|_| Value::from(raw))
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args.config)
        .with_context(|| format!("failed to load pipeline {}", args.config))?;
    let pipeline = PipelineBuilder::from_config(&config)
        .with_context(|| format!("failed to build pipeline {}", args.config))?;

    if args.tree {
        let mut render = pipeline.render_options().clone();
        render.full |= args.full;
        render.show_union |= args.show_union;
        println!("{}", pipeline.root().tree(&render));
        println!();
    }

    for output in pipeline.run(parse_input(&args.input)) {
        let value = output.context("pipeline run failed")?;
        if args.json {
            println!("{}", serde_json::to_string(&value)?);
        } else {
            println!("{}", value);
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let result = parse_args(&args).and_then(run);

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        process::exit(1);
    }
}
