// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;

use stepwise::config::{load_config, PipelineBuilder};
use stepwise::types::Value;

/// Demo running a pipeline document
/// Usage: cargo run --example config_pipeline_demo <config_file> <input>
fn run_config_pipeline_demo(config_file: &str, input: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Configured Pipeline Demo ===\n");

    println!("Loading configuration from {}...", config_file);
    let config = load_config(config_file)?;
    println!("- Name: {}", config.name);
    println!("- Max Concurrency: {:?}", config.executor.max_concurrency);
    println!("- Batch Size: {:?}", config.executor.batch_size);

    let pipeline = PipelineBuilder::from_config(&config)?;
    println!("\nStep tree ({} nodes, depth {}):", pipeline.root().size(), pipeline.root().depth());
    println!("{}", pipeline.tree());

    let input: Value = serde_yaml::from_str(input).unwrap_or_else(|_| Value::from(input));
    println!("\nInput: {}", input);

    let outputs = pipeline.collect(input)?;
    println!("Outputs ({}):", outputs.len());
    for output in &outputs {
        println!("  {}", output);
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config_file, input) = match args.as_slice() {
        [_, config_file, input] => (config_file.as_str(), input.as_str()),
        [_, config_file] => (config_file.as_str(), "10"),
        _ => ("configs/multiples.yaml", "10"),
    };

    if let Err(e) = run_config_pipeline_demo(config_file, input) {
        eprintln!("Demo failed: {}", e);
        std::process::exit(1);
    }
}
