// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use stepwise::backends::local::steps::{Add, Constant, DivisibleBy, Identity, Multiply, OneOf, Range};
use stepwise::engine::{leaf, RawSteps};
use stepwise::traits::Step;
use stepwise::tree::RenderOptions;
use stepwise::types::{Options, Value};

/// Demo composing steps with the operator API: chain, loop, or and a dict packer
fn run_pipeline_demo() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Stepwise Operator Pipeline Demo ===\n");

    // range(n) -> x10 -> keep multiples of 20, otherwise -1
    let tree = leaf(Range::new())
        >> leaf(Multiply::new(10))
        >> !(leaf(DivisibleBy::new(20)?) | leaf(Constant::new(Value::from(-1))));

    println!("Expression: {}", tree);
    println!("\nTree:\n{}", tree.tree(&RenderOptions::default()));
    println!("\nTree (show_union):\n{}", tree.tree(&RenderOptions::show_union()));

    let outputs = tree
        .make(Value::from(6), &Options::new())
        .collect::<Result<Vec<_>, _>>()?;
    println!("\nOutputs for 6: {:?}", outputs);

    // Count up from each input until the value leaves 1..=5
    let counter = leaf(Range::starting_at(1))
        >> leaf(Identity::new())
        << (leaf(Add::new(1)) >> leaf(OneOf::new((1..=5).map(Value::from).collect())));
    let counted = counter
        .make(Value::from(4), &Options::new())
        .collect::<Result<Vec<_>, _>>()?;
    println!("\nLoop expression: {}", counter);
    println!("Loop outputs for 4: {:?}", counted);

    // Pack every value into a dict of parity checks
    let packed = leaf(Range::new()).bind_raw(RawSteps::Dict(vec![
        ("value".to_string(), leaf(Identity::new())),
        ("even".to_string(), leaf(DivisibleBy::new(2)?)),
    ]))?;
    println!("\nPacked tree:\n{}", packed.tree(&RenderOptions::full()));
    for output in packed.make(Value::from(4), &Options::new()) {
        println!("  {}", output?);
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}

fn main() {
    if let Err(e) = run_pipeline_demo() {
        eprintln!("Demo failed: {}", e);
        std::process::exit(1);
    }
}
