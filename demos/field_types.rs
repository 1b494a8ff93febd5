//! Field type inference example
//!
//! This example demonstrates:
//! - Validating a named rule (parse + inference in one step)
//! - The divergence between text-side and tree-side inference on
//!   decimal literals

use eligo_sdk::{RuleEngine, TypeInference};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Field Type Inference Example ===\n");

    let validated = RuleEngine::validate(
        "sales_eligibility",
        "age > 30 AND department = 'Sales' AND rating >= 4.5",
    )?;

    println!("Validated rule: {}", validated.name);
    println!(
        "Field types:\n{}\n",
        serde_json::to_string_pretty(&validated.field_types)?
    );

    // Tree-side inference recognizes only integers and quoted strings,
    // so the decimal rating classifies by its integer prefix.
    let from_tree = TypeInference::infer_from_tree(&validated.tree);
    println!(
        "From the tree instead:\n{}",
        serde_json::to_string_pretty(&from_tree)?
    );

    Ok(())
}
