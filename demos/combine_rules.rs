//! Rule combination example
//!
//! This example demonstrates folding several independent rules into one
//! combined decision tree under the majority connective.

use eligo_sdk::RuleEngine;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Rule Combination Example ===\n");

    let rules: Vec<String> = [
        "age >= 18 AND experience > 1",
        "salary > 30000",
        "department = 'Sales' OR department = 'Marketing'",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    for rule in &rules {
        println!("Rule: {rule}");
    }

    let combined = RuleEngine::combine(&rules)?;
    println!(
        "\nCombined tree ({} leaves):\n{}",
        combined.leaf_count(),
        serde_json::to_string_pretty(&combined)?
    );

    Ok(())
}
