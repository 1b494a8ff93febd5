//! Rule qualification example
//!
//! This example demonstrates:
//! - Parsing a rule into an expression tree
//! - Evaluating the tree against input records
//! - Serializing the tree for a host to store or display

use eligo_sdk::{RuleEngine, Record, Value};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Rule Qualification Example ===\n");

    let rule = "(age > 30 AND department = 'Sales') OR (age < 25 AND department = 'Marketing')";
    let tree = RuleEngine::parse(rule)?;

    println!("Rule: {rule}");
    println!("Tree:\n{}\n", serde_json::to_string_pretty(&tree)?);

    let mut applicant = Record::new();
    applicant.insert("age".to_string(), Value::Number(20.0));
    applicant.insert(
        "department".to_string(),
        Value::String("Marketing".to_string()),
    );

    println!("Applicant: age=20, department=Marketing");
    println!("Qualified: {}\n", RuleEngine::evaluate(&tree, &applicant));

    applicant.insert("age".to_string(), Value::Number(27.0));
    println!("Applicant: age=27, department=Marketing");
    println!("Qualified: {}", RuleEngine::evaluate(&tree, &applicant));

    Ok(())
}
