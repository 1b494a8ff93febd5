//! End-to-end integration tests for the Eligo SDK
//!
//! Exercises the full surface a host consumes: parse, evaluate, infer,
//! combine, and validate, including the serialized shapes hosts marshal.

use eligo_sdk::{
    CombinedNode, Connective, FieldType, Node, Record, RuleEngine, SdkError, Value,
};

fn record(entries: &[(&str, Value)]) -> Record {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn test_parse_evaluate_qualifies() {
    let tree = RuleEngine::parse("age > 30 AND department = 'Sales'").unwrap();

    let qualified = RuleEngine::evaluate(
        &tree,
        &record(&[
            ("age", Value::Number(32.0)),
            ("department", Value::String("Sales".to_string())),
        ]),
    );
    assert!(qualified);

    let qualified = RuleEngine::evaluate(
        &tree,
        &record(&[
            ("age", Value::Number(32.0)),
            ("department", Value::String("Marketing".to_string())),
        ]),
    );
    assert!(!qualified);
}

#[test]
fn test_parse_error_surfaces_verbatim() {
    let err = RuleEngine::parse("(age > 30").unwrap_err();
    assert!(matches!(err, SdkError::ParseError(_)));
    assert!(err.to_string().contains("Unbalanced parentheses"));
}

#[test]
fn test_infer_from_text_and_tree() {
    let rule = "age > 30.5 AND department = 'Sales'";

    let from_text = RuleEngine::infer_from_text(rule);
    assert_eq!(from_text.get("age"), Some(&FieldType::Double));
    assert_eq!(from_text.get("department"), Some(&FieldType::String));

    let tree = RuleEngine::parse("age > 30 AND department = 'Sales'").unwrap();
    let from_tree = RuleEngine::infer_from_tree(&tree);
    assert_eq!(from_tree.get("age"), Some(&FieldType::Integer));
}

#[test]
fn test_combine_majority_vote() {
    let rules: Vec<String> = ["age >= 18 AND x > 1", "y > 2", "z = 'a' OR w > 5"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let combined = RuleEngine::combine(&rules).unwrap();
    assert_eq!(combined.leaf_count(), 3);
    assert!(matches!(
        combined,
        CombinedNode::LogicalExpression {
            operator: Connective::And,
            ..
        }
    ));
}

#[test]
fn test_combine_empty_is_invalid_argument() {
    let err = RuleEngine::combine(&[]).unwrap_err();
    assert!(matches!(err, SdkError::CompileError(_)));
}

#[test]
fn test_validate_produces_persistable_record() {
    let validated = RuleEngine::validate("eligibility", "age >= 18 AND salary > 30000").unwrap();

    let json = serde_json::to_value(&validated).unwrap();
    assert_eq!(json["name"], "eligibility");
    assert_eq!(json["rule"], "age >= 18 AND salary > 30000");
    assert_eq!(json["tree"]["type"], "operator");
    assert_eq!(json["field_types"]["age"], "integer");
    assert_eq!(json["field_types"]["salary"], "integer");
}

#[test]
fn test_host_marshals_tree_as_plain_json() {
    let tree = RuleEngine::parse("(a > 1 OR b > 2) AND c = 'x'").unwrap();

    // A host round-trips the tree through its own JSON layer and hands it
    // back for evaluation unchanged.
    let json = serde_json::to_string(&tree).unwrap();
    let restored: Node = serde_json::from_str(&json).unwrap();

    let qualified = RuleEngine::evaluate(
        &restored,
        &record(&[
            ("a", Value::Number(2.0)),
            ("b", Value::Number(0.0)),
            ("c", Value::String("x".to_string())),
        ]),
    );
    assert!(qualified);
}

#[test]
fn test_evaluation_is_idempotent() {
    let tree = RuleEngine::parse("age > 30").unwrap();
    let input = record(&[("age", Value::Number(31.0))]);

    assert_eq!(
        RuleEngine::evaluate(&tree, &input),
        RuleEngine::evaluate(&tree, &input)
    );
}
