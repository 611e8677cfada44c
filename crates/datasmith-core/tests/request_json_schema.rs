use std::fs;
use std::path::Path;

use datasmith_core::{GenerationRequest, request_json_schema, validate_request_json};

fn load_json(path: &Path) -> serde_json::Value {
    let contents =
        fs::read_to_string(path).unwrap_or_else(|_| panic!("missing json at {}", path.display()));
    serde_json::from_str(&contents).expect("parse json")
}

fn request_schema() -> serde_json::Value {
    serde_json::to_value(request_json_schema()).expect("serialize request schema")
}

#[test]
fn example_request_validates_against_schema() {
    let request_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../requests/examples/customers.request.json");
    let request_json = load_json(&request_path);

    let report =
        validate_request_json(&request_json, &request_schema()).expect("compile request schema");
    assert!(report.errors.is_empty(), "structural errors found");

    let request: GenerationRequest =
        serde_json::from_value(request_json).expect("parse request");
    assert_eq!(request.fields.len(), 10);
    assert_eq!(request.count, 25);
}

#[test]
fn missing_fields_is_a_structural_error() {
    let request_json = serde_json::json!({ "count": 3 });
    let report =
        validate_request_json(&request_json, &request_schema()).expect("compile request schema");
    assert!(!report.errors.is_empty());
    assert!(report.errors.iter().all(|issue| issue.code == "schema_violation"));
}
