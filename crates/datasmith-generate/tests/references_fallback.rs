use datasmith_core::{FieldDefinition, SeedInput};
use datasmith_generate::{GenerateOptions, GenerationEngine, GenerationError, GeneratedValue};

fn seed() -> SeedInput {
    SeedInput::from("refs")
}

#[test]
fn reference_copies_source_on_every_row() {
    let fields = vec![
        FieldDefinition::new("f-email", "email", "Email"),
        FieldDefinition::new("f-copy", "contact_email", "Reference")
            .with_option("sourceField", "email"),
        FieldDefinition::new("f-chain", "backup_email", "Reference")
            .with_option("source_field", "contact_email"),
    ];
    let result = GenerationEngine::default()
        .generate_rows(&fields, 100, Some(&seed()))
        .expect("generation succeeds");

    assert_eq!(result.report.unresolved_references, 0);
    for row in &result.rows {
        let source = row.get("email").expect("email present");
        assert!(!source.is_null());
        assert_eq!(row.get("contact_email"), Some(source));
        assert_eq!(row.get("backup_email"), Some(source));
    }
}

#[test]
fn reference_may_precede_its_source() {
    let fields = vec![
        FieldDefinition::new("f-copy", "copy", "Reference").with_option("sourceField", "n"),
        FieldDefinition::new("f-n", "n", "Number"),
    ];
    let result = GenerationEngine::default()
        .generate_rows(&fields, 10, Some(&seed()))
        .expect("generation succeeds");
    for row in &result.rows {
        assert_eq!(row.get("copy"), row.get("n"));
        assert_eq!(row.names().collect::<Vec<_>>(), vec!["copy", "n"]);
    }
}

#[test]
fn dangling_reference_is_null_by_default() {
    let fields = vec![
        FieldDefinition::new("f-n", "n", "Number"),
        FieldDefinition::new("f-ghost", "ghost", "Reference").with_option("sourceField", "nope"),
        FieldDefinition::new("f-empty", "empty", "Reference"),
    ];
    let result = GenerationEngine::default()
        .generate_rows(&fields, 4, Some(&seed()))
        .expect("lenient generation succeeds");
    assert_eq!(result.report.unresolved_references, 8);
    assert!(result
        .rows
        .iter()
        .all(|row| row.get("ghost") == Some(&GeneratedValue::Null)));
}

#[test]
fn strict_mode_rejects_dangling_reference() {
    let fields = vec![
        FieldDefinition::new("f-n", "n", "Number"),
        FieldDefinition::new("f-ghost", "ghost", "Reference").with_option("sourceField", "nope"),
    ];
    let engine = GenerationEngine::new(GenerateOptions {
        strict_references: true,
        ..GenerateOptions::default()
    });
    let err = engine
        .generate_rows(&fields, 4, Some(&seed()))
        .expect_err("strict generation fails");
    assert!(matches!(err, GenerationError::InvalidSchema(_)));
}

#[test]
fn fallback_flag_tracks_ai_generated_fields() {
    let mut fields = vec![
        FieldDefinition::new("f-n", "n", "Number"),
        FieldDefinition::new("f-b", "flag", "Boolean"),
    ];
    let engine = GenerationEngine::default();
    let plain = engine
        .generate_rows(&fields, 5, Some(&seed()))
        .expect("plain run");
    assert!(!plain.used_fallback);
    assert!(plain.report.fallback_fields.is_empty());

    fields.push(
        FieldDefinition::new("f-ai", "bio", "AI Generated")
            .with_option("examples", serde_json::json!(["quiet", "loud"])),
    );
    let flagged = engine
        .generate_rows(&fields, 5, Some(&seed()))
        .expect("fallback run");
    assert!(flagged.used_fallback);
    assert_eq!(flagged.report.fallback_fields, vec!["bio".to_string()]);
    assert!(flagged.rows.iter().all(|row| matches!(
        row.get("bio").and_then(GeneratedValue::as_str),
        Some("quiet") | Some("loud")
    )));
}

#[test]
fn unknown_kind_and_empty_list_fall_back() {
    let fields = vec![
        FieldDefinition::new("f-x", "mystery", "Hologram"),
        FieldDefinition::new("f-l", "tier", "Custom List").with_option("values", ""),
    ];
    let result = GenerationEngine::default()
        .generate_rows(&fields, 3, Some(&seed()))
        .expect("generation succeeds");
    assert!(result.used_fallback);
    assert_eq!(result.report.fallback_fields.len(), 2);
    assert!(result.rows.iter().all(|row| row
        .get("mystery")
        .and_then(GeneratedValue::as_str)
        .is_some_and(|value| !value.is_empty())));
}

#[test]
fn request_preconditions_are_enforced() {
    let fields = vec![FieldDefinition::new("f-n", "n", "Number")];
    let engine = GenerationEngine::new(GenerateOptions {
        max_rows: 10,
        ..GenerateOptions::default()
    });

    assert!(matches!(
        engine.generate_rows(&fields, 0, Some(&seed())),
        Err(GenerationError::InvalidRequest(_))
    ));
    assert!(matches!(
        engine.generate_rows(&fields, 11, Some(&seed())),
        Err(GenerationError::InvalidRequest(_))
    ));
    assert!(matches!(
        engine.generate_rows(&[], 1, Some(&seed())),
        Err(GenerationError::InvalidRequest(_))
    ));
    assert!(engine.generate_rows(&fields, 10, Some(&seed())).is_ok());
}
