use super::*;

fn board(id: &str) -> Board {
    Board::new(id, format!("Board {id}"), "*", "")
}

// =============================================================
// Manifest naming
// =============================================================

#[test]
fn manifest_path_wraps_id_with_prefix_and_suffix() {
    assert_eq!(manifest_path("esp32_dev"), "manifest_esp32_dev.json");
    assert_eq!(manifest_path("esp32s3_dev"), "manifest_esp32s3_dev.json");
}

#[test]
fn board_manifest_path_uses_its_id() {
    assert_eq!(board("c3_mini").manifest_path(), "manifest_c3_mini.json");
}

// =============================================================
// Builtin table
// =============================================================

#[test]
fn builtin_lists_esp32_dev_first() {
    let registry = BoardRegistry::builtin();
    let ids: Vec<&str> = registry.ids().collect();
    assert_eq!(ids, vec!["esp32_dev", "esp32s3_dev"]);
    assert_eq!(registry.first().name, "ESP32 DevKit V1");
}

#[test]
fn builtin_entries_carry_descriptions() {
    let registry = BoardRegistry::builtin();
    let s3 = registry.get("esp32s3_dev").expect("s3 board");
    assert_eq!(s3.icon, "⚡");
    assert_eq!(s3.description, "ESP32-S3 with USB OTG and more RAM");
}

#[test]
fn default_is_builtin() {
    assert_eq!(BoardRegistry::default(), BoardRegistry::builtin());
}

// =============================================================
// Validation
// =============================================================

#[test]
fn new_rejects_empty_list() {
    assert!(matches!(BoardRegistry::new(Vec::new()), Err(RegistryError::Empty)));
}

#[test]
fn new_rejects_blank_id() {
    let err = BoardRegistry::new(vec![board("a"), board("  ")]).unwrap_err();
    assert!(matches!(err, RegistryError::BlankId));
}

#[test]
fn new_rejects_duplicate_id() {
    let err = BoardRegistry::new(vec![board("a"), board("b"), board("a")]).unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateId(ref id) if id == "a"));
}

#[test]
fn new_keeps_given_order() {
    let registry = BoardRegistry::new(vec![board("z"), board("a"), board("m")]).expect("registry");
    let ids: Vec<&str> = registry.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["z", "a", "m"]);
    assert_eq!(registry.first().id, "z");
    assert_eq!(registry.len(), 3);
    assert!(!registry.is_empty());
}

#[test]
fn lookup_by_id() {
    let registry = BoardRegistry::new(vec![board("a"), board("b")]).expect("registry");
    assert!(registry.contains("b"));
    assert!(!registry.contains("c"));
    assert_eq!(registry.get("a").map(|b| b.name.as_str()), Some("Board a"));
}

// =============================================================
// JSON loading
// =============================================================

#[test]
fn from_json_preserves_key_order() {
    let text = r#"{
        "zeta": {"name": "Zeta", "icon": "Z"},
        "alpha": {"name": "Alpha", "icon": "A", "description": "first letter"}
    }"#;
    let registry = BoardRegistry::from_json(text).expect("registry");
    let ids: Vec<&str> = registry.ids().collect();
    assert_eq!(ids, vec!["zeta", "alpha"]);
}

#[test]
fn from_json_defaults_missing_description_to_empty() {
    let registry = BoardRegistry::from_json(r#"{"x": {"name": "X", "icon": "x"}}"#).expect("registry");
    assert_eq!(registry.first().description, "");
}

#[test]
fn from_json_matches_builtin_shape() {
    let text = r#"{
        "esp32_dev": {"name": "ESP32 DevKit V1", "icon": "📟", "description": "Standard ESP32 development board"},
        "esp32s3_dev": {"name": "ESP32-S3 DevKit", "icon": "⚡", "description": "ESP32-S3 with USB OTG and more RAM"}
    }"#;
    assert_eq!(BoardRegistry::from_json(text).expect("registry"), BoardRegistry::builtin());
}

#[test]
fn from_json_rejects_non_object() {
    let err = BoardRegistry::from_json(r#"["esp32_dev"]"#).unwrap_err();
    assert!(matches!(err, RegistryError::NotAnObject));
}

#[test]
fn from_json_rejects_invalid_text() {
    assert!(matches!(BoardRegistry::from_json("{not json"), Err(RegistryError::Parse(_))));
}

#[test]
fn from_json_rejects_entry_without_name() {
    let err = BoardRegistry::from_json(r#"{"x": {"icon": "x"}}"#).unwrap_err();
    assert!(matches!(err, RegistryError::Parse(_)));
}

#[test]
fn from_json_rejects_empty_object() {
    assert!(matches!(BoardRegistry::from_json("{}"), Err(RegistryError::Empty)));
}

#[test]
fn board_serializes_with_id_field() {
    let json = serde_json::to_value(board("a")).expect("json");
    assert_eq!(json["id"], "a");
    assert_eq!(json["description"], "");
}

#[test]
fn from_json_rejects_repeated_key() {
    let text = r#"{
        "a": {"name": "First", "icon": "1"},
        "b": {"name": "Other", "icon": "2"},
        "a": {"name": "Second", "icon": "3"}
    }"#;
    let err = BoardRegistry::from_json(text).unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateId(ref id) if id == "a"));
}

#[test]
fn from_json_rejects_syntax_error_outside_object() {
    assert!(matches!(BoardRegistry::from_json("[1,"), Err(RegistryError::Parse(_))));
}

// =============================================================
// JSON writing
// =============================================================

#[test]
fn to_json_is_readable_by_from_json_in_same_order() {
    let registry = BoardRegistry::new(vec![board("zeta"), Board::new("alpha", "Alpha", "A", "first letter")])
        .expect("registry");
    let text = registry.to_json();
    assert!(text.find("zeta").expect("zeta key") < text.find("alpha").expect("alpha key"));
    assert_eq!(BoardRegistry::from_json(&text).expect("registry"), registry);
}
