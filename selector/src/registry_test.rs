use super::*;

#[test]
fn no_inline_source_uses_builtin() {
    assert_eq!(resolve(None), BoardRegistry::builtin());
}

#[test]
fn blank_inline_source_uses_builtin() {
    assert_eq!(resolve(Some("  \n ")), BoardRegistry::builtin());
}

#[test]
fn valid_inline_source_replaces_builtin() {
    let registry = resolve(Some(r#"{"c3_mini": {"name": "ESP32-C3 Mini", "icon": "🔹"}}"#));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.first().id, "c3_mini");
}

#[test]
fn invalid_inline_source_falls_back_to_builtin() {
    assert_eq!(resolve(Some("{broken")), BoardRegistry::builtin());
    assert_eq!(resolve(Some("{}")), BoardRegistry::builtin());
}
