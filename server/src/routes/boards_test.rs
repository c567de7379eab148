use std::path::PathBuf;

use boards::BoardRegistry;

use super::*;

#[test]
fn summary_carries_manifest_path() {
    let summary = BoardSummary::from(&Board::new("esp32_dev", "ESP32 DevKit V1", "📟", ""));
    assert_eq!(summary.manifest, "manifest_esp32_dev.json");
    assert_eq!(summary.description, "");
}

#[tokio::test]
async fn list_boards_keeps_registry_order() {
    let state = AppState::new(BoardRegistry::builtin(), PathBuf::from("."));
    let Json(list) = list_boards(State(state)).await;
    let ids: Vec<&str> = list.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["esp32_dev", "esp32s3_dev"]);
    assert_eq!(list[1].manifest, "manifest_esp32s3_dev.json");
}

#[tokio::test]
async fn list_boards_serializes_as_array() {
    let state = AppState::new(BoardRegistry::builtin(), PathBuf::from("."));
    let Json(list) = list_boards(State(state)).await;
    let json = serde_json::to_value(&list).unwrap();
    assert_eq!(json[0]["id"], "esp32_dev");
    assert_eq!(json[0]["name"], "ESP32 DevKit V1");
    assert_eq!(json[0]["manifest"], "manifest_esp32_dev.json");
}
