//! 設定ファイルテスト

use minibus_finder::config::{ColumnMapping, Config};
use tempfile::tempdir;

/// 設定ファイルがなければ既定値
#[test]
fn test_load_missing_config_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();

    assert_eq!(config.max_results, 7);
    assert_eq!(config.timeout_seconds, 30);
    assert_eq!(config.columns, ColumnMapping::default());
}

/// 保存と読み込み
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.source = "rutas.xlsx".into();
    config.max_results = 3;
    config.columns.observations = "NOTAS".into();
    config.save_to(&path).expect("設定保存失敗");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.source, "rutas.xlsx");
    assert_eq!(loaded.max_results, 3);
    assert_eq!(loaded.columns.observations, "NOTAS");
    assert_eq!(loaded.columns.origin_name, "LOCALIDAD DE ORIGEN");
}

/// 列見出しはcamelCaseで保存される
#[test]
fn test_column_mapping_json_keys() {
    let json = serde_json::to_string(&ColumnMapping::default()).unwrap();
    assert!(json.contains("\"originName\""));
    assert!(json.contains("\"intermediateStops\""));
}
