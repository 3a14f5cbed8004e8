//! 検索テスト
//!
//! 一時ファイルのCSVを読み込み、出発地・目的地から最寄り停留所を検索する

use minibus_finder::config::Config;
use minibus_finder::source::{load_routes, DataSource};
use minibus_finder_common::{format_dispatch_message, search, Error, Route, StopKind};
use tempfile::{tempdir, TempDir};

const SCHEDULE: &str = "\u{feff}LOCALIDAD DE ORIGEN,COORDENADAS ORIGEN,LOCALIDAD DE DESTINO,COORDENADAS DESTINO,PARADAS INTERMEDIAS,DIAS OPERATIVOS,OBSERVACIONES
Ataliva,\"-30.9981, -61.4320\",Santa Fe,\"-31.6333, -60.7000\",\"Humboldt@-31.4010,-61.0810; Pilar@-31.4390,-61.2570\",Lun a Vie,Sale 6:00
Rafaela,\"31°15'11\"\"S 61°29'12\"\"W\",Santa Fe,\"-31.6333, -60.7000\",Esperanza@-31.4490,-60.9310,Lun a Sab,
Sunchales,,Rafaela,,Lehmann,Diario,Sin coordenadas
Ataliva,\"-30.9981, -61.4320\",Sa Pereira,,Galisteo,Mar y Jue,
";

async fn load_schedule() -> (TempDir, Vec<Route>) {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("rutas.csv");
    std::fs::write(&path, SCHEDULE).unwrap();

    let routes = load_routes(&DataSource::Local(path), &Config::default())
        .await
        .expect("路線表の読み込み失敗");
    (dir, routes)
}

/// 出発地名が路線の始発地と一致する場合
#[tokio::test]
async fn test_search_from_known_origin() {
    let (_dir, routes) = load_schedule().await;
    assert_eq!(routes.len(), 4);

    let results = search(&routes, "Ataliva", "santa fe", 7).unwrap();

    // Santa Fe 行きは2路線、それぞれ1件
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].route_index, 0);
    assert_eq!(results[0].stop_name, "Ataliva");
    assert_eq!(results[0].stop_kind, StopKind::Header);
    assert_eq!(results[0].distance_km, Some(0.0));

    assert_eq!(results[1].route_index, 1);
    assert_eq!(results[1].destination, "Santa Fe");
    assert!(results[1].distance_km.unwrap() > 0.0);
}

/// 座標で出発地を指定した場合
#[tokio::test]
async fn test_search_from_coordinates() {
    let (_dir, routes) = load_schedule().await;

    // Humboldt のすぐ近く
    let results = search(&routes, "-31.40, -61.08", "Santa Fe", 7).unwrap();

    assert_eq!(results[0].stop_name, "Humboldt");
    assert_eq!(results[0].stop_kind, StopKind::Intermediate);
    assert!(results[0].distance_km.unwrap() < 1.0);
    for pair in results.windows(2) {
        assert!(pair[0].distance_km.unwrap() <= pair[1].distance_km.unwrap());
    }
}

/// 度分秒の座標が読み込まれること
#[tokio::test]
async fn test_dms_coordinates_in_table() {
    let (_dir, routes) = load_schedule().await;
    let rafaela = routes[1].origin_coordinate.expect("度分秒の座標");

    assert!((rafaela.lat - -31.25306).abs() < 1e-4);
    assert!((rafaela.lon - -61.48667).abs() < 1e-4);
}

/// 位置が分からない場合は名前の一致、次に始発地
#[tokio::test]
async fn test_search_unknown_location() {
    let (_dir, routes) = load_schedule().await;

    let results = search(&routes, "Lehmann", "Rafaela", 7).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].stop_name, "Lehmann");
    assert_eq!(results[0].distance_km, None);

    let results = search(&routes, "Ciudad Desconocida", "Rafaela", 7).unwrap();
    assert_eq!(results[0].stop_name, "Sunchales");
    assert_eq!(results[0].stop_kind, StopKind::Header);
}

/// 目的地はアクセント・大文字小文字を無視した部分一致
#[tokio::test]
async fn test_destination_normalized_substring() {
    let (_dir, routes) = load_schedule().await;

    let results = search(&routes, "Ataliva", "PEREIRA", 7).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].destination, "Sa Pereira");

    let results = search(&routes, "Ataliva", "Santa Fé", 7).unwrap();
    assert_eq!(results.len(), 2);
}

/// 目的地に向かう路線がない場合
#[tokio::test]
async fn test_search_no_destination() {
    let (_dir, routes) = load_schedule().await;

    let err = search(&routes, "Ataliva", "Reconquista", 7).unwrap_err();
    assert!(matches!(err, Error::NoDestinationMatch(d) if d == "Reconquista"));
}

/// 表示件数の上限
#[tokio::test]
async fn test_search_max_results() {
    let (_dir, routes) = load_schedule().await;

    let results = search(&routes, "Ataliva", "Santa Fe", 1).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].stop_name, "Ataliva");
}

/// 配車連絡用テキスト
#[tokio::test]
async fn test_dispatch_message_from_search() {
    let (_dir, routes) = load_schedule().await;

    let results = search(&routes, "Ataliva", "Santa Fe", 1).unwrap();
    let text = format_dispatch_message("Ataliva", "Santa Fe", &results);

    assert_eq!(
        text,
        "Passenger at Ataliva. Destination: Santa Fe.\n\
         Minibus options:\n\
         - Stop: Ataliva | Dist: 0.0 km | Days: Lun a Vie | Obs: Sale 6:00"
    );
}
