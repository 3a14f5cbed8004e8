//! 路線・停留所・検索結果の型定義
//!
//! CLIと共有される型:
//! - RouteRow: データソースの1行（7つの名前付きテキスト列）
//! - Route: 座標を解析済みの路線
//! - Stop: 検索ごとに生成される乗車候補
//! - MatchResult: 路線ごとに選ばれた1件の検索結果

use crate::coordinate::parse_coordinate;
use serde::{Deserialize, Serialize};

/// 緯度経度（10進度）
///
/// 範囲チェックは行わない。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// データソースの1行
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteRow {
    pub origin_name: String,
    pub origin_coordinates: String,
    pub destination_name: String,
    pub destination_coordinates: String,
    pub intermediate_stops: String,
    pub operating_days: String,
    pub observations: String,
}

/// 路線（スケジュールの1エントリ）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// データソース上の行番号（0始まり）
    pub index: usize,
    pub origin_name: String,
    pub origin_coordinate: Option<Coordinate>,
    pub destination_name: String,
    pub destination_coordinate: Option<Coordinate>,
    /// 中間停留所（自由記述）
    pub intermediate_stops: String,
    pub operating_days: String,
    pub observations: String,
}

impl Route {
    /// 行データから路線を作成（座標はここで一度だけ解析する）
    pub fn from_row(index: usize, row: RouteRow) -> Self {
        Self {
            index,
            origin_coordinate: parse_coordinate(&row.origin_coordinates),
            destination_coordinate: parse_coordinate(&row.destination_coordinates),
            origin_name: row.origin_name,
            destination_name: row.destination_name,
            intermediate_stops: row.intermediate_stops,
            operating_days: row.operating_days,
            observations: row.observations,
        }
    }
}

/// 停留所の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopKind {
    /// 路線の始発地（cabecera）
    Header,
    /// 中間停留所
    Intermediate,
}

impl std::fmt::Display for StopKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopKind::Header => write!(f, "header"),
            StopKind::Intermediate => write!(f, "intermediate"),
        }
    }
}

/// 中間停留所の記述（名前と任意の座標）
#[derive(Debug, Clone, PartialEq)]
pub struct StopSpec {
    pub name: String,
    pub coordinate: Option<Coordinate>,
}

/// 乗車候補（検索ごとに生成し、検索後に破棄）
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// 所属する路線の行番号
    pub route_index: usize,
    pub name: String,
    pub coordinate: Option<Coordinate>,
    pub kind: StopKind,
}

/// 検索結果（路線ごとに1件）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub route_index: usize,
    /// 路線の目的地（Servicio hacia）
    pub destination: String,
    pub stop_name: String,
    pub stop_kind: StopKind,
    #[serde(default)]
    pub stop_coordinate: Option<Coordinate>,
    /// 距離（km、小数第1位で丸め）。利用者の位置が不明なら None
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub operating_days: String,
    #[serde(default)]
    pub observations: String,
}
