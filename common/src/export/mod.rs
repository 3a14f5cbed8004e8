//! Export core modules shared by the CLI table and file writers.

#[cfg(feature = "excel")]
pub mod excel_core;

use crate::dispatch::format_distance;
use crate::types::MatchResult;

/// 結果表の列見出し
pub const RESULT_COLUMNS: [&str; 6] = ["Service to", "Stop", "Kind", "Distance (km)", "Days", "Obs"];

/// 結果1件を表の1行（見出しと同じ順序）に変換
pub fn result_row(result: &MatchResult) -> [String; 6] {
    [
        result.destination.clone(),
        result.stop_name.clone(),
        result.stop_kind.to_string(),
        format_distance(result.distance_km),
        result.operating_days.clone(),
        result.observations.clone(),
    ]
}
