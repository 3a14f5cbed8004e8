//! 配車連絡用テキストの生成

use crate::types::MatchResult;

/// 距離不明時の表記
pub const UNKNOWN_DISTANCE: &str = "unknown";

/// 距離を表示用の文字列に変換（小数第1位）
pub fn format_distance(distance_km: Option<f64>) -> String {
    match distance_km {
        Some(d) => format!("{:.1}", d),
        None => UNKNOWN_DISTANCE.to_string(),
    }
}

/// 検索結果を連絡用の1つのテキストにまとめる
///
/// ```
/// use minibus_finder_common::format_dispatch_message;
///
/// let text = format_dispatch_message("Ataliva", "Santa Fe", &[]);
/// assert_eq!(text, "Passenger at Ataliva. Destination: Santa Fe.\nMinibus options:\n");
/// ```
pub fn format_dispatch_message(origin: &str, destination: &str, results: &[MatchResult]) -> String {
    let mut text = format!(
        "Passenger at {}. Destination: {}.\nMinibus options:\n",
        origin, destination
    );

    let lines: Vec<String> = results
        .iter()
        .map(|r| {
            format!(
                "- Stop: {} | Dist: {} km | Days: {} | Obs: {}",
                r.stop_name,
                format_distance(r.distance_km),
                r.operating_days,
                r.observations
            )
        })
        .collect();
    text.push_str(&lines.join("\n"));

    text
}
