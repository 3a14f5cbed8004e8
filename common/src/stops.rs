//! 中間停留所の展開
//!
//! 自由記述の停留所リストを `StopSpec` の列に変換する。
//!
//! 記法: `名前[@座標]` を `;` `,` `|` で区切る。
//! 例: `Humboldt@-31.40,-61.08; Pilar | Esperanza@31 26 S 60 56 W`

use crate::coordinate::parse_coordinate;
use crate::types::StopSpec;
use regex::Regex;

/// 停留所リストを展開する
///
/// - 空文字列・空白のみ → 空のリスト
/// - 順序を保持し、重複は除去しない
/// - 空の項目も残す
/// - `@` の後ろの10進ペア（`-30,-60`）はカンマで分割しない
pub fn split_intermediate_stops(text: &str) -> Vec<StopSpec> {
    lazy_static::lazy_static! {
        // 1項目: `@` の直後の10進ペアは内部のカンマも含めて1項目とする
        static ref ITEM_RE: Regex = Regex::new(
            r"^[^;,|@]*(?:@\s*[+-]?[0-9]+(?:\.[0-9]+)?\s*,\s*[+-]?[0-9]+(?:\.[0-9]+)?)?[^;,|]*"
        ).unwrap();
        static ref SEPARATOR_RE: Regex = Regex::new(r"^[;,|]\s*").unwrap();
    }

    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let mut stops = Vec::new();
    let mut rest = text;

    loop {
        let item_len = ITEM_RE.find(rest).map(|m| m.end()).unwrap_or(0);
        stops.push(parse_stop_item(&rest[..item_len]));
        rest = &rest[item_len..];

        match SEPARATOR_RE.find(rest) {
            Some(sep) => rest = &rest[sep.end()..],
            None => break,
        }
    }

    stops
}

/// 1項目を名前と座標に分解
fn parse_stop_item(item: &str) -> StopSpec {
    match item.split_once('@') {
        Some((name, coords)) => StopSpec {
            name: name.trim().to_string(),
            coordinate: parse_coordinate(coords),
        },
        None => StopSpec {
            name: item.trim().to_string(),
            coordinate: None,
        },
    }
}
