//! 路線照合モジュール
//!
//! ## 処理フロー
//! 1. 目的地（正規化後の部分一致）で路線を絞り込む
//! 2. 利用者の位置を決定（始発地名の完全一致 → 座標入力の解析）
//! 3. 路線ごとに乗車候補を生成（始発地 + 中間停留所）
//! 4. 位置が分かれば各候補までの距離を計算
//! 5. 路線ごとに最良の候補を1件選ぶ
//! 6. 距離順（不明は最後）→ 停留所名順に並べ、件数を制限

use crate::coordinate::parse_coordinate;
use crate::distance::{haversine_km, round_km};
use crate::error::{Error, Result};
use crate::normalize::normalize_text;
use crate::stops::split_intermediate_stops;
use crate::types::{Coordinate, MatchResult, Route, Stop, StopKind};
use std::cmp::Ordering;
use std::ops::Range;
use tracing::debug;

/// 名前が空の中間停留所の表示名
pub const UNNAMED_STOP: &str = "(unnamed stop)";

/// 距離を付与した乗車候補
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub stop: Stop,
    pub distance_km: Option<f64>,
}

/// 乗車地点を検索する
///
/// # Arguments
/// * `routes` - 全路線
/// * `origin` - 利用者の出発地（地名または座標）
/// * `destination` - 目的地（部分一致）
/// * `max_results` - 最大件数（0 は 1 として扱う）
///
/// # Returns
/// * `Ok(Vec<MatchResult>)` - 路線ごとに1件、距離順
/// * `Err(Error::NoDestinationMatch)` - 目的地に到達する路線がない場合
pub fn search(
    routes: &[Route],
    origin: &str,
    destination: &str,
    max_results: usize,
) -> Result<Vec<MatchResult>> {
    let served = filter_by_destination(routes, destination);
    if served.is_empty() {
        return Err(Error::NoDestinationMatch(destination.trim().to_string()));
    }
    debug!("目的地 '{}' に到達する路線: {}件", destination, served.len());

    let user_location = resolve_user_location(routes, origin);
    match user_location {
        Some(c) => debug!("利用者の位置: {}", c),
        None => debug!("利用者の位置が不明: '{}'", origin),
    }

    // 候補を1つの配列にまとめ、路線ごとの範囲で参照する
    let mut arena: Vec<Candidate> = Vec::new();
    let mut groups: Vec<(&Route, Range<usize>)> = Vec::with_capacity(served.len());

    for route in served {
        let start = arena.len();
        arena.extend(route_candidates(route).into_iter().map(|stop| {
            let distance_km = match (user_location, stop.coordinate) {
                (Some(user), Some(coord)) => Some(haversine_km(user, coord)),
                _ => None,
            };
            Candidate { stop, distance_km }
        }));
        groups.push((route, start..arena.len()));
    }

    let mut results: Vec<MatchResult> = groups
        .into_iter()
        .filter_map(|(route, range)| {
            let best = select_best_candidate(&arena[range], origin)?;
            Some(MatchResult {
                route_index: route.index,
                destination: route.destination_name.clone(),
                stop_name: best.stop.name.clone(),
                stop_kind: best.stop.kind,
                stop_coordinate: best.stop.coordinate,
                distance_km: best.distance_km.map(round_km),
                operating_days: route.operating_days.clone(),
                observations: route.observations.clone(),
            })
        })
        .collect();

    rank_results(&mut results);
    results.truncate(max_results.max(1));

    Ok(results)
}

/// 目的地名に（正規化後の）部分文字列として `destination` を含む路線
pub fn filter_by_destination<'a>(routes: &'a [Route], destination: &str) -> Vec<&'a Route> {
    let key = normalize_text(destination);
    routes
        .iter()
        .filter(|r| normalize_text(&r.destination_name).contains(&key))
        .collect()
}

/// 利用者の位置を決定する
///
/// 1. 始発地名が完全一致する最初の路線に座標があればそれを使う
/// 2. なければ入力を座標として解析する
pub fn resolve_user_location(routes: &[Route], origin: &str) -> Option<Coordinate> {
    let key = normalize_text(origin);
    routes
        .iter()
        .find(|r| normalize_text(&r.origin_name) == key)
        .and_then(|r| r.origin_coordinate)
        .or_else(|| parse_coordinate(origin))
}

/// 路線の乗車候補（先頭は始発地）
pub fn route_candidates(route: &Route) -> Vec<Stop> {
    let header = Stop {
        route_index: route.index,
        name: route.origin_name.clone(),
        coordinate: route.origin_coordinate,
        kind: StopKind::Header,
    };

    std::iter::once(header)
        .chain(
            split_intermediate_stops(&route.intermediate_stops)
                .into_iter()
                .map(|spec| Stop {
                    route_index: route.index,
                    name: if spec.name.is_empty() {
                        UNNAMED_STOP.to_string()
                    } else {
                        spec.name
                    },
                    coordinate: spec.coordinate,
                    kind: StopKind::Intermediate,
                }),
        )
        .collect()
}

/// 1路線の候補から最良の1件を選ぶ
///
/// 優先順位:
/// 1. 距離が分かる候補のうち最短（同距離なら先に出現したもの）
/// 2. 名前に出発地を含む最初の候補
/// 3. 始発地
/// 4. 先頭の候補
pub fn select_best_candidate<'a>(candidates: &'a [Candidate], origin: &str) -> Option<&'a Candidate> {
    let nearest = candidates
        .iter()
        .filter_map(|c| c.distance_km.map(|d| (c, d)))
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(c, _)| c);
    if nearest.is_some() {
        return nearest;
    }

    let key = normalize_text(origin);
    candidates
        .iter()
        .find(|c| normalize_text(&c.stop.name).contains(&key))
        .or_else(|| candidates.iter().find(|c| c.stop.kind == StopKind::Header))
        .or_else(|| candidates.first())
}

/// 距離の昇順（不明は最後）、同距離は停留所名の昇順に並べる
pub fn rank_results(results: &mut [MatchResult]) {
    results.sort_by(|a, b| {
        compare_distance(a.distance_km, b.distance_km).then_with(|| a.stop_name.cmp(&b.stop_name))
    });
}

fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
