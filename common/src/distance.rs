//! 大円距離（ハーバーサイン公式）

use crate::types::Coordinate;

/// 地球半径（km）
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// 2点間の大円距離（km）
///
/// 入力の範囲チェックは行わない。
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1_rad = a.lat.to_radians();
    let lat2_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// 小数第1位で丸める
pub fn round_km(distance: f64) -> f64 {
    (distance * 10.0).round() / 10.0
}
