//! 座標文字列のパーサー
//!
//! 対応形式:
//! 1. 10進ペア `-30.94,-61.31`（先頭から一致、末尾の余分な文字は無視）
//! 2. 度分秒ペア `31°14'39.2"S 61°30'02.7"W`（文字列中のどこでも可）
//!
//! どちらにも一致しなければ None を返す。エラーにはしない。

use crate::types::Coordinate;
use regex::Regex;

/// 座標文字列を解析する
///
/// # Arguments
/// * `text` - 座標らしき文字列
///
/// # Returns
/// * `Some(Coordinate)` - 10進ペアまたは度分秒ペアとして解析できた場合
/// * `None` - どちらの形式にも一致しない場合
///
/// # Examples
/// ```
/// use minibus_finder_common::parse_coordinate;
///
/// let c = parse_coordinate("-30.94, -61.31").unwrap();
/// assert_eq!((c.lat, c.lon), (-30.94, -61.31));
///
/// let c = parse_coordinate("30 S 60 W").unwrap();
/// assert_eq!((c.lat, c.lon), (-30.0, -60.0));
///
/// assert!(parse_coordinate("Ataliva").is_none());
/// ```
pub fn parse_coordinate(text: &str) -> Option<Coordinate> {
    lazy_static::lazy_static! {
        static ref DECIMAL_PAIR_RE: Regex = Regex::new(
            r"^\s*([+-]?[0-9]+(?:\.[0-9]+)?)\s*,\s*([+-]?[0-9]+(?:\.[0-9]+)?)"
        ).unwrap();
        // 度・分・秒の間は数字以外なら何でも可（°, ', 空白など）。秒は分がある場合のみ
        static ref DMS_PAIR_RE: Regex = Regex::new(r"(?x)
            (?P<lat_deg>-?[0-9]+(?:\.[0-9]+)?)
            (?: [^0-9]*? (?P<lat_min>[0-9]+(?:\.[0-9]+)?)
                (?: [^0-9]*? (?P<lat_sec>[0-9]+(?:\.[0-9]+)?) )? )?
            [^0-9]*? (?P<lat_hem>[NnSs]) \s+
            (?P<lon_deg>-?[0-9]+(?:\.[0-9]+)?)
            (?: [^0-9]*? (?P<lon_min>[0-9]+(?:\.[0-9]+)?)
                (?: [^0-9]*? (?P<lon_sec>[0-9]+(?:\.[0-9]+)?) )? )?
            [^0-9]*? (?P<lon_hem>[EeWw])
        ").unwrap();
    }

    let text = text.trim();

    if let Some(caps) = DECIMAL_PAIR_RE.captures(text) {
        let lat = caps[1].parse::<f64>().ok()?;
        let lon = caps[2].parse::<f64>().ok()?;
        return Some(Coordinate::new(lat, lon));
    }

    let caps = DMS_PAIR_RE.captures(text)?;
    let component = |name: &str| -> f64 {
        caps.name(name)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .unwrap_or(0.0)
    };
    let hemisphere = |name: &str| -> char {
        caps.name(name)
            .and_then(|m| m.as_str().chars().next())
            .unwrap_or('N')
    };

    let lat = dms_to_decimal(
        component("lat_deg"),
        component("lat_min"),
        component("lat_sec"),
        hemisphere("lat_hem"),
    );
    let lon = dms_to_decimal(
        component("lon_deg"),
        component("lon_min"),
        component("lon_sec"),
        hemisphere("lon_hem"),
    );
    Some(Coordinate::new(lat, lon))
}

/// 度分秒を10進度に変換
///
/// 度の符号は無視し、半球が S/W（大文字小文字不問）なら負にする。
pub fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64, hemisphere: char) -> f64 {
    let value = degrees.abs() + minutes / 60.0 + seconds / 3600.0;
    match hemisphere.to_ascii_uppercase() {
        'S' | 'W' => -value,
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    // =============================================
    // 10進ペア
    // =============================================

    #[test]
    fn test_decimal_pair_exact() {
        for (lat, lon) in [(-30.94, -61.31), (0.0, 0.0), (12.5, 170.25), (-90.0, 180.0)] {
            let text = format!("{},{}", lat, lon);
            let c = parse_coordinate(&text).expect("10進ペアが解析できない");
            assert_eq!(c.lat, lat);
            assert_eq!(c.lon, lon);
        }
    }

    #[test]
    fn test_decimal_pair_with_whitespace_and_sign() {
        let c = parse_coordinate("  +31.5 ,  -60.25  ").unwrap();
        assert_eq!(c, Coordinate::new(31.5, -60.25));
    }

    #[test]
    fn test_decimal_pair_trailing_text_is_accepted() {
        let c = parse_coordinate("-30.94,-61.31 (plaza)").unwrap();
        assert_eq!(c, Coordinate::new(-30.94, -61.31));
    }

    #[test]
    fn test_decimal_pair_out_of_range_not_validated() {
        let c = parse_coordinate("500,-999").unwrap();
        assert_eq!(c, Coordinate::new(500.0, -999.0));
    }

    #[test]
    fn test_decimal_pair_must_start_at_beginning() {
        // 先頭が数字でなければ10進ペアではない（度分秒にも一致しない）
        assert!(parse_coordinate("km 12, 34").is_none());
    }

    // =============================================
    // 度分秒ペア
    // =============================================

    #[test]
    fn test_dms_with_marks() {
        let c = parse_coordinate("31°14'39.2\"S 61°30'02.7\"W").unwrap();
        assert_close(c.lat, -(31.0 + 14.0 / 60.0 + 39.2 / 3600.0));
        assert_close(c.lon, -(61.0 + 30.0 / 60.0 + 2.7 / 3600.0));
    }

    #[test]
    fn test_dms_degrees_only() {
        let c = parse_coordinate("30 S 60 W").unwrap();
        assert_eq!(c, Coordinate::new(-30.0, -60.0));
    }

    #[test]
    fn test_dms_degrees_and_minutes() {
        let c = parse_coordinate("30°30'N 60°15'E").unwrap();
        assert_close(c.lat, 30.5);
        assert_close(c.lon, 60.25);
    }

    #[test]
    fn test_dms_space_separated_minutes() {
        // 2つ目の数値は秒ではなく分として扱う
        let c = parse_coordinate("31 26 S 60 56 W").unwrap();
        assert_close(c.lat, -(31.0 + 26.0 / 60.0));
        assert_close(c.lon, -(60.0 + 56.0 / 60.0));
    }

    #[test]
    fn test_dms_lowercase_hemisphere() {
        let c = parse_coordinate("30 14 39 s 61 30 2 w").unwrap();
        assert!(c.lat < 0.0);
        assert!(c.lon < 0.0);
    }

    #[test]
    fn test_dms_negative_degrees_use_hemisphere_sign() {
        let north = parse_coordinate("-30 N -60 E").unwrap();
        assert_eq!(north, Coordinate::new(30.0, 60.0));
    }

    #[test]
    fn test_dms_found_inside_text() {
        let c = parse_coordinate("frente a la plaza 30 S 60 W").unwrap();
        assert_eq!(c, Coordinate::new(-30.0, -60.0));
    }

    #[test]
    fn test_dms_sign_matches_hemisphere() {
        for (text, lat_negative, lon_negative) in [
            ("10 20 30 N 40 50 10 E", false, false),
            ("10 20 30 S 40 50 10 E", true, false),
            ("10 20 30 N 40 50 10 W", false, true),
            ("10 20 30 S 40 50 10 W", true, true),
        ] {
            let c = parse_coordinate(text).unwrap();
            assert_eq!(c.lat < 0.0, lat_negative, "{}", text);
            assert_eq!(c.lon < 0.0, lon_negative, "{}", text);
            assert!(c.lat.abs() >= 0.0);
        }
    }

    // =============================================
    // 解析できない入力
    // =============================================

    #[test]
    fn test_unparseable_inputs() {
        assert!(parse_coordinate("").is_none());
        assert!(parse_coordinate("   ").is_none());
        assert!(parse_coordinate("Ataliva").is_none());
        assert!(parse_coordinate("-30.94").is_none());
        assert!(parse_coordinate("30 S").is_none());
    }

    #[test]
    fn test_dms_to_decimal() {
        assert_close(dms_to_decimal(30.0, 30.0, 0.0, 'N'), 30.5);
        assert_close(dms_to_decimal(30.0, 0.0, 36.0, 's'), -30.01);
        assert_close(dms_to_decimal(-61.0, 0.0, 0.0, 'E'), 61.0);
        assert_close(dms_to_decimal(61.0, 0.0, 0.0, 'W'), -61.0);
    }
}
