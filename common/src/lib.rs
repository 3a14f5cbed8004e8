//! Minibus Finder Common Library
//!
//! 座標解析・停留所展開・距離計算・路線照合のコア

pub mod types;
pub mod error;
pub mod coordinate;
pub mod normalize;
pub mod stops;
pub mod distance;
pub mod matcher;
pub mod dispatch;
pub mod export;

pub use types::{Coordinate, MatchResult, Route, RouteRow, Stop, StopKind, StopSpec};
pub use error::{Error, Result};
pub use coordinate::{dms_to_decimal, parse_coordinate};
pub use normalize::normalize_text;
pub use stops::split_intermediate_stops;
pub use distance::haversine_km;
pub use matcher::search;
pub use dispatch::format_dispatch_message;
