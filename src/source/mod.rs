//! 路線表の読み込みモジュール
//!
//! 公開CSV（URL）・ローカルCSV・スプレッドシートから路線表を読み込み、
//! 列見出しを `ColumnMapping` に従って対応付ける。

mod csv_file;
mod remote;
mod spreadsheet;

pub use csv_file::{parse_csv, read_csv_file};
pub use remote::fetch_bytes;
pub use spreadsheet::read_spreadsheet;

use crate::config::{ColumnMapping, Config};
use crate::error::{MinibusError, Result};
use minibus_finder_common::normalize::normalize_text;
use minibus_finder_common::{Route, RouteRow};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// スプレッドシートとして扱う拡張子
const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "ods"];

/// データソース
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// 公開CSVのURL
    Remote(String),
    /// ローカルのCSV/スプレッドシート
    Local(PathBuf),
}

impl DataSource {
    /// 文字列からデータソースを判定（http/https ならURL）
    pub fn parse(source: &str) -> Self {
        let source = source.trim();
        let lower = source.to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Remote(source.to_string())
        } else {
            DataSource::Local(PathBuf::from(source))
        }
    }

    /// キャッシュのキーとなる識別子
    pub fn key(&self) -> String {
        match self {
            DataSource::Remote(url) => url.clone(),
            DataSource::Local(path) => path.display().to_string(),
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// 路線表を読み込む
pub async fn load_routes(source: &DataSource, config: &Config) -> Result<Vec<Route>> {
    info!("路線表を読み込み: {}", source);

    let routes = match source {
        DataSource::Remote(url) => {
            let bytes = fetch_bytes(url, config.timeout_seconds).await?;
            parse_csv(&bytes, &config.columns)?
        }
        DataSource::Local(path) => {
            if !path.exists() {
                return Err(MinibusError::SourceNotFound(path.display().to_string()));
            }
            if is_spreadsheet(path) {
                read_spreadsheet(path, &config.columns)?
            } else {
                read_csv_file(path, &config.columns)?
            }
        }
    };

    if routes.is_empty() {
        return Err(MinibusError::EmptyTable(source.key()));
    }

    info!("{}件の路線を読み込みました", routes.len());
    Ok(routes)
}

fn is_spreadsheet(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SPREADSHEET_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// 列見出しの位置
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderIndex {
    origin_name: usize,
    origin_coordinates: usize,
    destination_name: usize,
    destination_coordinates: usize,
    intermediate_stops: usize,
    operating_days: usize,
    observations: Option<usize>,
}

impl HeaderIndex {
    /// 見出し行から各列の位置を求める（大文字小文字・アクセントは無視）
    pub(crate) fn resolve<S: AsRef<str>>(headers: &[S], mapping: &ColumnMapping) -> Result<Self> {
        let normalized: Vec<String> = headers
            .iter()
            .map(|h| normalize_text(strip_bom(h.as_ref())))
            .collect();

        let find = |name: &str| {
            let key = normalize_text(name);
            normalized.iter().position(|h| *h == key)
        };
        let require = |name: &str| {
            find(name).ok_or_else(|| MinibusError::MissingColumn(name.to_string()))
        };

        let index = Self {
            origin_name: require(&mapping.origin_name)?,
            origin_coordinates: require(&mapping.origin_coordinates)?,
            destination_name: require(&mapping.destination_name)?,
            destination_coordinates: require(&mapping.destination_coordinates)?,
            intermediate_stops: require(&mapping.intermediate_stops)?,
            operating_days: require(&mapping.operating_days)?,
            observations: find(&mapping.observations),
        };

        if index.observations.is_none() {
            debug!("備考列なし: {}", mapping.observations);
        }
        Ok(index)
    }

    /// 1行分のセルを行データに変換
    pub(crate) fn row<S: AsRef<str>>(&self, cells: &[S]) -> RouteRow {
        let cell = |i: usize| {
            cells
                .get(i)
                .map(|c| c.as_ref().trim().to_string())
                .unwrap_or_default()
        };

        RouteRow {
            origin_name: cell(self.origin_name),
            origin_coordinates: cell(self.origin_coordinates),
            destination_name: cell(self.destination_name),
            destination_coordinates: cell(self.destination_coordinates),
            intermediate_stops: cell(self.intermediate_stops),
            operating_days: cell(self.operating_days),
            observations: self.observations.map(cell).unwrap_or_default(),
        }
    }
}

/// セルがすべて空の行（シート末尾の空行など）
pub(crate) fn is_blank_row<S: AsRef<str>>(cells: &[S]) -> bool {
    cells.iter().all(|c| c.as_ref().trim().is_empty())
}

/// 行データの列から路線を作成（行番号は0始まり）
pub(crate) fn routes_from_rows(rows: Vec<RouteRow>) -> Vec<Route> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| Route::from_row(index, row))
        .collect()
}

fn strip_bom(s: &str) -> &str {
    s.strip_prefix('\u{feff}').unwrap_or(s)
}
