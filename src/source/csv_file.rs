//! CSV形式の路線表

use super::{is_blank_row, routes_from_rows, HeaderIndex};
use crate::config::ColumnMapping;
use crate::error::{MinibusError, Result};
use csv::ReaderBuilder;
use minibus_finder_common::Route;
use std::path::Path;
use tracing::{debug, warn};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// CSVファイルを読み込む
pub fn read_csv_file(path: &Path, mapping: &ColumnMapping) -> Result<Vec<Route>> {
    let bytes = std::fs::read(path)?;
    parse_csv(&bytes, mapping)
}

/// CSVのバイト列を路線に変換（UTF-8、BOM可）
pub fn parse_csv(bytes: &[u8], mapping: &ColumnMapping) -> Result<Vec<Route>> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if is_blank_row(&headers) {
        return Err(MinibusError::EmptyTable("見出し行がありません".into()));
    }
    let index = HeaderIndex::resolve(&headers, mapping)?;

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        let cells: Vec<&str> = record.iter().collect();
        if is_blank_row(&cells) {
            debug!("空行をスキップ: {}行目", line + 2);
            continue;
        }
        if cells.len() < headers.len() {
            warn!("列数が不足しています: {}行目 ({}/{})", line + 2, cells.len(), headers.len());
        }
        rows.push(index.row(&cells));
    }

    Ok(routes_from_rows(rows))
}
