//! スプレッドシート形式の路線表（先頭シートのみ）

use super::{is_blank_row, routes_from_rows, HeaderIndex};
use crate::config::ColumnMapping;
use crate::error::{MinibusError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use minibus_finder_common::Route;
use std::path::Path;
use tracing::debug;

/// xlsx/xls/ods の先頭シートを読み込む
pub fn read_spreadsheet(path: &Path, mapping: &ColumnMapping) -> Result<Vec<Route>> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| MinibusError::Spreadsheet(format!("{}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| MinibusError::EmptyTable(format!("シートがありません: {}", path.display())))?
        .map_err(|e| MinibusError::Spreadsheet(e.to_string()))?;

    let mut rows = range.rows().map(|row| row.iter().map(cell_text).collect::<Vec<String>>());

    let headers = rows
        .by_ref()
        .find(|cells| !is_blank_row(cells))
        .ok_or_else(|| MinibusError::EmptyTable(path.display().to_string()))?;
    let index = HeaderIndex::resolve(&headers, mapping)?;

    let data: Vec<_> = rows
        .filter(|cells| !is_blank_row(cells))
        .map(|cells| index.row(&cells))
        .collect();
    debug!("シートから{}行を読み込み", data.len());

    Ok(routes_from_rows(data))
}

/// セルの値を文字列に変換
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}
