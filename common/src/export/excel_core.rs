//! Excel生成（共通ライブラリ）
//!
//! 検索結果を1シートの表としてxlsxに書き出す

use super::RESULT_COLUMNS;
use crate::dispatch::UNKNOWN_DISTANCE;
use crate::types::MatchResult;
use rust_xlsxwriter::*;

/// シート名に使えない文字
const INVALID_SHEET_CHARS: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

/// シート名の最大文字数
const MAX_SHEET_NAME_LEN: usize = 31;

/// 列幅（文字数）
const COLUMN_WIDTHS: [f64; 6] = [28.0, 28.0, 14.0, 14.0, 24.0, 40.0];

/// 検索結果のExcelをバッファに生成
///
/// # Arguments
/// * `results` - 検索結果
/// * `title` - シート名（31文字まで）
pub fn generate_results_buffer(results: &[MatchResult], title: &str) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let distance_format = Format::new().set_num_format("0.0");

    let worksheet = workbook.add_worksheet();
    let name = sheet_name(title);
    if !name.is_empty() {
        worksheet
            .set_name(&name)
            .map_err(|e| format!("シート名設定エラー: {}", e))?;
    }

    for (col, (label, width)) in RESULT_COLUMNS.iter().zip(COLUMN_WIDTHS).enumerate() {
        let col = col as u16;
        worksheet
            .write_string_with_format(0, col, *label, &header_format)
            .map_err(|e| format!("見出し書き込みエラー: {}", e))?;
        worksheet
            .set_column_width(col, width)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
    }

    for (i, result) in results.iter().enumerate() {
        let row = (i + 1) as u32;
        let write_err = |e: XlsxError| format!("{}行目の書き込みエラー: {}", row, e);

        worksheet.write_string(row, 0, &result.destination).map_err(write_err)?;
        worksheet.write_string(row, 1, &result.stop_name).map_err(write_err)?;
        worksheet
            .write_string(row, 2, result.stop_kind.to_string())
            .map_err(write_err)?;
        match result.distance_km {
            Some(d) => {
                worksheet
                    .write_number_with_format(row, 3, d, &distance_format)
                    .map_err(write_err)?;
            }
            None => {
                worksheet.write_string(row, 3, UNKNOWN_DISTANCE).map_err(write_err)?;
            }
        }
        worksheet.write_string(row, 4, &result.operating_days).map_err(write_err)?;
        worksheet.write_string(row, 5, &result.observations).map_err(write_err)?;
    }

    worksheet
        .set_freeze_panes(1, 0)
        .map_err(|e| format!("ウィンドウ枠固定エラー: {}", e))?;

    workbook
        .save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}

/// タイトルからシート名を作る（使えない文字は '-' に置き換え、31文字まで）
pub fn sheet_name(title: &str) -> String {
    let replaced: String = title
        .chars()
        .map(|c| if INVALID_SHEET_CHARS.contains(&c) { '-' } else { c })
        .collect();
    let name: String = replaced
        .trim()
        .trim_matches('\'')
        .chars()
        .take(MAX_SHEET_NAME_LEN)
        .collect();
    name.trim().to_string()
}
