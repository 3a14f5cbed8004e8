//! 検索結果の表示

use crate::cli::OutputFormat;
use crate::error::Result;
use minibus_finder_common::export::{result_row, RESULT_COLUMNS};
use minibus_finder_common::{format_dispatch_message, MatchResult, Route};

/// 出力形式に従って検索結果を文字列にする
pub fn render(
    format: OutputFormat,
    origin: &str,
    destination: &str,
    results: &[MatchResult],
) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(results)),
        OutputFormat::Json => render_json(results),
        OutputFormat::Dispatch => Ok(format_dispatch_message(origin, destination, results)),
    }
}

/// 結果表（列幅は内容に合わせる）
pub fn render_table(results: &[MatchResult]) -> String {
    let header: Vec<String> = RESULT_COLUMNS.iter().map(|s| s.to_string()).collect();
    let rows: Vec<Vec<String>> = results.iter().map(|r| result_row(r).to_vec()).collect();
    format_grid(&header, &rows)
}

pub fn render_json(results: &[MatchResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// 路線一覧
pub fn render_routes(routes: &[&Route]) -> String {
    let header: Vec<String> = ["#", "Origin", "Destination", "Stops", "Days"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let rows: Vec<Vec<String>> = routes
        .iter()
        .map(|r| {
            vec![
                (r.index + 1).to_string(),
                r.origin_name.clone(),
                r.destination_name.clone(),
                r.intermediate_stops.clone(),
                r.operating_days.clone(),
            ]
        })
        .collect();
    format_grid(&header, &rows)
}

fn format_grid(header: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| pad(cell, *w))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![line(header)];
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.extend(rows.iter().map(|r| line(r)));
    out.join("\n")
}

fn pad(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    format!("{}{}", cell, " ".repeat(width.saturating_sub(len)))
}
