pub mod excel;

use crate::error::Result;
use minibus_finder_common::MatchResult;
use std::path::{Path, PathBuf};

/// ファイル名に使えない文字（パス区切りを含む）
const INVALID_FILE_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// タイトルからファイル名の本体を作る
fn file_stem_for_title(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| if INVALID_FILE_CHARS.contains(&c) || c.is_control() { '-' } else { c })
        .collect();
    let stem = stem.trim().trim_matches('.');
    if stem.is_empty() {
        "minibus".to_string()
    } else {
        stem.to_string()
    }
}

/// 出力先がディレクトリ（または拡張子なし）ならタイトルからファイル名を作る
fn output_path_for_xlsx(output: &Path, title: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.xlsx", file_stem_for_title(title)))
    } else {
        output.to_path_buf()
    }
}

/// 検索結果をExcelに書き出し、書き出したパスを返す
pub fn export_results(results: &[MatchResult], output: &Path, title: &str) -> Result<PathBuf> {
    let output_path = output_path_for_xlsx(output, title);
    println!("- Excelを生成中...");
    excel::generate_excel(results, &output_path, title)?;
    println!("✔ Excel出力: {}", output_path.display());
    Ok(output_path)
}
