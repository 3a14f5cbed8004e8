//! Excel生成（CLI版）
//!
//! 共通ライブラリで生成したバッファをファイルに書き出す

use crate::error::{MinibusError, Result};
use minibus_finder_common::export::excel_core::generate_results_buffer;
use minibus_finder_common::MatchResult;
use std::path::Path;

pub fn generate_excel(results: &[MatchResult], output_path: &Path, title: &str) -> Result<()> {
    let buffer = generate_results_buffer(results, title).map_err(MinibusError::ExcelGeneration)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, buffer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook_auto, Data, Reader};
    use minibus_finder_common::dispatch::UNKNOWN_DISTANCE;
    use minibus_finder_common::StopKind;

    fn result(stop: &str, distance_km: Option<f64>) -> MatchResult {
        MatchResult {
            route_index: 0,
            destination: "Santa Fe / CEMAFE".into(),
            stop_name: stop.into(),
            stop_kind: StopKind::Intermediate,
            stop_coordinate: None,
            distance_km,
            operating_days: "Lun a Vie".into(),
            observations: String::new(),
        }
    }

    #[test]
    fn test_generate_excel_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("result.xlsx");
        let results = vec![result("Humboldt", Some(4.2)), result("Pilar", None)];

        generate_excel(&results, &path, "Santa Fe / CEMAFE").unwrap();

        let mut workbook = open_workbook_auto(&path).unwrap();
        assert_eq!(workbook.sheet_names(), vec!["Santa Fe - CEMAFE".to_string()]);

        let range = workbook.worksheet_range_at(0).unwrap().unwrap();
        assert_eq!(range.get_value((0, 1)), Some(&Data::String("Stop".into())));
        assert_eq!(range.get_value((1, 3)), Some(&Data::Float(4.2)));
        assert_eq!(
            range.get_value((2, 3)),
            Some(&Data::String(UNKNOWN_DISTANCE.into()))
        );
    }
}
