//! Export report rows to CSV (and read them back).
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::Path;

use crate::domain::EvaluatedRow;
use crate::error::AppError;
use crate::report::fmt_sci;

/// CSV header line (without newline).
pub const REPORT_CSV_HEADER: &str = "full_moves,plies,reference_count,model_count,relative_error";

/// Write report rows to a CSV file, creating parent directories as needed.
pub fn write_report_csv(path: &Path, rows: &[EvaluatedRow]) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent).map_err(|e| {
            AppError::new(2, format!("Failed to create directory '{}': {e}", parent.display()))
        })?;
    }

    let mut file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;

    writeln!(file, "{REPORT_CSV_HEADER}")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for r in rows {
        writeln!(
            file,
            "{},{},{},{},{}",
            r.full_moves,
            r.plies,
            fmt_sci(r.reference_count, 12),
            fmt_sci(r.model_count, 12),
            fmt_sci(r.relative_error, 6),
        )
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

/// Read a CSV previously written by [`write_report_csv`].
pub fn read_report_csv(path: &Path) -> Result<Vec<EvaluatedRow>, AppError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| AppError::new(2, format!("Failed to open report CSV '{}': {e}", path.display())))?;

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read report CSV header: {e}")))?;
    if headers.iter().collect::<Vec<_>>().join(",") != REPORT_CSV_HEADER {
        return Err(AppError::new(
            2,
            format!("Unexpected report CSV header in '{}'.", path.display()),
        ));
    }

    reader
        .deserialize::<EvaluatedRow>()
        .map(|row| row.map_err(|e| AppError::new(2, format!("Invalid report CSV row: {e}"))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<EvaluatedRow> {
        vec![
            EvaluatedRow {
                full_moves: 5,
                plies: 10,
                reference_count: 3_775_852_872.0,
                model_count: 4.1e9,
                relative_error: 0.0858,
            },
            EvaluatedRow {
                full_moves: 25,
                plies: 50,
                reference_count: 1.42404361906059e34,
                model_count: 1.5e34,
                relative_error: 0.0533,
            },
        ]
    }

    #[test]
    fn csv_layout_matches_header_and_precision() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("counts.csv");
        write_report_csv(&path, &sample_rows()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], REPORT_CSV_HEADER);
        assert_eq!(lines[1], "5,10,3.775852872000e+09,4.100000000000e+09,8.580000e-02");
        assert_eq!(lines[2], "25,50,1.424043619061e+34,1.500000000000e+34,5.330000e-02");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn csv_reads_back_rows_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counts.csv");
        write_report_csv(&path, &sample_rows()).unwrap();

        let back = read_report_csv(&path).unwrap();
        let keys: Vec<(u32, u32)> = back.iter().map(|r| (r.full_moves, r.plies)).collect();
        assert_eq!(keys, vec![(5, 10), (25, 50)]);
        assert_eq!(back[0].reference_count, 3_775_852_872.0);
    }

    #[test]
    fn csv_with_foreign_header_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("other.csv");
        std::fs::write(&path, "a,b\n1,2\n").unwrap();
        assert!(read_report_csv(&path).is_err());
    }
}
