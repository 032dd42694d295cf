// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};
use rust_xlsxwriter::{Format, Workbook};
use crate::tables::{Table, TableAccumulator, TableId, COLUMNS};
use crate::utils::error::StorageError;

const RUN_SUMMARY_FILE: &str = "run_summary.json";

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Directory for per-statement debug output, created on demand
    pub fn debug_dir(&self, statement_id: u32) -> Result<PathBuf, StorageError> {
        let dir = self.base_dir.join("debug").join(statement_id.to_string());
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Writes a table as a single-sheet workbook: bold header row, then one row per record.
    pub fn save_table(&self, table: &Table) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(table.id.file_name());
        if table.is_empty() {
            tracing::warn!("{} has no rows, writing header only", table.id);
        }

        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();
        let worksheet = workbook.add_worksheet();

        for (col, name) in COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *name, &header_format)?;
        }

        for (idx, row) in table.rows().iter().enumerate() {
            let sheet_row = u32::try_from(idx + 1)
                .map_err(|_| StorageError::SerializationError(format!("{} has too many rows", table.id)))?;
            for (col, value) in row.cells().iter().enumerate() {
                // Absent values stay blank cells
                if !value.is_empty() {
                    worksheet.write_string(sheet_row, col as u16, *value)?;
                }
            }
        }

        workbook.save(&file_path)?;

        tracing::info!("Saved {} ({} rows) to {}", table.id, table.len(), file_path.display());

        Ok(file_path)
    }

    /// Saves a JSON summary of the run next to the tables
    pub fn save_run_summary(&self, accumulator: &TableAccumulator, outputs: &[PathBuf]) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(RUN_SUMMARY_FILE);
        let tally = accumulator.tally();

        let summary = serde_json::json!({
            "statements_processed": tally.processed(),
            "complete": tally.complete,
            "partial": tally.partial,
            "failed": tally.failed,
            "table1_rows": accumulator.table(TableId::Table1).len(),
            "table2_rows": accumulator.table(TableId::Table2).len(),
            "failures": accumulator.failures(),
            "malformed_rows": accumulator.malformed(),
            "outputs": outputs,
            "generated_at": chrono::Utc::now().to_rfc3339(),
        });

        let summary_str = serde_json::to_string_pretty(&summary)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, summary_str)
            .map_err(StorageError::IoError)?;

        tracing::info!("Saved run summary to {}", file_path.display());

        Ok(file_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::rows::tokenize_region;
    use crate::extractors::ExtractedStatement;
    use calamine::{open_workbook, Reader, Xlsx};

    fn filled_accumulator() -> TableAccumulator {
        let mut acc = TableAccumulator::new();
        acc.append_statement(1, &ExtractedStatement {
            effective_date: Some("05/01/2023".to_string()),
            table1: Ok(tokenize_region("1 - Rate I $ 12.34 $ 10.00\n2 - Rate II $ 8.00 $ 7.50")),
            table2: Ok(tokenize_region("5 - Rates I and III $ 1.11 $ 2.22\nheader line")),
        });
        acc.append_statement(2, &ExtractedStatement {
            effective_date: None,
            table1: Ok(tokenize_region("1 - Rate I $ 13.00 $ 11.00")),
            table2: Ok(tokenize_region("")),
        });
        acc
    }

    fn read_sheet(path: &Path) -> Vec<Vec<String>> {
        let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
        let range = workbook.worksheet_range("Sheet1").unwrap();
        range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_table1_workbook_contents() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path().join("out")).unwrap();
        let acc = filled_accumulator();

        let path = storage.save_table(acc.table(TableId::Table1)).unwrap();
        assert_eq!(path.file_name().unwrap(), "table1_final.xlsx");

        assert_eq!(
            read_sheet(&path),
            vec![
                vec!["SC", "NYC", "Westchester", "Initial Effective Date"],
                vec!["1 - Rate I", "12.34", "10.00", "05/01/2023"],
                vec!["2 - Rate II", "8.00", "7.50", "05/01/2023"],
                vec!["1 - Rate I", "13.00", "11.00", ""],
            ]
        );
    }

    #[test]
    fn test_empty_table_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();

        let path = storage.save_table(&Table::new(TableId::Table2)).unwrap();
        assert_eq!(path.file_name().unwrap(), "table2_final.xlsx");
        assert_eq!(read_sheet(&path), vec![vec!["SC", "NYC", "Westchester", "Initial Effective Date"]]);
    }

    #[test]
    fn test_run_summary_json() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();
        let mut acc = filled_accumulator();
        acc.record_failure(3, &"Statement not found");

        let path = storage.save_run_summary(&acc, &[dir.path().join("table1_final.xlsx")]).unwrap();
        let summary: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();

        assert_eq!(summary["statements_processed"], 3);
        assert_eq!(summary["complete"], 1);
        assert_eq!(summary["partial"], 1);
        assert_eq!(summary["failed"], 1);
        assert_eq!(summary["table1_rows"], 3);
        assert_eq!(summary["table2_rows"], 1);
        assert_eq!(summary["malformed_rows"][0]["table"], "Table2");
        assert_eq!(summary["malformed_rows"][0]["token_count"], 1);
        assert_eq!(summary["failures"][0]["statement_id"], 3);
        assert!(summary["generated_at"].is_string());
    }

    #[test]
    fn test_debug_dir_is_per_statement() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();

        let debug = storage.debug_dir(12).unwrap();
        assert!(debug.ends_with("debug/12"));
        assert!(debug.is_dir());
    }
}
