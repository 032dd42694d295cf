// src/tables/mod.rs
pub mod accumulator;

use serde::Serialize;
use std::fmt;
use crate::extractors::rows::RawRow;

pub use accumulator::TableAccumulator;

/// Column schema shared by both output tables
pub const COLUMNS: [&str; 4] = ["SC", "NYC", "Westchester", "Initial Effective Date"];

/// Service classifications kept in table 2 (exact match on the SC field).
/// Table 2 carries no SC header in the statements, so rows are selected by label.
pub const TABLE2_SC_ALLOWLIST: [&str; 12] = [
    "5 - Rates I and III",
    "5 - Rates II and IV **",
    "8 - Rates I and IV",
    "8 - Rates II and V **",
    "8 - Rate III **",
    "9 - Rates I and IV",
    "9 - Rates II and V **",
    "9 - Rate III **",
    "12 - Rates I and IV",
    "12 - Rates II and V **",
    "12 - Rate III **",
    "13 - Rates I and II **",
];

pub fn is_table2_label(sc: &str) -> bool {
    TABLE2_SC_ALLOWLIST.contains(&sc)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TableId {
    Table1,
    Table2,
}

impl TableId {
    /// File name of the workbook this table is saved to
    pub fn file_name(&self) -> &'static str {
        match self {
            TableId::Table1 => "table1_final.xlsx",
            TableId::Table2 => "table2_final.xlsx",
        }
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableId::Table1 => write!(f, "table 1"),
            TableId::Table2 => write!(f, "table 2"),
        }
    }
}

/// One output row: the three statement fields plus the statement's effective date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub sc: String,
    pub nyc: String,
    pub westchester: String,
    pub effective_date: Option<String>,
}

impl Row {
    pub fn from_raw(raw: &RawRow, effective_date: Option<&str>) -> Self {
        Self {
            sc: raw.sc.clone(),
            nyc: raw.nyc.clone(),
            westchester: raw.westchester.clone(),
            effective_date: effective_date.map(str::to_string),
        }
    }

    /// Cell values in `COLUMNS` order; a missing date is an empty cell.
    pub fn cells(&self) -> [&str; 4] {
        [
            self.sc.as_str(),
            self.nyc.as_str(),
            self.westchester.as_str(),
            self.effective_date.as_deref().unwrap_or(""),
        ]
    }
}

/// Append-only ordered table.
#[derive(Debug, Clone)]
pub struct Table {
    pub id: TableId,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(id: TableId) -> Self {
        Self { id, rows: Vec::new() }
    }

    pub fn extend(&mut self, rows: impl IntoIterator<Item = Row>) {
        self.rows.extend(rows);
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
