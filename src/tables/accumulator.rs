// src/tables/accumulator.rs
use serde::Serialize;
use std::fmt;
use crate::extractors::rows::TokenizedRegion;
use crate::extractors::ExtractedStatement;
use crate::tables::{is_table2_label, Row, Table, TableId};
use crate::utils::error::ExtractError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementStatus {
    /// Both tables found, every line well-formed
    Complete,
    /// One table region was missing, or some lines were malformed
    Partial,
    /// Neither table region could be located, or the statement was never parsed
    /// (download or PDF load failed)
    Failed,
}

/// A statement line that could not be turned into a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedRow {
    pub statement_id: u32,
    pub table: TableId,
    pub line_index: usize,
    pub line: String,
    pub token_count: usize,
}

/// A statement (or one of its tables) that produced no rows, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementFailure {
    pub statement_id: u32,
    pub table: Option<TableId>, // None when the whole statement failed
    pub error: String,
}

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunTally {
    pub complete: usize,
    pub partial: usize,
    pub failed: usize,
}

impl RunTally {
    pub fn processed(&self) -> usize {
        self.complete + self.partial + self.failed
    }

    /// Statements that contributed at least one table
    pub fn succeeded(&self) -> usize {
        self.complete + self.partial
    }
}

impl fmt::Display for RunTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} complete, {} partial, {} failed", self.complete, self.partial, self.failed)
    }
}

/// Running tables for the whole run, plus the ledger of everything that went wrong.
///
/// Statements must be appended in increasing id order; rows are never reordered.
#[derive(Debug)]
pub struct TableAccumulator {
    table1: Table,
    table2: Table,
    malformed: Vec<MalformedRow>,
    failures: Vec<StatementFailure>,
    tally: RunTally,
}

impl TableAccumulator {
    pub fn new() -> Self {
        Self {
            table1: Table::new(TableId::Table1),
            table2: Table::new(TableId::Table2),
            malformed: Vec::new(),
            failures: Vec::new(),
            tally: RunTally::default(),
        }
    }

    /// Appends one statement's tables and returns how completely it was parsed.
    pub fn append_statement(&mut self, statement_id: u32, statement: &ExtractedStatement) -> StatementStatus {
        let date = statement.effective_date.as_deref();

        let table1_ok = self.append_table(statement_id, TableId::Table1, &statement.table1, date);
        let table2_ok = self.append_table(statement_id, TableId::Table2, &statement.table2, date);

        let clean = |region: &Result<TokenizedRegion, ExtractError>| {
            region.as_ref().map(|t| t.malformed.is_empty()).unwrap_or(false)
        };

        let status = if !table1_ok && !table2_ok {
            self.tally.failed += 1;
            StatementStatus::Failed
        } else if clean(&statement.table1) && clean(&statement.table2) {
            self.tally.complete += 1;
            StatementStatus::Complete
        } else {
            self.tally.partial += 1;
            StatementStatus::Partial
        };

        tracing::info!(
            "Statement {} {:?}: table 1 now {} rows, table 2 now {} rows",
            statement_id,
            status,
            self.table1.len(),
            self.table2.len()
        );
        status
    }

    /// Records a statement that could not be downloaded or converted to text.
    pub fn record_failure(&mut self, statement_id: u32, error: &dyn fmt::Display) {
        tracing::error!("Statement {} failed: {}", statement_id, error);
        self.failures.push(StatementFailure {
            statement_id,
            table: None,
            error: error.to_string(),
        });
        self.tally.failed += 1;
    }

    /// Returns false when the region itself could not be located.
    fn append_table(
        &mut self,
        statement_id: u32,
        table: TableId,
        region: &Result<TokenizedRegion, ExtractError>,
        date: Option<&str>,
    ) -> bool {
        let tokenized = match region {
            Ok(tokenized) => tokenized,
            Err(e) => {
                tracing::warn!("Statement {}: {}", statement_id, e);
                self.failures.push(StatementFailure {
                    statement_id,
                    table: Some(table),
                    error: e.to_string(),
                });
                return false;
            }
        };

        for line in &tokenized.malformed {
            tracing::warn!(
                "Statement {} {} line {}: {} field(s) in {:?}",
                statement_id,
                table,
                line.line_index,
                line.tokens.len(),
                line.line
            );
            self.malformed.push(MalformedRow {
                statement_id,
                table,
                line_index: line.line_index,
                line: line.line.clone(),
                token_count: line.tokens.len(),
            });
        }

        let rows = tokenized.rows.iter().map(|raw| Row::from_raw(raw, date));
        match table {
            TableId::Table1 => self.table1.extend(rows),
            TableId::Table2 => self.table2.extend(rows.filter(|row| is_table2_label(&row.sc))),
        }
        true
    }

    pub fn table(&self, id: TableId) -> &Table {
        match id {
            TableId::Table1 => &self.table1,
            TableId::Table2 => &self.table2,
        }
    }

    pub fn malformed(&self) -> &[MalformedRow] {
        &self.malformed
    }

    pub fn failures(&self) -> &[StatementFailure] {
        &self.failures
    }

    pub fn tally(&self) -> &RunTally {
        &self.tally
    }
}

impl Default for TableAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
