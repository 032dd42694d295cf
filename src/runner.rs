// src/runner.rs
use tracing::Instrument;
use crate::extractors::{ExtractedStatement, StatementExtractor, TextExtractor};
use crate::statements::{StatementClient, StatementInfo};
use crate::storage::StorageManager;
use crate::tables::{TableAccumulator, TableId};
use crate::utils::{self, AppError};

/// Downloads one statement and parses its text. Table-level problems are carried
/// inside the returned statement; only download/PDF errors fail here.
async fn process_statement(
    statement: &StatementInfo,
    client: &StatementClient,
    text_extractor: &dyn TextExtractor,
    statement_extractor: &StatementExtractor,
    storage: &StorageManager,
    debug: bool,
) -> Result<ExtractedStatement, AppError> {
    let content = client.download_statement(statement).await?;
    tracing::info!("Successfully downloaded statement ({} bytes)", content.len());

    let text = text_extractor.extract_text(&content)?;
    tracing::info!("Extracted {} characters of text via {}", text.len(), text_extractor.backend_name());

    if debug {
        save_debug_output(statement.id, &text, statement_extractor, storage);
    }

    Ok(statement_extractor.extract(&text))
}

fn save_debug_output(statement_id: u32, text: &str, statement_extractor: &StatementExtractor, storage: &StorageManager) {
    let debug_dir = match storage.debug_dir(statement_id) {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!("Failed to create debug directory: {}", e);
            return;
        }
    };

    let raw_text_path = debug_dir.join("raw_text.txt");
    match std::fs::write(&raw_text_path, text) {
        Ok(()) => tracing::info!("Saved raw text to: {}", raw_text_path.display()),
        Err(e) => tracing::warn!("Failed to save raw text: {}", e),
    }

    let owned_patterns = statement_extractor.debug_patterns();
    let debug_patterns: Vec<(&str, &str)> = owned_patterns
        .iter()
        .map(|(pattern, label)| (pattern.as_str(), *label))
        .collect();
    let annotated_path = debug_dir.join("annotated.txt");
    if let Err(e) = utils::text_debug::create_debug_text(text, &annotated_path, &debug_patterns) {
        tracing::warn!("Failed to create annotated debug text: {}", e);
    }
}

/// Processes every statement strictly in the given order. A statement that fails
/// to download or load is recorded and skipped; it never stops the run.
pub async fn run_statements(
    statements: &[StatementInfo],
    client: &StatementClient,
    text_extractor: &dyn TextExtractor,
    statement_extractor: &StatementExtractor,
    storage: &StorageManager,
    debug: bool,
) -> TableAccumulator {
    let mut accumulator = TableAccumulator::new();

    for statement in statements {
        let span = utils::logging::statement_span(statement.id);
        let result = process_statement(statement, client, text_extractor, statement_extractor, storage, debug)
            .instrument(span.clone())
            .await;

        let _entered = span.enter();
        match result {
            Ok(extracted) => {
                accumulator.append_statement(statement.id, &extracted);
            }
            Err(e) => accumulator.record_failure(statement.id, &e),
        }
    }

    accumulator
}

/// Writes both tables (either failing fails the run) and the optional summary, then
/// fails the run if no statement contributed a table.
pub fn finish_run(storage: &StorageManager, accumulator: &TableAccumulator, write_summary: bool) -> Result<(), AppError> {
    let mut outputs = Vec::new();
    for id in [TableId::Table1, TableId::Table2] {
        let path = storage.save_table(accumulator.table(id))?;
        outputs.push(path);
    }

    if write_summary {
        match storage.save_run_summary(accumulator, &outputs) {
            Ok(path) => tracing::info!("Saved run summary to: {}", path.display()),
            Err(e) => tracing::error!("Failed to save run summary: {}", e),
        }
    }

    let tally = accumulator.tally();
    tracing::info!(
        "Processing finished. {} ({} malformed rows). Table 1: {} rows, table 2: {} rows",
        tally,
        accumulator.malformed().len(),
        accumulator.table(TableId::Table1).len(),
        accumulator.table(TableId::Table2).len()
    );

    if tally.succeeded() == 0 {
        return Err(AppError::Processing(format!(
            "No tables extracted from any of {} statements",
            tally.processed()
        )));
    }

    Ok(())
}
