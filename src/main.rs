// src/main.rs
mod utils;
mod statements;
mod extractors;
mod tables;
mod storage;
mod runner;

#[cfg(test)]
mod test_fixtures;

use clap::Parser;
use utils::AppError;
use statements::StatementClient;
use statements::client::DEFAULT_REQUEST_DELAY_MS;
use statements::models::DEFAULT_URL_TEMPLATE;
use extractors::{PdfExtractExtractor, StatementExtractor};
use storage::StorageManager;

/// Command Line Interface for the MSC CAP statement table extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First statement number to fetch
    #[arg(long, default_value_t = 1)]
    first_id: u32,

    /// Last statement number to fetch (inclusive)
    #[arg(long, default_value_t = 98)]
    last_id: u32,

    /// Statement URL, `{id}` is replaced by the statement number
    #[arg(long, default_value = DEFAULT_URL_TEMPLATE)]
    url_template: String,

    /// Output directory for the workbooks and run summary
    #[arg(short, long, default_value = "./output")]
    output_dir: String,

    /// Pause before each download, in milliseconds
    #[arg(long, default_value_t = DEFAULT_REQUEST_DELAY_MS)]
    request_delay_ms: u64,

    /// Debug mode - save raw and annotated statement text
    #[arg(short, long)]
    debug: bool,

    /// Do not write run_summary.json
    #[arg(long)]
    skip_summary: bool,
}

impl Args {
    fn validate(&self) -> Result<(), AppError> {
        if self.first_id > self.last_id {
            return Err(AppError::Config(format!(
                "first id {} is greater than last id {}",
                self.first_id, self.last_id
            )));
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    args.validate()?;
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Initialize storage, client and extractors
    let storage = StorageManager::new(&args.output_dir)?;
    let client = StatementClient::new(args.request_delay_ms)?;
    let text_extractor = PdfExtractExtractor::new();
    let statement_extractor = StatementExtractor::new();

    // 4. Build the statement list
    let statements = statements::statement_range(&args.url_template, args.first_id, args.last_id)?;
    tracing::info!("Fetching {} statements ({}..={})", statements.len(), args.first_id, args.last_id);

    // 5. Process each statement, strictly in id order
    let accumulator = runner::run_statements(
        &statements,
        &client,
        &text_extractor,
        &statement_extractor,
        &storage,
        args.debug,
    )
    .await;

    // 6. Write both tables and the summary; fail if nothing was extracted
    runner::finish_run(&storage, &accumulator, !args.skip_summary)
}
