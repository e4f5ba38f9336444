//! bulk-load - stream JSON lines into a `_bulk` endpoint
//!
//! Reads one JSON document per line from a file (or stdin), submits each one
//! through a [`BulkProcessor`] and prints the aggregate totals as JSON.

use anyhow::{Context, bail};
use bulk_processor::config::LogFormat;
use bulk_processor::{BulkProcessedItem, BulkProcessor, BulkProcessorListener, Config, init_logging};
use clap::{Parser, ValueEnum};
use serde_json::Value;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

#[derive(Debug, Parser)]
#[command(name = "bulk-load", version, about = "Load JSON lines through the bulk API")]
struct Cli {
    /// YAML configuration file; environment variables are used when omitted
    #[arg(short, long, env = "BULK_CONFIG")]
    config: Option<PathBuf>,

    /// Target index
    #[arg(short, long)]
    index: String,

    /// Input file with one JSON document per line, `-` for stdin
    #[arg(long, default_value = "-")]
    input: String,

    /// Operation used for every document
    #[arg(long, value_enum, default_value_t = LoadOp::Index)]
    op: LoadOp,

    /// Top-level field whose value becomes the document id
    #[arg(long)]
    id_field: Option<String>,

    /// Override the number of operations per request
    #[arg(long)]
    batch_size: Option<usize>,

    /// Override the byte limit per request
    #[arg(long)]
    max_bytes: Option<usize>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LoadOp {
    Index,
    Create,
}

/// Logs a line for every rejected document
struct ErrorLogger;

impl BulkProcessorListener for ErrorLogger {
    fn errors(&self, entries: &[BulkProcessedItem]) {
        for entry in entries {
            warn!(
                id = %entry.id,
                index = %entry.index,
                error_type = entry.error_type().unwrap_or("unknown"),
                "Document rejected"
            );
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Loaded before anything reads the environment, reported once logging is up
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli, dotenv).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every document was accepted
async fn run(cli: Cli, dotenv: dotenvy::Result<PathBuf>) -> anyhow::Result<bool> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::from_env()?,
    };
    if let Some(batch_size) = cli.batch_size {
        config.bulk.batch_size = batch_size;
    }
    if let Some(max_bytes) = cli.max_bytes {
        config.bulk.batch_max_size_bytes = max_bytes;
    }
    if cli.json_logs {
        config.logging.format = LogFormat::Json;
    }
    config.validate()?;
    init_logging(&config.logging)?;
    match dotenv_problem(&dotenv) {
        Some(problem) => warn!("{}", problem),
        None => debug!(loaded = dotenv.is_ok(), ".env handled"),
    }

    let processor = BulkProcessor::from_config(&config)?;
    processor.add_listener(Arc::new(ErrorLogger));

    let reader: Box<dyn AsyncBufRead + Unpin> = if cli.input == "-" {
        Box::new(BufReader::new(tokio::io::stdin()))
    } else {
        let file = tokio::fs::File::open(&cli.input)
            .await
            .with_context(|| format!("Failed to open {}", cli.input))?;
        Box::new(BufReader::new(file))
    };

    let submitted = load(&processor, &cli, reader).await?;
    let stats = processor.close().await?;
    info!(submitted, "Load finished");

    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(!stats.has_errors())
}

async fn load(
    processor: &BulkProcessor,
    cli: &Cli,
    reader: Box<dyn AsyncBufRead + Unpin>,
) -> anyhow::Result<u64> {
    let mut lines = reader.lines();
    let mut line_number = 0u64;
    let mut submitted = 0u64;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        if line.trim().is_empty() {
            continue;
        }

        let document: Value = serde_json::from_str(&line)
            .with_context(|| format!("Line {} is not valid JSON", line_number))?;
        let id = match &cli.id_field {
            Some(field) => Some(document_id(&document, field, line_number)?),
            None => None,
        };

        match cli.op {
            LoadOp::Index => processor.index(&cli.index, &document, id.as_deref()).await?,
            LoadOp::Create => processor.create(&cli.index, &document, id.as_deref()).await?,
        }
        submitted += 1;
    }

    Ok(submitted)
}

fn document_id(document: &Value, field: &str, line_number: u64) -> anyhow::Result<String> {
    match document.get(field) {
        Some(Value::String(id)) => Ok(id.clone()),
        Some(Value::Number(id)) => Ok(id.to_string()),
        Some(other) => bail!(
            "Line {}: field '{}' must be a string or number, got {}",
            line_number,
            field,
            other
        ),
        None => bail!("Line {}: missing id field '{}'", line_number, field),
    }
}

/// A `.env` failure worth reporting; a missing file is not one
fn dotenv_problem<T>(result: &dotenvy::Result<T>) -> Option<String> {
    match result {
        Err(e) if !e.not_found() => Some(format!("Failed to load .env file: {}", e)),
        _ => None,
    }
}
