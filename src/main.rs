// coordex - pull GPS coordinates out of OCR text
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coordex::config::{AppConfig, DEFAULT_LOG_FILE};
use coordex::storage::{CoordinateSink, SqliteStore, TextLog};
use coordex::{normalize, CoordexError, Extraction, Extractor, MapView};

const NOT_FOUND_MESSAGE: &str = "Could not extract valid GPS coordinates.";

#[derive(Parser)]
#[command(name = "coordex", author, version)]
#[command(about = "Extract latitude/longitude pairs from OCR text")]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract original and adjusted coordinates
    Extract {
        /// OCR text; read from --file or stdin when omitted
        text: Option<String>,
        /// Read OCR text from a file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Append both pairs to a text log (`--log=PATH`, or bare `--log` for the default file)
        #[arg(
            long,
            num_args = 0..=1,
            require_equals = true,
            default_missing_value = DEFAULT_LOG_FILE
        )]
        log: Option<PathBuf>,
        /// Store the extraction in a SQLite database
        #[arg(long)]
        db: Option<PathBuf>,
        /// Reject pairs outside valid latitude/longitude ranges
        #[arg(long)]
        validate_ranges: bool,
        /// Include the map view (center, zoom, markers)
        #[arg(long)]
        map: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the normalized form of the text
    Normalize {
        text: Option<String>,
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },
    /// List stored extractions, newest first
    History {
        #[arg(long)]
        db: Option<PathBuf>,
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coordex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if matches!(e.downcast_ref::<CoordexError>(), Some(CoordexError::NotFound)) => {
            eprintln!("{NOT_FOUND_MESSAGE}");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::resolve(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Commands::Extract { text, file, log, db, validate_ranges, map, format } => {
            let (source, raw) = read_input(text, file.as_deref())?;

            let mut extractor_config = config.extractor.clone();
            extractor_config.validate_ranges |= validate_ranges;
            let extraction = Extractor::new(extractor_config).run(&raw)?;

            let mut sinks: Vec<Box<dyn CoordinateSink>> = Vec::new();
            if let Some(path) = log.or_else(|| config.log_path.clone()) {
                let sink = TextLog::open(&path)
                    .with_context(|| format!("Failed to open log {}", path.display()))?;
                sinks.push(Box::new(sink));
            }
            if let Some(path) = db.or_else(|| config.db_path.clone()) {
                let store = SqliteStore::new(Some(&path))
                    .with_context(|| format!("Failed to open database {}", path.display()))?;
                sinks.push(Box::new(store));
            }
            for sink in sinks.iter_mut() {
                sink.record(&source, &extraction)?;
            }

            let view = if map {
                Some(MapView::from_extraction(&extraction, config.map_zoom)?)
            } else {
                None
            };

            print_extraction(&extraction, view.as_ref(), format)?;
        }
        Commands::Normalize { text, file } => {
            let (_, raw) = read_input(text, file.as_deref())?;
            println!("{}", normalize(&raw));
        }
        Commands::History { db, limit } => {
            let path = db
                .or(config.db_path)
                .context("No database given; pass --db or set db_path in config")?;
            let store = SqliteStore::new(Some(&path))?;
            for entry in store.recent(limit)? {
                println!(
                    "#{} [{}] {}\n  Original Coordinates: {}\n  Adjusted Coordinates: {}",
                    entry.id,
                    entry.extracted_at,
                    entry.source,
                    entry.extraction.original,
                    entry.extraction.adjusted
                );
            }
        }
    }

    Ok(())
}

fn read_input(text: Option<String>, file: Option<&Path>) -> Result<(String, String)> {
    if let Some(text) = text {
        return Ok(("argument".to_string(), text));
    }
    if let Some(path) = file {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return Ok((path.display().to_string(), raw));
    }
    let mut raw = String::new();
    io::stdin().read_to_string(&mut raw).context("Failed to read stdin")?;
    Ok(("stdin".to_string(), raw))
}

fn print_extraction(
    extraction: &Extraction,
    view: Option<&MapView>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("Original Coordinates: {}", extraction.original);
            println!("Adjusted Coordinates: {}", extraction.adjusted);
            if let Some(view) = view {
                println!(
                    "Map center: {}, {} (zoom {})",
                    view.center[0], view.center[1], view.zoom
                );
            }
        }
        OutputFormat::Json => {
            let mut doc = json!({
                "original": extraction.original,
                "adjusted": extraction.adjusted,
            });
            if let Some(view) = view {
                doc["map"] = serde_json::to_value(view)?;
            }
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}
