use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rota::{scan, ErrorDocument, ScanReport, ScheduleParser, TextFeed};
use rota_core::config::Config;
use rota_core::ParserSettings;
use rota_feeds::{FileFeed, StdinFeed, TesseractFeed};

/// Exit status for a schedule the parser refused (sysexits EX_DATAERR).
const EXIT_PARSE_ERROR: u8 = 65;

#[derive(Parser)]
#[command(name = "rota", version, about = "Weekly work-schedule OCR text to JSON")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file layered over the built-in defaults
    /// (default: ~/.config/rota/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    /// Leave the raw OCR text out of the report.
    #[arg(long, global = true)]
    no_raw: bool,

    /// Log classifier decisions to stderr (RUST_LOG overrides the level).
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse OCR text that has already been extracted.
    Parse {
        /// Text file; reads stdin when omitted or `-`.
        input: Option<PathBuf>,
    },

    /// Run the OCR engine on a schedule photo, then parse its output.
    Scan {
        /// Image file handed to the OCR engine.
        image: PathBuf,

        /// OCR language(s), e.g. `eng` or `eng+spa`.
        #[arg(long)]
        lang: Option<String>,

        /// Tesseract page segmentation mode.
        #[arg(long)]
        psm: Option<u8>,

        /// Seconds to wait for the OCR engine.
        #[arg(long)]
        timeout: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("rota debug log started");
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "config unavailable; using defaults");
            Config::defaults()
        }),
    };
    let parser = ScheduleParser::new(&ParserSettings::from(&config));
    let include_raw = !cli.no_raw;

    let result = match cli.command {
        Commands::Parse { input } => match input {
            Some(path) if path.as_os_str() != "-" => {
                scan(&FileFeed::new(path), &parser, include_raw).await
            }
            _ => scan(&StdinFeed, &parser, include_raw).await,
        },
        Commands::Scan {
            image,
            lang,
            psm,
            timeout,
        } => {
            if let Some(lang) = lang {
                config.ocr.lang = lang;
            }
            if let Some(psm) = psm {
                config.ocr.psm = psm;
            }
            let mut feed = TesseractFeed::new(image, &config.ocr);
            if let Some(secs) = timeout {
                feed = feed.with_timeout(Duration::from_secs(secs));
            }
            scan_image(&feed, &parser, include_raw).await
        }
    };

    match result {
        Ok(report) => {
            print_json(&report, cli.pretty)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let doc = ErrorDocument::from_error(&err);
            if !doc.is_parse() {
                return Err(err);
            }
            print_json(&doc, cli.pretty)?;
            Ok(ExitCode::from(EXIT_PARSE_ERROR))
        }
    }
}

async fn scan_image(
    feed: &TesseractFeed,
    parser: &ScheduleParser,
    include_raw: bool,
) -> anyhow::Result<ScanReport> {
    scan(feed, parser, include_raw)
        .await
        .with_context(|| format!("failed to scan {}", feed.label()))
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
