//! Trace variability analyzer
//!
//! Loads one or more event logs and reports the number of variants, the
//! weighted edit distance and the prefix entropy of each.
//!
//! # Usage
//!
//! ```bash
//! # Analyze a JSON case file
//! tracevar logs/orders.json
//!
//! # Compare several logs, all pairs for the edit distance
//! tracevar --pairing all-pairs a.json b.jsonl c.ndjson
//!
//! # Machine-readable output, logs written to ./logs
//! tracevar --json --log-dir logs orders.json
//!
//! # Debug logging
//! RUST_LOG=debug tracevar orders.json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracevar_cli::{AppConfig, LogFormat, process_file, render_summary, render_text};
use tracevar_logging::{
    FileConfig, LogConfig, SourceContextGuard, TracevarSubscriberBuilder, source_span,
};
use tracevar_metrics::{PairingStrategy, VariabilityAnalyzer};
use tracing::{error, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Pairing {
    /// First stored trace against every other trace
    Anchor,
    /// Every unordered pair of distinct traces
    AllPairs,
}

impl From<Pairing> for PairingStrategy {
    fn from(pairing: Pairing) -> Self {
        match pairing {
            Pairing::Anchor => PairingStrategy::Anchor,
            Pairing::AllPairs => PairingStrategy::AllPairs,
        }
    }
}

#[derive(Parser)]
#[command(name = "tracevar")]
#[command(about = "Measure the trace variability of event logs")]
#[command(version)]
struct Args {
    /// Event log files (.json, .jsonl or .ndjson)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Input format, detected from the file extension if omitted
    #[arg(short, long, value_enum)]
    format: Option<LogFormat>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Trace pairs compared by the edit-distance metric
    #[arg(long, value_enum)]
    pairing: Option<Pairing>,

    /// Logarithm base of the prefix entropy
    #[arg(long)]
    log_base: Option<f64>,

    /// Compute edit distance and prefix entropy on separate threads
    #[arg(long)]
    parallel: bool,

    /// Print reports as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Use pretty console logging instead of JSONL
    #[arg(short, long)]
    pretty: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    level: Option<String>,

    /// Also write JSONL logs to this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Don't initialize logging
    #[arg(long)]
    no_logging: bool,
}

impl Args {
    /// Configuration file values overridden by command-line flags
    fn resolve_config(&self) -> anyhow::Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => AppConfig {
                logging: LogConfig::quiet(),
                ..AppConfig::default()
            },
        };

        if let Some(pairing) = self.pairing {
            config.metrics.pairing = pairing.into();
        }
        if let Some(base) = self.log_base {
            config.metrics.entropy_log_base = base;
        }
        if self.parallel {
            config.metrics.parallel = true;
        }
        if let Some(level) = &self.level {
            config.logging.default_level = level.clone();
        }
        if self.pretty {
            config.logging.console.pretty = true;
            config.logging.console.ansi = true;
        }
        if let Some(dir) = &self.log_dir {
            config.logging.file = Some(FileConfig::in_directory(dir));
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

fn run(args: &Args, config: AppConfig) -> anyhow::Result<bool> {
    let analyzer =
        VariabilityAnalyzer::new(config.metrics).context("Invalid metrics configuration")?;
    let mut reports = Vec::with_capacity(args.files.len());
    let mut failed = false;

    for path in &args.files {
        let _context = SourceContextGuard::new(path.display().to_string());
        let _span = source_span().entered();

        match process_file(path, args.format, &analyzer) {
            Ok(report) => reports.push(report),
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to process log");
                eprintln!("{}: {}", path.display(), e);
                failed = true;
            }
        }
    }

    if args.json {
        let json = serde_json::to_string_pretty(&reports).context("Failed to serialize reports")?;
        println!("{}", json);
    } else {
        for report in &reports {
            println!("{}", render_text(report));
        }
        if reports.len() > 1 {
            print!("{}", render_summary(&reports));
        }
    }

    info!(processed = reports.len(), failed, "Done");
    Ok(!failed)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match args.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(2);
        }
    };

    // Keep the guard alive so buffered file logs are flushed on exit
    let _guard = if args.no_logging {
        None
    } else {
        match TracevarSubscriberBuilder::new()
            .with_config(config.logging.clone())
            .try_init()
        {
            Ok(guard) => guard,
            Err(e) => {
                eprintln!("Error: failed to initialize logging: {}", e);
                return ExitCode::from(2);
            }
        }
    };

    match run(&args, config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
