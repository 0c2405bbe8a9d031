//! dflow CLI
//!
//! Reads a JSON program, prints its labeled listing and the reaching
//! definitions of every program point, optionally drawing diagrams.
//!
//! # Usage
//!
//! ```bash
//! # Listing and reaching definitions only
//! dflow program.json
//!
//! # Also write out/prog-cfg.svg, out/prog-ast.svg, out/prog-dast.svg
//! dflow program.json --prefix out/prog --format svg
//!
//! # Settings from a file, debug logging
//! dflow program.json --config dflow.yaml -v
//! ```

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use dflow_ir::config::{AnalysisConfig, OutputFormat};
use dflow_ir::pipeline::AnalysisPipeline;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Exit code when analysis succeeded but diagrams could not be produced
const RENDER_FAILED: u8 = 2;

#[derive(Parser)]
#[command(name = "dflow")]
#[command(about = "Reaching-definitions analysis for structured programs", long_about = None)]
struct Cli {
    /// Program as JSON (array of statements)
    program: PathBuf,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Diagram file prefix; enables rendering
    #[arg(short, long)]
    prefix: Option<String>,

    /// Diagram format (dot, png, svg, pdf)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Bound on fixpoint sweeps
    #[arg(long)]
    max_sweeps: Option<usize>,

    /// Skip the AST diagrams
    #[arg(long)]
    no_ast: bool,

    /// Debug logging (-vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => None,
        1 => Some(LevelFilter::DEBUG),
        _ => Some(LevelFilter::TRACE),
    };
    let filter = match (level, env::var_os(EnvFilter::DEFAULT_ENV)) {
        (Some(level), _) => EnvFilter::default().add_directive(level.into()),
        (None, Some(_)) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        (None, None) => EnvFilter::new("warn"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<AnalysisConfig> {
    let mut config = match &cli.config {
        Some(path) => AnalysisConfig::from_yaml(path)
            .with_context(|| format!("loading configuration {}", path.display()))?,
        None => AnalysisConfig::default(),
    };

    if let Some(max_sweeps) = cli.max_sweeps {
        config.max_sweeps = max_sweeps;
    }
    if let Some(prefix) = &cli.prefix {
        config.render.enabled = true;
        config.render.prefix = prefix.clone();
    }
    if let Some(format) = cli.format {
        config.render.format = format;
    }
    if cli.no_ast {
        config.render.ast_diagrams = false;
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(&cli)?;
    let pipeline = AnalysisPipeline::new(config).context("invalid configuration")?;

    let json = fs::read_to_string(&cli.program)
        .with_context(|| format!("reading {}", cli.program.display()))?;
    let result = pipeline
        .run_json(&json)
        .with_context(|| format!("analyzing {}", cli.program.display()))?;

    print!("{}", result.program_text());
    println!();
    print!("{}", result.emit_rd());

    for diagram in &result.rendered {
        match &diagram.image {
            Some(image) => eprintln!("wrote {}", image.display()),
            None => eprintln!("wrote {}", diagram.dot.display()),
        }
    }

    if let Some(err) = &result.render_error {
        eprintln!("error: {}", err);
        return Ok(ExitCode::from(RENDER_FAILED));
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
