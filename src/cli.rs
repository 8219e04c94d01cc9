//! Command-line interface for sintaxis.

use anyhow::Context;
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::analyzer::Analyzer;
use crate::config::{self, Config};
use crate::labels::Language;
use crate::report::{self, InputReport};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Dual-mode structural analyzer.
///
/// Reads a fragment of class/method code or `si … entonces` pseudocode and
/// prints the derivation tree of the structure it recognizes, optionally
/// followed by a character-by-character classification.
#[derive(Parser)]
#[command(name = "sintaxis")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the derivation tree of source text
    Analyze(AnalyzeArgs),
    /// Write a default configuration file
    Init(InitArgs),
}

/// Arguments for the analyze command.
#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Files to analyze (default: standard input)
    pub paths: Vec<PathBuf>,

    /// Analyze this text instead of files or standard input
    #[arg(short, long, conflicts_with = "paths")]
    pub text: Option<String>,

    /// Also print the character-by-character listing
    #[arg(long)]
    pub chars: bool,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Label language: es or en (overrides the config file)
    #[arg(short, long)]
    pub language: Option<String>,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "sintaxis.yaml")]
    pub output: PathBuf,
}

/// A named piece of source text.
struct Input {
    name: String,
    text: String,
}

/// Gather inputs from `--text`, the given paths, or standard input.
fn collect_inputs(args: &AnalyzeArgs) -> anyhow::Result<Vec<Input>> {
    if let Some(text) = &args.text {
        return Ok(vec![Input {
            name: "<text>".to_string(),
            text: text.clone(),
        }]);
    }

    if args.paths.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading standard input")?;
        return Ok(vec![Input {
            name: "<stdin>".to_string(),
            text,
        }]);
    }

    args.paths
        .iter()
        .map(|path| {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Ok(Input {
                name: path.to_string_lossy().to_string(),
                text,
            })
        })
        .collect()
}

/// Resolve the effective config for an analyze run.
fn resolve_config(args: &AnalyzeArgs) -> anyhow::Result<Config> {
    let mut config = Config::load(args.config.as_deref())?;

    if let Some(lang) = &args.language {
        config.language = lang
            .parse::<Language>()
            .map_err(|e| anyhow::anyhow!(e))?;
    }

    config::validate(&config).context("invalid config")?;
    Ok(config)
}

/// Run the analyze command.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<i32> {
    // Validate format
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let config = match resolve_config(args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let inputs = collect_inputs(args)?;
    tracing::debug!(inputs = inputs.len(), "analyzing");

    // One analyzer per input; analyzers are never shared across threads.
    let reports: Vec<InputReport> = inputs
        .par_iter()
        .map(|input| {
            let mut analyzer = Analyzer::new(config.clone());
            InputReport::build(&mut analyzer, &input.name, &input.text, args.chars)
        })
        .collect();

    match args.format.as_str() {
        "json" => report::write_json(&reports)?,
        _ => report::write_pretty(&reports, &config.indent()),
    }

    if reports.iter().any(InputReport::failed) {
        Ok(EXIT_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    // Check if output already exists
    if args.output.exists() {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Remove it or use --output to specify a different path");
        return Ok(EXIT_ERROR);
    }

    // Create output directory if needed
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create directory: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    if let Err(e) = std::fs::write(&args.output, config::DEFAULT_TEMPLATE) {
        eprintln!("Error: failed to write config: {}", e);
        return Ok(EXIT_ERROR);
    }

    println!("Created {}", args.output.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to pick the label language and limits", args.output.display());
    println!("  2. Run: sintaxis analyze <file> --config {}", args.output.display());

    Ok(EXIT_SUCCESS)
}
