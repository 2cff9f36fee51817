//! `isogeo-formatter` — normalize Isogeo metadata sections from JSON and
//! render them for people or for XML documents.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config (`config::load_config`) and build a `Formatter` for the
//!    selected language.
//! 3. Read the JSON input (file or stdin) and normalize it.
//! 4. Render the requested report (terminal, JSON or XML).
//! 5. Exit `0`, or `1` on unreadable input or, with `--deny-skipped`, when
//!    any record was skipped.

mod cli;

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, ReportFormat};
use isogeo_formatter::config::load_config;
use isogeo_formatter::models::FormattedMetadata;
use isogeo_formatter::normalize::value_kind;
use isogeo_formatter::{clean, report, Formatter, SanitizeMode};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd, cli.config.as_deref())?;
    let lang = cli.lang.clone().unwrap_or_else(|| config.lang.clone());
    let formatter = Formatter::new(&lang, &config)?;

    let md = match &cli.command {
        Command::Clean {
            text,
            strict,
            substitute,
        } => {
            let mode = match (strict, substitute) {
                (_, Some(c)) => SanitizeMode::Strict {
                    substitute: Some(*c),
                },
                (true, None) => SanitizeMode::strict(),
                (false, None) => formatter.mode(),
            };
            match text {
                Some(text) => println!("{}", clean(text.as_str(), mode)),
                None => print!("{}", clean(read_input(Path::new("-"))?.as_str(), mode)),
            }
            return Ok(());
        }
        Command::Conditions { input } => {
            let raw = read_list(input)?;
            let conditions = formatter.conditions(&raw);
            FormattedMetadata {
                skipped: raw.len() - conditions.len(),
                conditions,
                ..FormattedMetadata::default()
            }
        }
        Command::Limitations { input } => {
            let raw = read_list(input)?;
            let limitations = formatter.limitations(&raw);
            FormattedMetadata {
                skipped: raw.len() - limitations.len(),
                limitations,
                ..FormattedMetadata::default()
            }
        }
        Command::Specifications { input } => {
            let raw = read_list(input)?;
            let specifications = formatter.specifications(&raw);
            FormattedMetadata {
                skipped: raw.len() - specifications.len(),
                specifications,
                ..FormattedMetadata::default()
            }
        }
        Command::Metadata { input } => formatter.format_metadata(&read_json(input)?),
    };

    match cli.report {
        ReportFormat::Terminal => report::terminal::render(&md, &formatter, cli.quiet)?,
        ReportFormat::Json => {
            let json = match &cli.command {
                Command::Conditions { .. } => serde_json::to_string_pretty(&md.conditions)?,
                Command::Limitations { .. } => serde_json::to_string_pretty(&md.limitations)?,
                Command::Specifications { .. } => {
                    serde_json::to_string_pretty(&md.specifications)?
                }
                _ => serde_json::to_string_pretty(&md)?,
            };
            println!("{}", json);
        }
        ReportFormat::Xml => println!("{}", report::xml::render(&md, &formatter)?),
    }

    // Exit code: 1 if records were dropped and the caller asked to know
    if cli.deny_skipped && md.skipped > 0 {
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr so JSON and XML on stdout stay clean. `RUST_LOG` wins over
/// `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn read_json(path: &Path) -> Result<Value> {
    let content = read_input(path)?;
    serde_json::from_str(&content).with_context(|| format!("parsing JSON from {}", path.display()))
}

fn read_list(path: &Path) -> Result<Vec<Value>> {
    match read_json(path)? {
        Value::Array(items) => Ok(items),
        other => bail!(
            "{}: expected a JSON array of records, got {}",
            path.display(),
            value_kind(&other)
        ),
    }
}
