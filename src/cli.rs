use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "isogeo-formatter",
    about = "Normalize Isogeo metadata sections and sanitize text for XML documents",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file [default: ./.isogeo-formatter/config.toml, fallback ~/.config/isogeo-formatter/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Language for labels and dates (overrides the config file)
    #[arg(long, global = true, value_name = "CODE")]
    pub lang: Option<String>,

    /// Report format
    #[arg(long, global = true, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Exit with code 1 when any record was skipped
    #[arg(long, global = true)]
    pub deny_skipped: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Normalize a JSON array of conditions
    Conditions {
        /// JSON file, or `-` for stdin
        input: PathBuf,
    },
    /// Normalize a JSON array of limitations
    Limitations {
        /// JSON file, or `-` for stdin
        input: PathBuf,
    },
    /// Normalize a JSON array of conformity records
    Specifications {
        /// JSON file, or `-` for stdin
        input: PathBuf,
    },
    /// Normalize every section of one metadata object
    Metadata {
        /// JSON file, or `-` for stdin
        input: PathBuf,
    },
    /// Sanitize text for embedding into XML
    Clean {
        /// Text to clean; read from stdin when omitted
        text: Option<String>,

        /// Remove recognized tags as well (overrides the config file)
        #[arg(long)]
        strict: bool,

        /// Replace each removed tag with this character (implies --strict)
        #[arg(long, value_name = "CHAR")]
        substitute: Option<char>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
    Xml,
}
