//! zap-gate CLI library — exposed for integration tests

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "zap-gate")]
#[command(about = "Fail CI when a ZAP scan report exceeds alert thresholds", long_about = None)]
#[command(version = zap_gate_core::VERSION)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// ZAP JSON report to evaluate
    #[arg(required = true)]
    pub report: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Maximum allowed High alerts (overrides ZAP_MAX_HIGH_ALERTS)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub max_high: Option<i64>,

    /// Maximum allowed Medium alerts (overrides ZAP_MAX_MEDIUM_ALERTS)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub max_medium: Option<i64>,

    /// Path to a .zap-gate.toml (default: search upwards from the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a report against the thresholds (default command)
    Evaluate {
        /// ZAP JSON report to evaluate
        report: PathBuf,
    },

    /// Write a default .zap-gate.toml
    Init {
        /// Directory to initialize (default: current directory)
        path: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Github,
}

impl OutputFormat {
    /// Parse the `output.format` value from the config file.
    pub fn from_config(value: &str) -> Option<Self> {
        match value {
            "terminal" => Some(OutputFormat::Terminal),
            "json" => Some(OutputFormat::Json),
            "github" => Some(OutputFormat::Github),
            _ => None,
        }
    }
}
