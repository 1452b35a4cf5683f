//! zap-gate CLI - ZAP report threshold gate

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use zap_gate_cli::commands::{self, evaluate::EvaluateOptions};
use zap_gate_cli::{Cli, Commands};
use zap_gate_core::{ThresholdOverrides, ZapGateConfig};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    let report = match cli.command {
        Some(Commands::Init { ref path }) => {
            commands::init::run(path.as_deref())?;
            return Ok(ExitCode::SUCCESS);
        }
        Some(Commands::Evaluate { ref report }) => report.as_path(),
        // required by clap whenever no subcommand is given
        None => cli.report.as_deref().context("missing <REPORT> argument")?,
    };

    let options = EvaluateOptions {
        report,
        format: cli.format,
        overrides: ThresholdOverrides {
            max_high: cli.max_high,
            max_medium: cli.max_medium,
        },
        no_color: cli.no_color,
    };

    let outcome = commands::evaluate::run(
        &options,
        || load_config(cli.config.as_deref()),
        |var| std::env::var(var).ok(),
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )?;

    Ok(outcome.into())
}

fn load_config(explicit: Option<&Path>) -> Result<ZapGateConfig> {
    match explicit {
        Some(path) => ZapGateConfig::from_file(path),
        None => {
            let cwd = std::env::current_dir()?;
            ZapGateConfig::find_and_load(&cwd)
        }
    }
}
