//! Payment code inspection binary

use anyhow::Context;
use boleto_core::{Config, PaymentCode};
use clap::Parser;
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "boleto-inspect", version, about = "Decode and validate boleto payment codes")]
struct Cli {
    /// Print the typable line with separators
    #[arg(long)]
    formatted: bool,

    /// TOML configuration file (defaults to BOLETO_* environment variables)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bar codes or typable lines; separators are ignored
    #[arg(required = true)]
    codes: Vec<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::from_env().context("loading config from environment")?,
    };

    let mut failures = 0usize;
    for raw in &cli.codes {
        match PaymentCode::with_config(raw, &config) {
            Ok(code) => println!("{}", serde_json::to_string_pretty(&report(&code, cli.formatted))?),
            Err(e) => {
                failures += 1;
                tracing::error!(input = %raw, "{}", e);
            }
        }
    }

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn report(code: &PaymentCode, formatted: bool) -> serde_json::Value {
    let info = match code.code_info() {
        Ok(info) => json!(info),
        Err(e) => json!({ "error": e.to_string() }),
    };

    json!({
        "input": code.raw(),
        "info": info,
        "bar": code.bar(),
        "line": code.line(formatted),
        "valid": code.validate(),
        "checks": code.checks(),
    })
}
