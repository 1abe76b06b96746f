//! oasfix CLI entrypoint
//! Converts `openapi.yaml` in the current directory into a repaired,
//! verified `openapi.json` and prints a summary.

// Internal imports (std, crate)
use std::process::ExitCode;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use oasfix_core::{ConvertConfig, Report};
use tracing_subscriber::EnvFilter;

/// Convert openapi.yaml to openapi.json, filling in untyped array items.
///
/// Both file names are fixed and resolved against the current directory.
#[derive(Parser)]
#[command(name = "oasfix")]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    // Diagnostics go to stderr; progress lines go to stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_writer(std::io::stderr)
        .init();
    let _cli = Cli::parse();

    match run(&ConvertConfig::default()) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "conversion failed");
            println!("❌ Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(config: &ConvertConfig) -> anyhow::Result<Report> {
    println!("Reading OpenAPI YAML...");
    tracing::debug!(
        input = %config.input_path.display(),
        output = %config.output_path.display(),
        "starting conversion"
    );

    let report = oasfix_core::convert_with(config, |event| println!("{event}"))
        .with_context(|| {
            format!(
                "Failed to convert {} to {}",
                config.input_path.display(),
                config.output_path.display()
            )
        })?;

    if report.registry_present && !report.is_complete() {
        let missing: Vec<_> = report.missing_schemas().collect();
        tracing::warn!(
            ?missing,
            "expected schemas missing from components.schemas"
        );
    }
    Ok(report)
}
