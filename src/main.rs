use std::path::PathBuf;
use std::process;

use cdevents_gen::config::GeneratorConfig;
use cdevents_gen::generate::FileStatus;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Generate typed CDEvent sources from CDEvents JSON schemas.
///
/// Reads every schema in <SDK_DIR>/schemas, renders
/// <GENERATOR_DIR>/templates/event.rs.tera for each one and writes the
/// results to <SDK_DIR>/src/events.
#[derive(Parser)]
#[command(name = "cdevents-gen", version, about)]
struct Cli {
    /// Base directory containing the event template.
    generator_dir: PathBuf,

    /// Base directory containing the schema directory and receiving the
    /// generated sources.
    sdk_dir: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("error: {e}");

            // Print cause chain.
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = std::error::Error::source(cause);
            }

            process::exit(1);
        }
    }
}

/// Returns whether every schema was generated.
fn run(cli: Cli) -> cdevents_gen::error::Result<bool> {
    let config = GeneratorConfig::from_base_dirs(&cli.generator_dir, &cli.sdk_dir);
    eprintln!("Loading schemas from {}", config.schema_dir.display());

    let report = cdevents_gen::generate::generate(&config)?;

    for outcome in report.failed() {
        if let FileStatus::Failed { error } = &outcome.status {
            eprintln!("failed: {}: {error}", outcome.schema_path.display());
        }
    }
    eprintln!(
        "Generated {} event sources into {}, {} failed",
        report.succeeded().count(),
        config.output_dir.display(),
        report.failed().count()
    );

    Ok(!report.has_failures())
}
