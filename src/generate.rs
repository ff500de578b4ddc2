//! Batch generation over a directory of event schemas.
//!
//! Each schema file is interpreted and rendered independently on the rayon
//! pool. A broken schema is recorded in the [`BatchReport`] and does not stop
//! the rest of the batch; only configuration problems (missing template,
//! unreadable schema directory) abort the run before anything is scheduled.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::interpret::interpret_file;
use crate::render::{EventTemplate, render_to_dir};

/// Result of processing one schema file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    /// The schema file that was processed.
    pub schema_path: PathBuf,

    /// What happened to it. Serialized inline under a `status` tag.
    #[serde(flatten)]
    pub status: FileStatus,
}

/// Per-file result of interpreting and rendering one schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    /// The source file was written to `output_path`.
    Generated { output_path: PathBuf },

    /// No file was written. `error` holds the message and its full cause
    /// chain (e.g. the template variable that could not be resolved).
    Failed { error: String },
}

/// Per-file outcomes of a batch, in schema discovery order.
#[derive(Debug, Default, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    /// Outcomes whose file was generated.
    pub fn succeeded(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, FileStatus::Generated { .. }))
    }

    /// Outcomes whose schema could not be turned into a file.
    pub fn failed(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, FileStatus::Failed { .. }))
    }

    pub fn has_failures(&self) -> bool {
        self.failed().next().is_some()
    }
}

/// List the `.json` files in `dir`, sorted by path.
pub fn discover_schemas(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        Error::Config(format!(
            "cannot read schema directory {}: {e}",
            dir.display()
        ))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            Error::Config(format!(
                "cannot read schema directory {}: {e}",
                dir.display()
            ))
        })?;
        let path = entry.path();
        if path.is_file() && has_json_extension(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Generate one source file per schema in `config.schema_dir`.
///
/// Returns `Err` only for run-level configuration failures; per-file
/// failures are reported in the [`BatchReport`].
pub fn generate(config: &GeneratorConfig) -> Result<BatchReport> {
    config.validate()?;
    let template =
        EventTemplate::load(&config.template_path).map_err(|e| Error::TemplateLoad {
            path: config.template_path.clone(),
            source: Box::new(e),
        })?;
    let schemas = discover_schemas(&config.schema_dir)?;

    tracing::info!(
        "Generating {} event sources from {}",
        schemas.len(),
        config.schema_dir.display()
    );

    let outcomes = schemas
        .par_iter()
        .map(|schema_path| {
            let status = match generate_one(&template, schema_path, config) {
                Ok(output_path) => FileStatus::Generated { output_path },
                Err(e) => {
                    let error = e.chain();
                    tracing::warn!("Skipping {}: {error}", schema_path.display());
                    FileStatus::Failed { error }
                }
            };
            FileOutcome {
                schema_path: schema_path.clone(),
                status,
            }
        })
        .collect();

    Ok(BatchReport { outcomes })
}

fn generate_one(
    template: &EventTemplate,
    schema_path: &Path,
    config: &GeneratorConfig,
) -> Result<PathBuf> {
    let descriptor = interpret_file(schema_path)?;
    render_to_dir(template, &descriptor, &config.output_dir, &config.extension)
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}
