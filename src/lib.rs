//! Generate typed CDEvent sources from CDEvents JSON schemas.
//!
//! `cdevents-gen` reads each event schema in a directory, derives a
//! [`Descriptor`](descriptor::Descriptor) from it (subject, predicate,
//! version, display names, flattened content fields) and renders that
//! descriptor through a [`tera`] template into one source file per event,
//! named `{Subject}{Predicate}CDEvent.{ext}`.
//!
//! # Features
//!
//! - Parses the dotted event identity (`dev.cdevents.<subject>.<predicate>.<version>`)
//!   into named segments and fails clearly on malformed strings
//! - Splits compound subjects such as `pipelinerun` → `PipelineRun`
//! - Flattens one level of nested content objects into parent/child field pairs
//! - Keeps schema property order in the generated output
//! - Processes schemas in parallel; one broken schema never stops the batch
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use cdevents_gen::config::GeneratorConfig;
//!
//! let config = GeneratorConfig::from_base_dirs(Path::new("generator"), Path::new("sdk"));
//! let report = cdevents_gen::generate::generate(&config)?;
//! eprintln!(
//!     "Generated {} files, {} failed",
//!     report.succeeded().count(),
//!     report.failed().count()
//! );
//! # Ok::<(), cdevents_gen::error::Error>(())
//! ```

pub mod config;
pub mod descriptor;
pub mod error;
pub mod generate;
pub mod interpret;
pub mod naming;
pub mod render;
pub mod schema;
