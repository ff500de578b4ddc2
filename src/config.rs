//! Generator paths derived from the two CLI base directories.
//!
//! ```text
//! <generator-dir>/templates/event.rs.tera   template
//! <sdk-dir>/schemas/*.json                   event schemas
//! <sdk-dir>/src/events/                      generated sources
//! ```

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Template location relative to the generator base directory.
pub const TEMPLATE_PATH: &str = "templates/event.rs.tera";

/// Schema directory relative to the SDK base directory.
pub const SCHEMA_DIR: &str = "schemas";

/// Output directory relative to the SDK base directory.
pub const OUTPUT_DIR: &str = "src/events";

/// Extension of generated source files.
pub const DEFAULT_EXTENSION: &str = "rs";

/// Where to read templates and schemas from and where to write output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub template_path: PathBuf,
    pub schema_dir: PathBuf,
    pub output_dir: PathBuf,
    pub extension: String,
}

impl GeneratorConfig {
    /// Standard layout under a generator directory and an SDK directory.
    pub fn from_base_dirs(generator_dir: &Path, sdk_dir: &Path) -> Self {
        Self {
            template_path: generator_dir.join(TEMPLATE_PATH),
            schema_dir: sdk_dir.join(SCHEMA_DIR),
            output_dir: sdk_dir.join(OUTPUT_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Check the inputs that make a whole run pointless when absent.
    pub fn validate(&self) -> Result<()> {
        if !self.template_path.is_file() {
            return Err(Error::Config(format!(
                "template not found at {}",
                self.template_path.display()
            )));
        }
        if !self.schema_dir.is_dir() {
            return Err(Error::Config(format!(
                "schema directory {} does not exist",
                self.schema_dir.display()
            )));
        }
        if self.extension.is_empty() {
            return Err(Error::Config("output extension is empty".to_string()));
        }
        Ok(())
    }
}
