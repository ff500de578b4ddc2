//! Error types for the cdevents-gen crate.

use std::path::PathBuf;

/// Errors that can occur while generating CDEvent sources.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The event schema lacks required structure or carries a malformed
    /// identity string.
    #[error("schema format error: {0}")]
    SchemaFormat(String),

    /// Failed to read a file from disk.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON parse error with context.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Template compilation or execution failed.
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    /// Failed to write a generated source file.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configured template could not be read or compiled. Nothing is
    /// generated when this is returned.
    #[error("cannot load template {path}")]
    TemplateLoad {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    /// Run-level configuration problem (missing template file, unreadable
    /// schema directory). Nothing is generated when this is returned.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error came from rendering a descriptor or writing its
    /// output file.
    pub fn is_render(&self) -> bool {
        matches!(self, Error::Template(_) | Error::Write { .. })
    }

    /// The message followed by every distinct cause, joined with `": "`.
    ///
    /// Template errors keep the parse location or missing variable in their
    /// causes, so this is what reports should show.
    pub fn chain(&self) -> String {
        let mut out = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            let text = cause.to_string();
            if !out.contains(&text) {
                out.push_str(": ");
                out.push_str(&text);
            }
            source = cause.source();
        }
        out
    }
}

/// Convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_errors_are_classified() {
        let write = Error::Write {
            path: PathBuf::from("out/PipelineRunFinishedCDEvent.rs"),
            source: std::io::Error::other("disk full"),
        };
        assert!(write.is_render());
        assert!(Error::Template(tera::Error::msg("bad tag")).is_render());
        assert!(!Error::SchemaFormat("missing type enum".to_string()).is_render());
    }

    #[test]
    fn chain_includes_template_causes() {
        let mut tera = tera::Tera::default();
        tera.add_raw_template("event", "{{ missingVariable }}").unwrap();
        let render_err = tera
            .render("event", &tera::Context::new())
            .unwrap_err();
        let err = Error::Template(render_err);

        let chain = err.chain();
        assert!(chain.starts_with("template error: "), "{chain}");
        assert!(chain.contains("missingVariable"), "{chain}");
    }

    #[test]
    fn chain_does_not_repeat_wrapped_messages() {
        let err = Error::Read {
            path: PathBuf::from("schemas/broken.json"),
            source: std::io::Error::other("permission denied"),
        };
        assert_eq!(
            err.chain(),
            "failed to read schemas/broken.json: permission denied"
        );
    }

    #[test]
    fn template_load_keeps_source() {
        let err = Error::TemplateLoad {
            path: PathBuf::from("templates/event.rs.tera"),
            source: Box::new(Error::Template(tera::Error::msg("unexpected end of input"))),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.chain().contains("unexpected end of input"));
    }

    #[test]
    fn write_error_mentions_path() {
        let err = Error::Write {
            path: PathBuf::from("out/TaskRunStartedCDEvent.rs"),
            source: std::io::Error::other("denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("TaskRunStartedCDEvent.rs"));
        assert!(msg.contains("denied"));
    }
}
