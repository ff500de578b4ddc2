//! Render descriptors through a `tera` template into source files.
//!
//! The template is compiled once and executed per descriptor. Its context
//! is the serialized [`Descriptor`] and nothing else. Besides the built-in
//! filters the engine exposes `snake_case` (`pipelineName` → `pipeline_name`,
//! for building compound names) and `rust_ident` (snake_case plus keyword
//! escaping, `type` → `r#type`, for standalone field and parameter names).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::{Context, Tera, Value};

use crate::descriptor::Descriptor;
use crate::error::{Error, Result};
use crate::naming::{to_rust_ident, to_snake_case};

const TEMPLATE_NAME: &str = "event";

/// Suffix appended to the type stem of every generated file.
pub const OUTPUT_SUFFIX: &str = "CDEvent";

/// A compiled event template.
#[derive(Debug)]
pub struct EventTemplate {
    tera: Tera,
}

impl EventTemplate {
    /// Compile a template from source text.
    pub fn compile(source: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.register_filter("snake_case", snake_case_filter);
        tera.register_filter("rust_ident", rust_ident_filter);
        tera.add_raw_template(TEMPLATE_NAME, source)?;
        Ok(Self { tera })
    }

    /// Read and compile a template file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| Error::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::compile(&source)
    }

    /// Execute the template with `descriptor` as its only context.
    pub fn render(&self, descriptor: &Descriptor) -> Result<String> {
        let context = Context::from_serialize(descriptor)?;
        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }
}

/// File name for a descriptor's generated source, e.g.
/// `PipelineRunFinishedCDEvent.rs`.
pub fn output_file_name(descriptor: &Descriptor, extension: &str) -> String {
    format!("{}{OUTPUT_SUFFIX}.{extension}", descriptor.type_stem())
}

/// Render `descriptor` and write it into `output_dir`, replacing any
/// existing file. Returns the written path.
pub fn render_to_dir(
    template: &EventTemplate,
    descriptor: &Descriptor,
    output_dir: &Path,
    extension: &str,
) -> Result<PathBuf> {
    let rendered = template.render(descriptor)?;
    let path = output_dir.join(output_file_name(descriptor, extension));
    write_file(&path, &rendered)?;
    tracing::info!("Rendered event template written to {}", path.display());
    Ok(path)
}

fn snake_case_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("snake_case filter expects a string"))?;
    Ok(Value::String(to_snake_case(s)))
}

fn rust_ident_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("rust_ident filter expects a string"))?;
    Ok(Value::String(to_rust_ident(s)))
}

/// Write content to a file, creating parent directories as needed.
fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::Write {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(path, content).map_err(|e| Error::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{ContentField, ContentObjectField};
    use pretty_assertions::assert_eq;

    fn descriptor() -> Descriptor {
        Descriptor {
            subject: "taskrun".to_string(),
            predicate: "started".to_string(),
            version: "0.1.0".to_string(),
            capitalized_subject: "Taskrun".to_string(),
            capitalized_predicate: "Started".to_string(),
            upper_case_subject: "TASKRUN".to_string(),
            schema_file_name: "taskrunstarted.json".to_string(),
            object_name: Some("pipelineRun".to_string()),
            capitalized_object_name: Some("PipelineRun".to_string()),
            content_fields: vec![
                ContentField {
                    name: "taskName".to_string(),
                    capitalized_name: "TaskName".to_string(),
                    data_type: "String".to_string(),
                },
                ContentField {
                    name: "url".to_string(),
                    capitalized_name: "Url".to_string(),
                    data_type: "String".to_string(),
                },
            ],
            content_object_fields: vec![ContentObjectField {
                name: "id".to_string(),
                capitalized_name: "Id".to_string(),
                parent_name: "pipelineRun".to_string(),
                capitalized_parent_name: "PipelineRun".to_string(),
                data_type: "String".to_string(),
            }],
        }
    }

    #[test]
    fn output_file_name_uses_type_stem() {
        assert_eq!(
            output_file_name(&descriptor(), "rs"),
            "TaskrunStartedCDEvent.rs"
        );
        assert_eq!(
            output_file_name(&descriptor(), "java"),
            "TaskrunStartedCDEvent.java"
        );
    }

    #[test]
    fn renders_descriptor_fields() {
        let template = EventTemplate::compile(
            "{{ capitalizedSubject }}{{ capitalizedPredicate }} v{{ version }} ({{ schemaFileName }})\n\
             {% for f in contentFields %}{{ f.name | snake_case }}: {{ f.dataType }}\n{% endfor %}\
             {% if objectName %}{% for f in contentObjectFields %}{{ f.parentName }}.{{ f.name }}\n{% endfor %}{% endif %}",
        )
        .unwrap();
        let out = template.render(&descriptor()).unwrap();
        assert_eq!(
            out,
            "TaskrunStarted v0.1.0 (taskrunstarted.json)\n\
             task_name: String\n\
             url: String\n\
             pipelineRun.id\n"
        );
    }

    #[test]
    fn rust_ident_filter_escapes_keywords() {
        let template = EventTemplate::compile(
            "{% for f in contentFields %}{{ f.name | rust_ident }} set_{{ f.name | snake_case }}\n{% endfor %}",
        )
        .unwrap();
        let mut d = descriptor();
        d.content_fields[0].name = "type".to_string();
        let out = template.render(&d).unwrap();
        assert_eq!(out, "r#type set_type\nurl set_url\n");
    }

    #[test]
    fn rendering_is_idempotent() {
        let template =
            EventTemplate::compile("{{ upperCaseSubject }} {% for f in contentFields %}{{ f.capitalizedName }} {% endfor %}")
                .unwrap();
        let d = descriptor();
        assert_eq!(template.render(&d).unwrap(), template.render(&d).unwrap());
    }

    #[test]
    fn invalid_template_fails_to_compile() {
        let err = EventTemplate::compile("{% for f in contentFields %}unterminated").unwrap_err();
        assert!(err.is_render());
    }

    #[test]
    fn undefined_variable_fails_to_render() {
        let template = EventTemplate::compile("{{ notAField }}").unwrap();
        let err = template.render(&descriptor()).unwrap_err();
        assert!(matches!(err, Error::Template(_)));
    }

    #[test]
    fn render_to_dir_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("events");
        let stale = out_dir.join("TaskrunStartedCDEvent.rs");
        std::fs::create_dir_all(&out_dir).unwrap();
        std::fs::write(&stale, "stale contents").unwrap();

        let template = EventTemplate::compile("// {{ subject }}.{{ predicate }}\n").unwrap();
        let path = render_to_dir(&template, &descriptor(), &out_dir, "rs").unwrap();

        assert_eq!(path, stale);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "// taskrun.started\n");
    }

    #[test]
    fn load_missing_template_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = EventTemplate::load(&dir.path().join("missing.tera")).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }
}
