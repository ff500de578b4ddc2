//! Turn one event schema document into a [`Descriptor`].
//!
//! The interpreter only understands the CDEvents schema family: a dotted
//! identity string in the context block and a content block whose
//! properties are either scalars or a single object one level deep.

use std::path::Path;

use serde_json::{Map, Value};

use crate::descriptor::{ContentField, ContentObjectField, Descriptor};
use crate::error::Result;
use crate::naming::{capitalize, capitalize_subject, data_type, upper_case};
use crate::schema;

/// Build a descriptor from a parsed schema document.
///
/// `schema_file_name` is carried through to the descriptor untouched.
/// Either every piece of the descriptor is derived or an error is returned.
pub fn interpret(document: &Value, schema_file_name: &str) -> Result<Descriptor> {
    let event_type = schema::event_type(document)?;
    tracing::debug!(event_type = %event_type, file = schema_file_name, "parsed event type");

    let content = schema::content_properties(document)?;
    let flattened = flatten_content(content);

    Ok(Descriptor {
        capitalized_subject: capitalize_subject(&event_type.subject),
        capitalized_predicate: capitalize(&event_type.predicate),
        upper_case_subject: upper_case(&event_type.subject),
        subject: event_type.subject,
        predicate: event_type.predicate,
        version: event_type.version,
        schema_file_name: schema_file_name.to_string(),
        capitalized_object_name: flattened.object_name.as_deref().map(capitalize),
        object_name: flattened.object_name,
        content_fields: flattened.fields,
        content_object_fields: flattened.object_fields,
    })
}

/// Read a schema file and build its descriptor.
pub fn interpret_file(path: &Path) -> Result<Descriptor> {
    tracing::info!("Processing event schema file: {}", path.display());
    let document = schema::load_schema(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    interpret(&document, &file_name)
}

#[derive(Debug, Default)]
struct FlattenedContent {
    object_name: Option<String>,
    fields: Vec<ContentField>,
    object_fields: Vec<ContentObjectField>,
}

/// Split content properties into scalar fields and the children of the
/// object-typed property, keeping document order.
fn flatten_content(content: &Map<String, Value>) -> FlattenedContent {
    let mut flattened = FlattenedContent::default();

    for (name, property) in content {
        if !is_object(property) {
            flattened.fields.push(ContentField {
                name: name.clone(),
                capitalized_name: capitalize(name),
                data_type: data_type(property).to_string(),
            });
            continue;
        }

        // The schema family has at most one object property; the last wins.
        let capitalized_parent = capitalize(name);
        if let Some(children) = property.get("properties").and_then(Value::as_object) {
            for (child, child_property) in children {
                flattened.object_fields.push(ContentObjectField {
                    name: child.clone(),
                    capitalized_name: capitalize(child),
                    parent_name: name.clone(),
                    capitalized_parent_name: capitalized_parent.clone(),
                    data_type: data_type(child_property).to_string(),
                });
            }
        }
        flattened.object_name = Some(name.clone());
    }

    flattened
}

fn is_object(property: &Value) -> bool {
    property.get("type").and_then(Value::as_str) == Some("object")
}
