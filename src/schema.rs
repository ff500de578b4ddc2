//! CDEvents schema documents and the event identity string they carry.
//!
//! Every event schema in the family pins its type through a single-value
//! enum at `properties.context.properties.type.enum[0]`, for example
//! `dev.cdevents.pipelinerun.finished.0.1.0`. The payload fields live under
//! `properties.subject.properties.content.properties`.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// JSON pointer to the event identity string.
pub const TYPE_ENUM_POINTER: &str = "/properties/context/properties/type/enum/0";

/// JSON pointer to the subject's content property map.
pub const CONTENT_PROPERTIES_POINTER: &str = "/properties/subject/properties/content/properties";

/// A parsed event identity string: `<ns>.<ns>.<subject>.<predicate>.<version>`.
///
/// The version keeps its own dots, so `dev.cdevents.taskrun.started.0.1.0`
/// has version `0.1.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventType {
    /// The two-segment namespace prefix (e.g. `"dev.cdevents"`).
    pub namespace: String,

    /// Lower-case domain noun (e.g. `"pipelinerun"`).
    pub subject: String,

    /// Lower-case action (e.g. `"finished"`).
    pub predicate: String,

    /// Semantic version of the event schema (e.g. `"0.1.0"`).
    pub version: String,
}

impl FromStr for EventType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let segments: Vec<&str> = s.splitn(5, '.').collect();
        let [ns_org, ns_name, subject, predicate, version] = segments[..] else {
            return Err(malformed(s));
        };
        if subject.is_empty() || predicate.is_empty() || version.is_empty() {
            return Err(malformed(s));
        }
        Ok(EventType {
            namespace: format!("{ns_org}.{ns_name}"),
            subject: subject.to_string(),
            predicate: predicate.to_string(),
            version: version.to_string(),
        })
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.namespace, self.subject, self.predicate, self.version
        )
    }
}

fn malformed(s: &str) -> Error {
    Error::SchemaFormat(format!(
        "malformed type string '{s}' (expected <namespace>.<namespace>.<subject>.<predicate>.<version>)"
    ))
}

/// Load and parse one schema document from disk.
pub fn load_schema(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let document: Value = serde_json::from_str(&content)?;
    Ok(document)
}

/// Extract the event identity string from a schema document.
pub fn event_type_string(document: &Value) -> Result<&str> {
    document
        .pointer(TYPE_ENUM_POINTER)
        .and_then(Value::as_str)
        .ok_or_else(|| Error::SchemaFormat("missing type enum".to_string()))
}

/// Extract and parse the event identity of a schema document.
pub fn event_type(document: &Value) -> Result<EventType> {
    event_type_string(document)?.parse()
}

/// Resolve the subject content property map, in document order.
pub fn content_properties(document: &Value) -> Result<&Map<String, Value>> {
    document
        .pointer(CONTENT_PROPERTIES_POINTER)
        .and_then(Value::as_object)
        .ok_or_else(|| Error::SchemaFormat("missing subject content properties".to_string()))
}
