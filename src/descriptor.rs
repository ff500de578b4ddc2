//! The render-ready description of one event schema.
//!
//! A [`Descriptor`] is the only value handed to the template. It serializes
//! with camelCase keys (`capitalizedSubject`, `contentObjectFields`, ...),
//! which are the names templates refer to.

use serde::Serialize;

/// Naming and field data for one CDEvent type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    /// Lower-case domain noun (e.g. `"pipelinerun"`).
    pub subject: String,

    /// Lower-case action (e.g. `"finished"`).
    pub predicate: String,

    /// Event schema version (e.g. `"0.1.0"`).
    pub version: String,

    /// Subject for type names (e.g. `"PipelineRun"`).
    pub capitalized_subject: String,

    /// Predicate for type names (e.g. `"Finished"`).
    pub capitalized_predicate: String,

    /// Subject for constant names (e.g. `"PIPELINERUN"`).
    pub upper_case_subject: String,

    /// Base name of the schema file this descriptor was built from.
    pub schema_file_name: String,

    /// Name of the object-typed content property, if the schema has one.
    pub object_name: Option<String>,

    /// Capitalized form of [`Descriptor::object_name`].
    pub capitalized_object_name: Option<String>,

    /// Scalar content properties, in document order.
    pub content_fields: Vec<ContentField>,

    /// Properties of the object-typed content property, in document order.
    pub content_object_fields: Vec<ContentObjectField>,
}

impl Descriptor {
    /// Type name stem shared by generated items, e.g. `"PipelineRunFinished"`.
    pub fn type_stem(&self) -> String {
        format!("{}{}", self.capitalized_subject, self.capitalized_predicate)
    }
}

/// A scalar leaf of the content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentField {
    pub name: String,
    pub capitalized_name: String,
    pub data_type: String,
}

/// A leaf nested inside the object-typed content property.
///
/// Carries its parent's name so templates can emit nested accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentObjectField {
    pub name: String,
    pub capitalized_name: String,
    pub parent_name: String,
    pub capitalized_parent_name: String,
    pub data_type: String,
}
