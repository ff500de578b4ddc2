//! Naming rules used to derive type and field names from schema tokens.
//!
//! | Input | Rule | Example |
//! |-------|------|---------|
//! | content field name | first letter upper-cased | `pipelineName` → `PipelineName` |
//! | event subject | first letter upper-cased, compound subjects split | `pipelinerun` → `PipelineRun` |
//! | event subject | fully upper-cased (constant names) | `taskrun` → `TASKRUN` |
//! | camelCase field | snake_case (used by templates) | `pipelineRun` → `pipeline_run` |
//! | camelCase field | Rust identifier, keywords escaped | `type` → `r#type` |

use serde_json::Value;

/// Data type emitted for every content field.
///
/// Schema types are not mapped to target types yet; templates receive this
/// placeholder regardless of the declared `type` or `format`.
pub const STRING_DATA_TYPE: &str = "String";

/// Subjects whose schema token fuses several English words.
///
/// Each entry lists the character offsets at which a new word starts, after
/// the first one. The offsets are upper-cased along with the first letter.
const COMPOUND_SUBJECTS: &[(&str, &[usize])] = &[("pipelinerun", &[8])];

/// Strict and reserved Rust keywords (2024 edition).
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

/// Upper-case the first character and leave the rest untouched.
///
/// - `"finished"` → `"Finished"`
/// - `"pipelineName"` → `"PipelineName"`
pub fn capitalize(s: &str) -> String {
    capitalize_at(s, &[])
}

/// Capitalize an event subject, splitting known compound subjects.
///
/// - `"pipelinerun"` → `"PipelineRun"`
/// - `"taskrun"` → `"Taskrun"`
pub fn capitalize_subject(subject: &str) -> String {
    let word_starts = COMPOUND_SUBJECTS
        .iter()
        .find(|(name, _)| *name == subject)
        .map(|(_, starts)| *starts)
        .unwrap_or(&[]);
    capitalize_at(subject, word_starts)
}

/// Fold a subject to upper case for constant identifiers.
pub fn upper_case(s: &str) -> String {
    s.to_uppercase()
}

/// Convert a camelCase or PascalCase schema name to snake_case.
///
/// A run of capitals is treated as one word: `"artifactID"` → `"artifact_id"`,
/// `"URLPath"` → `"url_path"`.
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let starts_word = match prev {
                None => false,
                Some(p) if p == '_' => false,
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) => p.is_uppercase() && next.is_some_and(|n| n.is_lowercase()),
            };
            if starts_word {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else if c == '-' || c == ' ' {
            out.push('_');
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert a schema name to a snake_case Rust identifier.
///
/// Keywords become raw identifiers (`"type"` → `"r#type"`); the few that
/// cannot be raw get a trailing underscore (`"self"` → `"self_"`).
pub fn to_rust_ident(s: &str) -> String {
    let ident = to_snake_case(s);
    if NON_RAW_KEYWORDS.contains(&ident.as_str()) {
        format!("{ident}_")
    } else if RUST_KEYWORDS.contains(&ident.as_str()) {
        format!("r#{ident}")
    } else {
        ident
    }
}

/// Resolve the target data type for a content property.
pub fn data_type(_property: &Value) -> &'static str {
    STRING_DATA_TYPE
}

fn capitalize_at(s: &str, word_starts: &[usize]) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, c) in s.chars().enumerate() {
        if i == 0 || word_starts.contains(&i) {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}
