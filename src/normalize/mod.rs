//! Turn raw metadata sections into display-ready records.
//!
//! Each normalizer takes the raw JSON list of one section and returns one
//! output per accepted input, in input order. Items that are not JSON objects,
//! or objects that do not fit the record shape, are logged and skipped.

pub mod conditions;
pub mod limitations;
pub mod specifications;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use conditions::ConditionNormalizer;
pub use limitations::LimitationNormalizer;
pub use specifications::SpecificationNormalizer;

pub trait Normalizer {
    type Output;

    fn normalize(&self, raw: &[Value]) -> Vec<Self::Output>;
}

/// Deserialize every usable item of `raw` into `T`, skipping the others.
fn records<T: DeserializeOwned>(raw: &[Value], record: &'static str) -> Vec<T> {
    raw.iter()
        .enumerate()
        .filter_map(|(index, item)| {
            if !item.is_object() {
                tracing::warn!(
                    index,
                    found = value_kind(item),
                    "{} expects a mapping, skipping",
                    record
                );
                return None;
            }
            match T::deserialize(item) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    tracing::warn!(index, error = %err, "malformed {}, skipping", record);
                    None
                }
            }
        })
        .collect()
}

/// JSON type name used in diagnostics.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
