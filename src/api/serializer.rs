//! # Allowlist Serializer
//!
//! A serializer is a value, not a subtype: it is configured with a root
//! key and a static field allowlist and exposes a pure projection over
//! records. Every output object carries exactly the allowlisted fields;
//! everything else on the record (timestamps included) is discarded.

use serde_json::{Map, Value};

/// Projects records to a fixed field set and wraps them under a root key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowlistSerializer {
    /// Top-level key wrapping the serialized array (pluralized entity name)
    root_key: String,

    /// Exposed fields, in output order
    fields: Vec<String>,
}

impl AllowlistSerializer {
    /// Create a serializer for the given root key and field allowlist
    pub fn new<S: Into<String>>(root_key: impl Into<String>, fields: impl IntoIterator<Item = S>) -> Self {
        Self {
            root_key: root_key.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// The configured root key
    pub fn root_key(&self) -> &str {
        &self.root_key
    }

    /// The configured allowlist
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Project one record to exactly the allowlisted field set
    ///
    /// A field the record does not carry is emitted as JSON null, so the
    /// output shape never varies per record.
    pub fn project(&self, record: &Value) -> Value {
        let mut projected = Map::with_capacity(self.fields.len());
        for field in &self.fields {
            let value = record.get(field).cloned().unwrap_or(Value::Null);
            projected.insert(field.clone(), value);
        }
        Value::Object(projected)
    }

    /// Serialize a record sequence as `{"<root_key>": [ ... ]}`
    pub fn serialize_collection(&self, records: &[Value]) -> Value {
        let projected: Vec<Value> = records.iter().map(|r| self.project(r)).collect();

        let mut body = Map::with_capacity(1);
        body.insert(self.root_key.clone(), Value::Array(projected));
        Value::Object(body)
    }
}
