//! In-memory view of the backing JSON document.
//!
//! A [`Document`] is the root JSON object; each of its members is a collection,
//! an array of [`Record`]s. Both types are thin wrappers over `serde_json` maps so
//! the document round-trips through the backing file without losing fields or
//! field order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{constants::ID_FIELD, MockbaseError, RecordId, Result};

/// The whole backing document: collection name to array of records.
///
/// Deserializing anything other than a JSON object fails, so a document that
/// loads successfully always has a map at its root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    /// Root members, in file order.
    members: Map<String, Value>,
}

impl Document {
    /// Creates an empty document (`{}`).
    pub fn new() -> Self { Self::default() }

    /// Creates a document with one empty collection per name.
    pub fn with_collections<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let members = names
            .into_iter()
            .map(|name| (name.into(), Value::Array(Vec::new())))
            .collect();
        Self {
            members,
        }
    }

    /// Parses a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`MockbaseError::Json`] if the text is not valid JSON or its root is
    /// not an object.
    pub fn from_json(text: &str) -> Result<Self> { Ok(serde_json::from_str(text)?) }

    /// Serializes the document with two-space indentation.
    ///
    /// # Errors
    ///
    /// Returns [`MockbaseError::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> { Ok(serde_json::to_string_pretty(self)?) }

    /// The document as a plain JSON value.
    pub fn to_value(&self) -> Value { Value::Object(self.members.clone()) }

    /// Names of all root members, in document order.
    pub fn collection_names(&self) -> impl Iterator<Item = &str> { self.members.keys().map(String::as_str) }

    /// Number of root members.
    pub fn len(&self) -> usize { self.members.len() }

    /// Whether the document has no members at all.
    pub fn is_empty(&self) -> bool { self.members.is_empty() }

    /// Returns the named collection, or `None` if the member is absent or is not
    /// an array.
    pub fn collection(&self, name: &str) -> Option<&Vec<Value>> { self.members.get(name).and_then(Value::as_array) }

    /// Mutable access to an existing collection.
    pub(crate) fn collection_mut(&mut self, name: &str) -> Option<&mut Vec<Value>> {
        self.members.get_mut(name).and_then(Value::as_array_mut)
    }

    /// Returns the named collection, creating it empty at the end of the document
    /// if it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`MockbaseError::InvalidCollection`] if the member exists but is not
    /// an array. The existing value is left untouched.
    pub(crate) fn collection_or_create(&mut self, name: &str) -> Result<&mut Vec<Value>> {
        let member = self
            .members
            .entry(name.to_owned())
            .or_insert_with(|| Value::Array(Vec::new()));
        member.as_array_mut().ok_or_else(|| {
            MockbaseError::InvalidCollection {
                name: name.to_owned(),
            }
        })
    }
}

/// A single record: a JSON object whose `id` member is its identifier.
///
/// All other members are opaque payload. Equality is field-wise and ignores
/// field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    /// Record fields, in insertion order.
    fields: Map<String, Value>,
}

impl Record {
    /// Parses a request body into a record.
    ///
    /// # Errors
    ///
    /// Returns [`MockbaseError::InvalidBody`] if the body is not valid JSON or is
    /// valid JSON but not an object.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body).map_err(|e| {
            MockbaseError::InvalidBody {
                reason: e.to_string(),
            }
        })?;
        match value {
            Value::Object(fields) => {
                Ok(Self {
                    fields,
                })
            },
            other => {
                Err(MockbaseError::InvalidBody {
                    reason: format!("expected a JSON object, found {}", json_type_name(&other)),
                })
            },
        }
    }

    /// The record's identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MockbaseError::MalformedRecord`] if the `id` field is missing or
    /// not a finite number. The collection name is left empty; callers scanning a
    /// collection fill it in.
    pub fn id(&self) -> Result<RecordId> {
        self.fields
            .get(ID_FIELD)
            .and_then(RecordId::from_value)
            .ok_or_else(|| {
                MockbaseError::MalformedRecord {
                    collection: String::new(),
                    reason:     format!("record has no numeric '{}' field", ID_FIELD),
                }
            })
    }

    /// Sets the identifier, overwriting any client-supplied `id`. The identifier
    /// is always placed first so stored records read naturally.
    pub fn set_id(&mut self, id: RecordId) {
        let mut fields = Map::with_capacity(self.fields.len().saturating_add(1));
        fields.insert(ID_FIELD.to_owned(), Value::from(id));
        for (key, value) in std::mem::take(&mut self.fields) {
            if key != ID_FIELD {
                fields.insert(key, value);
            }
        }
        self.fields = fields;
    }

    /// Looks up a payload field.
    pub fn get(&self, key: &str) -> Option<&Value> { self.fields.get(key) }

    /// All fields, identifier included.
    pub const fn fields(&self) -> &Map<String, Value> { &self.fields }

    /// Consumes the record into a plain JSON value.
    pub fn into_value(self) -> Value { Value::Object(self.fields) }
}

impl TryFrom<Value> for Record {
    type Error = MockbaseError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => {
                Ok(Self {
                    fields,
                })
            },
            other => {
                Err(MockbaseError::MalformedRecord {
                    collection: String::new(),
                    reason:     format!("expected a JSON object, found {}", json_type_name(&other)),
                })
            },
        }
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self { record.into_value() }
}

/// Human-readable name of a JSON value's type, for error messages.
const fn json_type_name(value: &Value) -> &'static str {
    match *value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
