//! Domain DTOs for the course API.
//!
//! # Design
//! `Course` mirrors the server schema. `CourseDraft` is what the input panel
//! edits: four free-text fields that are never validated on the client.
//! When a draft is serialized, numeric fields that parse are sent as JSON
//! numbers and everything else is sent verbatim, so the server is the one
//! that rejects a blank id or a non-numeric price.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

/// A single course returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Editable, unvalidated form state for one course.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseDraft {
    #[serde(serialize_with = "number_or_text")]
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(serialize_with = "number_or_text")]
    pub price: String,
}

impl CourseDraft {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Id => &self.id,
            DraftField::Name => &self.name,
            DraftField::Description => &self.description,
            DraftField::Price => &self.price,
        }
    }

    /// Replace one attribute, leaving the others untouched.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Id => self.id = value,
            DraftField::Name => self.name = value,
            DraftField::Description => self.description = value,
            DraftField::Price => self.price = value,
        }
    }
}

impl From<&Course> for CourseDraft {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.to_string(),
            name: course.name.clone(),
            description: course.description.clone(),
            price: course.price.to_string(),
        }
    }
}

fn number_or_text<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    let trimmed = value.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return serializer.serialize_i64(n);
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => serializer.serialize_f64(n),
        _ => serializer.serialize_str(value),
    }
}

/// One of the four draft attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Id,
    Name,
    Description,
    Price,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [
        DraftField::Id,
        DraftField::Name,
        DraftField::Description,
        DraftField::Price,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DraftField::Id => "ID",
            DraftField::Name => "Name",
            DraftField::Description => "Description",
            DraftField::Price => "Price",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "id" => Ok(DraftField::Id),
            "name" => Ok(DraftField::Name),
            "description" => Ok(DraftField::Description),
            "price" => Ok(DraftField::Price),
            other => Err(format!("unknown field: {other}")),
        }
    }
}

/// A successful mutation: the decoded payload plus the server's message, if
/// it sent one.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    pub value: T,
    pub message: Option<String>,
}

/// Pull a human-readable message out of a response body. `message` is
/// preferred, a string `detail` is the fallback.
pub(crate) fn reply_message(body: &serde_json::Value) -> Option<String> {
    ["message", "detail"]
        .iter()
        .find_map(|key| body.get(key).and_then(serde_json::Value::as_str))
        .map(str::to_string)
}
