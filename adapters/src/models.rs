//! Generic data models for the `adapters` crate.
//!
//! These models are the common representation of a profile used by every
//! store implementation and serialized as-is on the HTTP surface.

use serde::{Deserialize, Serialize};

/// A single `{type, value}` contact entry, e.g. `{"type": "phone", "value": "555-1234"}`.
///
/// `type` is a free-form tag and is stored exactly as submitted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProfileField {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

impl ProfileField {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

/// Profile contents submitted for creation, before an identifier is assigned.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    pub name: String,
    pub fields: Vec<ProfileField>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub fields: Vec<ProfileField>,
}

impl Profile {
    pub fn from_new(id: impl Into<String>, profile: NewProfile) -> Self {
        Self {
            id: id.into(),
            name: profile.name,
            fields: profile.fields,
        }
    }

    /// Value of the first field tagged `kind`, in submission order.
    ///
    /// Later fields with the same tag are never consulted, even when the
    /// first one is empty.
    pub fn first_value(&self, kind: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.kind == kind)
            .map(|field| field.value.as_str())
    }
}
