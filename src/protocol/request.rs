//! Request definitions
//!
//! Represents requests from clients.

use serde::{Deserialize, Serialize};

/// Request kinds, parsed case-insensitively from the wire `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Query,
    Add,
    Remove,
    Update,
    AddMeaning,
}

/// A request as it appears on the wire
///
/// Only `type` is structurally required; every other field is optional and
/// validated per request kind by the processor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// Operation kind ("query", "add", "remove", "update", "addmeaning")
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,

    /// Meanings for "add"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meanings: Option<Vec<String>>,

    /// Meaning for "addmeaning"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,

    /// Meaning to replace, for "update"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_meaning: Option<String>,

    /// Replacement meaning(s) for "update", '~'-joined when multiple
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_meaning: Option<String>,
}

impl Request {
    /// Resolve the wire `type` field; `None` for unknown kinds
    pub fn request_kind(&self) -> Option<RequestKind> {
        match self.kind.to_ascii_lowercase().as_str() {
            "query" => Some(RequestKind::Query),
            "add" => Some(RequestKind::Add),
            "remove" => Some(RequestKind::Remove),
            "update" => Some(RequestKind::Update),
            "addmeaning" => Some(RequestKind::AddMeaning),
            _ => None,
        }
    }

    fn bare(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            word: None,
            meanings: None,
            meaning: None,
            old_meaning: None,
            new_meaning: None,
        }
    }

    /// Build a query request
    pub fn query(word: impl Into<String>) -> Self {
        Self {
            word: Some(word.into()),
            ..Self::bare("query")
        }
    }

    /// Build an add request
    pub fn add(word: impl Into<String>, meanings: Vec<String>) -> Self {
        Self {
            word: Some(word.into()),
            meanings: Some(meanings),
            ..Self::bare("add")
        }
    }

    /// Build a remove request
    pub fn remove(word: impl Into<String>) -> Self {
        Self {
            word: Some(word.into()),
            ..Self::bare("remove")
        }
    }

    /// Build an update request
    pub fn update(
        word: impl Into<String>,
        old_meaning: impl Into<String>,
        new_meaning: impl Into<String>,
    ) -> Self {
        Self {
            word: Some(word.into()),
            old_meaning: Some(old_meaning.into()),
            new_meaning: Some(new_meaning.into()),
            ..Self::bare("update")
        }
    }

    /// Build an addmeaning request
    pub fn add_meaning(word: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            word: Some(word.into()),
            meaning: Some(meaning.into()),
            ..Self::bare("addmeaning")
        }
    }
}
