//! Block identifier value object

use serde::{Deserialize, Serialize};

/// An opaque block identifier (Value Object)
///
/// Identifiers are never empty and never consist solely of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub(crate) String);

impl BlockId {
    /// Try to create a block identifier, returning None if it is blank
    pub fn try_new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if is_blank(&id) { None } else { Some(Self(id)) }
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Whether a raw identifier carries no visible characters
pub fn is_blank(id: &str) -> bool {
    id.chars().all(char::is_whitespace)
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for BlockId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
