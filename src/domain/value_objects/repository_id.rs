//! Repository ID Value Object
//!
//! Opaque unique identifier for repository records, assigned once at
//! creation and used as the sole lookup key thereafter.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a repository record
///
/// Backed by a random UUID (v4); collisions are assumed practically
/// impossible and are not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryId(Uuid);

impl RepositoryId {
    /// Create new random repository ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create repository ID from UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Create repository ID from string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self)
    }

    /// Get underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RepositoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for RepositoryId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<RepositoryId> for Uuid {
    fn from(id: RepositoryId) -> Self {
        id.0
    }
}
