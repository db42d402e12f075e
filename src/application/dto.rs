//! Request DTOs for catalog operations
//!
//! Input is deliberately permissive, matching the service contract: absent
//! fields fall back to empty values rather than being rejected, `likes` is
//! stored verbatim when supplied (negatives included) and defaults to 0 when
//! omitted, and unknown fields are ignored.

use serde::Deserialize;

/// Request to create a new repository record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateRepository {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub techs: Vec<String>,
    #[serde(default)]
    pub likes: i64,
}

/// Request to replace title, URL and tags of an existing record
///
/// Carries no `likes` field: the counter is never altered by an update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRepository {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub techs: Vec<String>,
}
