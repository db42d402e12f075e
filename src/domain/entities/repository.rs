//! Repository entity
//!
//! The domain record tracked by this service: a project with a title, a
//! link, an ordered list of technology tags and a like counter. Unrelated
//! to version-control repositories; it is merely the record's name in this
//! domain.

use crate::domain::value_objects::RepositoryId;
use serde::{Deserialize, Serialize};

/// Catalog record for a single repository
///
/// Fields are stored as supplied: `title` and `url` are free text, `techs`
/// keeps insertion order and permits duplicates. `likes` starts at 0 unless
/// a value was supplied at creation and only ever changes through
/// [`Repository::register_like`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    id: RepositoryId,
    title: String,
    url: String,
    techs: Vec<String>,
    likes: i64,
}

impl Repository {
    /// Create new repository record with a fresh identifier
    pub fn new(title: String, url: String, techs: Vec<String>, likes: i64) -> Self {
        Self {
            id: RepositoryId::new(),
            title,
            url,
            techs,
            likes,
        }
    }

    /// Get record ID
    pub fn id(&self) -> RepositoryId {
        self.id
    }

    /// Get title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get technology tags
    pub fn techs(&self) -> &[String] {
        &self.techs
    }

    /// Get like count
    pub fn likes(&self) -> i64 {
        self.likes
    }

    /// Replace title, URL and tags, leaving id and likes untouched
    pub fn set_details(&mut self, title: String, url: String, techs: Vec<String>) {
        self.title = title;
        self.url = url;
        self.techs = techs;
    }

    /// Increment the like counter by exactly one
    pub fn register_like(&mut self) {
        self.likes += 1;
    }
}
