//! Post models

use serde::{Deserialize, Serialize};

/// Post metadata as shown on index listings.
///
/// `title`, `description` and `date` are taken verbatim from front-matter and
/// stay `None` when the key is absent. `date` is an opaque string; nothing in
/// the catalog parses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Filename minus the `.md` extension, never taken from front-matter
    pub slug: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub tags: Vec<String>,
}

/// A full post: summary metadata plus the markdown body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub slug: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub tags: Vec<String>,
    /// File content with the front-matter block removed
    pub body: String,
}

impl Post {
    /// Drop the body, keeping only listing metadata.
    pub fn into_summary(self) -> PostSummary {
        PostSummary {
            slug: self.slug,
            title: self.title,
            description: self.description,
            date: self.date,
            tags: self.tags,
        }
    }
}

impl PostSummary {
    /// Title to display, falling back to the slug for untitled posts.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.slug)
    }
}
