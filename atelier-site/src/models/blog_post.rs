use serde::{Deserialize, Serialize};

/// A blog entry as kept in the local content store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    /// Markdown source, rendered by `blog::markdown` at display time.
    pub content: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    /// Publication date, `YYYY-MM-DD`.
    pub published_at: String,
    pub published: bool,
    /// Estimated reading time in minutes.
    pub reading_time: u32,
}

/// Fields supplied when creating a post; id and publication date are assigned
/// by the store.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogPost {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub published: bool,
    pub reading_time: u32,
}

/// Partial update; `None` keeps the existing value.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
    pub reading_time: Option<u32>,
}
