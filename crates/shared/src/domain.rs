use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const UNKNOWN_AUTHORS: &str = "Unknown Authors";

/// Locally generated identity for a result row. The search endpoint returns no
/// stable id for the requested fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultId(pub Uuid);

impl ResultId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ResultId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: ResultId,
    pub title: String,
    pub url: String,
    pub summary: String,
    pub details: String,
}

impl SearchResult {
    /// `authors` is `None` when the record carried no usable author list.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        summary: impl Into<String>,
        authors: Option<&[String]>,
        citation_count: i64,
    ) -> Self {
        let url = url.into();
        let details = format_details(authors, citation_count, &url);
        Self {
            id: ResultId::new(),
            title: title.into(),
            url,
            summary: summary.into(),
            details,
        }
    }
}

pub fn format_details(authors: Option<&[String]>, citation_count: i64, url: &str) -> String {
    let authors = match authors {
        Some(names) => names.join(", "),
        None => UNKNOWN_AUTHORS.to_string(),
    };
    format!("Authors: {authors}\nCitations: {citation_count}\nURL: {url}")
}
