use serde::Deserialize;
use serde_json::Value;

use crate::domain::SearchResult;

/// Fields requested from the paper search endpoint, in request order.
pub const SEARCH_FIELDS: &[&str] = &["title", "url", "citationCount", "authors", "abstract"];

/// Top-level shape of `GET /paper/search`. Entries of `data` stay untyped so a
/// single odd record cannot fail the whole page.
#[derive(Debug, Clone, Deserialize)]
pub struct PaperSearchResponse {
    pub data: Vec<Value>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub next: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Title,
    Url,
    Abstract,
}

/// One `data` entry with every requested field extracted leniently. Wrong JSON
/// types count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaperRecord {
    pub title: Option<String>,
    pub url: Option<String>,
    pub abstract_text: Option<String>,
    pub authors: Option<Vec<String>>,
    pub citation_count: Option<i64>,
}

impl PaperRecord {
    /// Author entries are read by `name` alone, so `{"authorId": null,
    /// "name": "X"}` still contributes "X". An entry of `data` that is not an
    /// object yields an empty record and is dropped later; it does not reject
    /// the rest of the page.
    pub fn from_json(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        let authors = value.get("authors").and_then(Value::as_array).map(|entries| {
            entries
                .iter()
                .filter_map(|author| author.get("name").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        });

        Self {
            title: text("title"),
            url: text("url"),
            abstract_text: text("abstract"),
            authors,
            citation_count: value.get("citationCount").and_then(Value::as_i64),
        }
    }

    /// Required-field check: title, url and abstract must all be present.
    pub fn into_result(self) -> Result<SearchResult, MissingField> {
        let title = self.title.ok_or(MissingField::Title)?;
        let url = self.url.ok_or(MissingField::Url)?;
        let summary = self.abstract_text.ok_or(MissingField::Abstract)?;
        Ok(SearchResult::new(
            title,
            url,
            summary,
            self.authors.as_deref(),
            self.citation_count.unwrap_or(0),
        ))
    }
}
