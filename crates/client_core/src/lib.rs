use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use shared::{
    domain::SearchResult,
    error::SearchError,
    protocol::{PaperRecord, PaperSearchResponse, SEARCH_FIELDS},
};
use tracing::{debug, info, warn};
use url::{form_urlencoded, Url};

pub mod config;

pub use config::{load_settings, Settings};

/// Query → fetch → parse → filter → map. One GET per call, no retry.
#[async_trait]
pub trait PaperSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError>;
}

pub struct ScholarClient {
    http: Client,
    settings: Settings,
}

impl ScholarClient {
    pub fn new(settings: Settings) -> Self {
        Self::with_http(Client::new(), settings)
    }

    pub fn with_http(http: Client, settings: Settings) -> Self {
        Self { http, settings }
    }

    pub fn search_url(&self, query: &str) -> Result<Url, SearchError> {
        let encoded = encode_query(query)?;
        build_search_url(&self.settings, &encoded)
    }

    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let url = self.search_url(query)?;
        info!(query = query.trim(), "searching papers");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| SearchError::network(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "paper search returned non-success status");
        }
        // The body decides the outcome regardless of status.
        let body = response
            .bytes()
            .await
            .map_err(|err| SearchError::network(err.to_string()))?;

        let results = parse_search_body(&body)?;
        info!(count = results.len(), "paper search settled");
        Ok(results)
    }
}

#[async_trait]
impl PaperSearch for ScholarClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        ScholarClient::search(self, query).await
    }
}

/// Form-urlencodes the query as typed (space becomes `+`). Blank input is
/// rejected.
pub fn encode_query(query: &str) -> Result<String, SearchError> {
    if query.trim().is_empty() {
        return Err(SearchError::InvalidQuery);
    }
    Ok(form_urlencoded::byte_serialize(query.as_bytes()).collect())
}

pub fn build_search_url(settings: &Settings, encoded_query: &str) -> Result<Url, SearchError> {
    let base = settings.api_base_url.trim_end_matches('/');
    let raw = format!(
        "{base}/paper/search?query={encoded_query}&fields={}&offset=0&limit={}&minCitationCount={}",
        SEARCH_FIELDS.join(","),
        settings.page_size,
        settings.min_citation_count,
    );

    let url = Url::parse(&raw).map_err(|err| SearchError::InvalidEndpoint {
        reason: format!("{err}: {raw}"),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(SearchError::InvalidEndpoint {
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    Ok(url)
}

pub fn parse_search_body(body: &[u8]) -> Result<Vec<SearchResult>, SearchError> {
    let page: PaperSearchResponse = serde_json::from_slice(body).map_err(|err| {
        warn!(error = %err, "paper search body has unexpected shape");
        SearchError::unparsable(err.to_string())
    })?;
    debug!(total = ?page.total, offset = ?page.offset, received = page.data.len(), "paper search page");
    Ok(complete_records(&page.data))
}

/// Drops entries missing a title, url or abstract. Order is preserved.
pub fn complete_records(data: &[Value]) -> Vec<SearchResult> {
    let mut results = Vec::with_capacity(data.len());
    for (index, entry) in data.iter().enumerate() {
        match PaperRecord::from_json(entry).into_result() {
            Ok(result) => results.push(result),
            Err(missing) => debug!(index, ?missing, "skipping incomplete paper record"),
        }
    }
    if results.len() < data.len() {
        debug!(
            kept = results.len(),
            dropped = data.len() - results.len(),
            "filtered paper records"
        );
    }
    results
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
