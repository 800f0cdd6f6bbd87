//! Hosted search index client
//!
//! Speaks the hosted index's JSON API: a bulk document upsert endpoint
//! keyed by `object_id` and a free-text query endpoint. One attempt per
//! call, no retry; non-success responses surface the provider's message.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::config::SearchConfig;

use super::{PropertyRecord, SearchError, SearchHit, SearchIndex, SearchResult};

pub struct HostedSearchClient {
    http: reqwest::Client,
    endpoint: String,
    index: String,
    api_key: Option<String>,
}

#[derive(Deserialize)]
struct QueryResponse {
    hits: Vec<SearchHit>,
}

impl HostedSearchClient {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            index: config.index.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    async fn reject_on_error(response: reqwest::Response) -> SearchResult<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        Err(SearchError::Rejected { status, message })
    }
}

#[async_trait]
impl SearchIndex for HostedSearchClient {
    async fn bulk_upsert(&self, records: &[PropertyRecord]) -> SearchResult<()> {
        let url = format!("{}/indexes/{}/documents?primaryKey=object_id", self.endpoint, self.index);
        let response = self.authorized(self.http.post(&url)).json(records).send().await?;
        Self::reject_on_error(response).await?;
        Ok(())
    }

    async fn query(&self, text: &str, limit: usize) -> SearchResult<Vec<SearchHit>> {
        let url = format!("{}/indexes/{}/search", self.endpoint, self.index);
        let body = json!({ "q": text, "limit": limit });
        let response = self.authorized(self.http.post(&url)).json(&body).send().await?;
        let response = Self::reject_on_error(response).await?;
        let parsed: QueryResponse = response.json().await?;
        Ok(parsed.hits)
    }
}
