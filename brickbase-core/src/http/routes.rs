//! Request routing and handlers

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::{Method, Request, Response, StatusCode};
use serde::Serialize;
use serde_json::{json, Value};

use super::{ApiError, ApiResult, AppState};
use crate::model::Property;

const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Flattened listing entry: what the public site's navigation needs,
/// nothing more
#[derive(Serialize)]
struct PropertySummary {
    id: String,
    title: String,
    #[serde(rename = "type")]
    property_type: Option<String>,
    slug: String,
}

impl From<Property> for PropertySummary {
    fn from(p: Property) -> Self {
        Self { id: p.id, title: p.title, property_type: p.property_type, slug: p.slug }
    }
}

/// Dispatch one request. Never panics and never propagates an error
/// past the request that caused it.
pub async fn handle(req: Request<Incoming>, state: Arc<AppState>) -> Response<Full<Bytes>> {
    let path = req.uri().path().to_string();
    let query = parse_query(req.uri().query().unwrap_or(""));

    let result = match (req.method(), path.as_str()) {
        (&Method::GET, "/api/properties") => list_properties(&state),
        (&Method::GET, "/api/search") => search(&state, &query).await,
        (&Method::GET, "/api/properties/find") => find_properties(&state, &query),
        _ => Err(ApiError::NotFound),
    };

    match result {
        Ok(body) => json_response(StatusCode::OK, &body),
        Err(err) => {
            // Internal details go to the log, not the response body.
            let message = match &err {
                ApiError::Internal(source) => {
                    log::error!("request {path} failed: {source:#}");
                    "internal error".to_string()
                }
                other => other.to_string(),
            };
            json_response(err.status(), &json!({ "error": message }))
        }
    }
}

/// `GET /api/properties` — flattened `{id, title, type, slug}` list of
/// active properties
pub fn list_properties(state: &AppState) -> ApiResult<Value> {
    let page = state.properties.list_public(usize::MAX, None)?;
    let summaries: Vec<PropertySummary> =
        page.items.into_iter().map(PropertySummary::from).collect();
    to_json(&summaries)
}

/// `GET /api/search?q=..&limit=..` — proxy against the hosted index.
/// An index failure degrades to an empty hit list; a missing result is
/// preferred over a broken page.
pub async fn search(state: &AppState, query: &HashMap<String, String>) -> ApiResult<Value> {
    let text = query.get("q").map(String::as_str).unwrap_or_default();
    let limit = query
        .get("limit")
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_SEARCH_LIMIT);

    let hits = match state.index.query(text, limit).await {
        Ok(hits) => hits,
        Err(err) => {
            log::warn!("search index query failed, serving empty results: {err}");
            Vec::new()
        }
    };
    to_json(&hits)
}

/// `GET /api/properties/find?q=..` — in-process substring fallback over
/// title, slug, location and overview
pub fn find_properties(state: &AppState, query: &HashMap<String, String>) -> ApiResult<Value> {
    let text = query
        .get("q")
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("missing query parameter 'q'".to_string()))?;

    let hits = state.properties.search_text(text)?;
    let summaries: Vec<PropertySummary> = hits.into_iter().map(PropertySummary::from).collect();
    to_json(&summaries)
}

fn to_json<T: Serialize>(value: &T) -> ApiResult<Value> {
    serde_json::to_value(value).map_err(|e| ApiError::Internal(e.into()))
}

fn parse_query(raw: &str) -> HashMap<String, String> {
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            let value = urlencoding::decode(value).ok()?.into_owned();
            Some((key.to_string(), value))
        })
        .collect()
}

fn json_response(status: StatusCode, body: &Value) -> Response<Full<Bytes>> {
    let bytes = serde_json::to_vec(body).unwrap_or_else(|_| b"{}".to_vec());
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(bytes)))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::new())))
}
