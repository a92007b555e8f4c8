//! HTTP request handlers for the alert API.

use std::sync::Arc;

use alertapp_store::{Alert, NewAlert};
use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{HeaderName, HeaderValue, Method, Uri};
use axum::response::Response;
use tracing::{debug, info};

use crate::error::{ServerError, ServerResult};
use crate::render::render;
use crate::state::AppState;

/// Response header carrying the number of alerts in a listing.
pub const ALERT_COUNT_HEADER: HeaderName = HeaderName::from_static("x-alertapp-count");

/// Raw pagination query parameters.
///
/// Values are kept as strings so that unparseable input falls back to the
/// defaults instead of rejecting the request.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageQuery {
    /// Zero-based page number.
    pub page: Option<String>,
    /// Number of alerts per page.
    pub size: Option<String>,
}

impl PageQuery {
    /// Build from decoded query pairs, keeping the first value of each key.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "page" if query.page.is_none() => query.page = Some(value),
                "size" if query.size.is_none() => query.size = Some(value),
                _ => {}
            }
        }
        query
    }
}

/// Validated pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Zero-based page number.
    pub page: usize,
    /// Number of alerts per page.
    pub size: usize,
}

impl Pagination {
    /// Build pagination from raw query parameters.
    ///
    /// Missing or unparseable values default to page `0` and
    /// `default_size`. Negative values are rejected.
    pub fn from_query(query: &PageQuery, default_size: usize) -> ServerResult<Self> {
        let page = match parse_param(query.page.as_deref()) {
            Some(value) => non_negative("page", value)?,
            None => 0,
        };
        let size = match parse_param(query.size.as_deref()) {
            Some(value) => non_negative("size", value)?,
            None => default_size,
        };
        Ok(Self { page, size })
    }
}

fn parse_param(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.parse().ok())
}

fn non_negative(param: &'static str, value: i64) -> ServerResult<usize> {
    usize::try_from(value).map_err(|_| ServerError::InvalidPagination { param, value })
}

/// Decode a request body into a new alert.
///
/// The body must be a JSON object. A missing `info` decodes as empty text,
/// a non-string `info` is rejected.
pub fn decode_new_alert(body: &[u8]) -> ServerResult<NewAlert> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(ServerError::MalformedBody(
            "expected a JSON object".to_string(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}

/// Handle GET / - list a page of alerts.
pub async fn list_alerts(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ServerResult<Response> {
    let query = match query {
        Ok(Query(pairs)) => PageQuery::from_pairs(pairs),
        Err(rejection) => {
            debug!(error = %rejection, "ignoring unreadable query string");
            PageQuery::default()
        }
    };

    let pagination = Pagination::from_query(&query, state.config().default_page_size)?;
    let alerts = state.store().retrieve(pagination.page, pagination.size);
    debug!(
        page = pagination.page,
        size = pagination.size,
        count = alerts.len(),
        "listed alerts"
    );

    let mut response = render(state.config().format, &alerts);
    response
        .headers_mut()
        .insert(ALERT_COUNT_HEADER, HeaderValue::from(alerts.len()));
    Ok(response)
}

/// Handle POST / - store a new alert.
///
/// Identity and timestamp are assigned here; values sent by the client are
/// discarded.
pub async fn create_alert(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ServerResult<Json<Alert>> {
    let new_alert = decode_new_alert(&body)?;
    let alert = state.store().store(new_alert.into_alert());

    info!(alert_id = %alert.id, "alert stored");
    Ok(Json(alert))
}

/// Fallback for methods `/` does not support.
pub async fn method_not_allowed(method: Method) -> ServerError {
    ServerError::MethodNotAllowed(method.to_string())
}

/// Fallback for unknown paths.
pub async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(uri.path().to_string())
}
