//! GraphQL-over-HTTP transport.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every remote operation is a JSON POST to `/graphql` carrying a query
//! document plus variables, answered by a `{data, errors}` envelope. This
//! module owns that envelope handling so `api` can stay declarative.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-OK statuses, GraphQL errors, and missing data
//! fields all collapse into `Err(String)` messages suitable for direct
//! display in form status lines.

#[cfg(test)]
#[path = "graphql_test.rs"]
mod graphql_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Endpoint every operation is POSTed to.
pub const GRAPHQL_ENDPOINT: &str = "/graphql";

/// An outbound GraphQL request: a query document plus its variables.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphQlRequest {
    /// The query or mutation document.
    pub query: &'static str,
    /// Operation variables; `{}` when the document takes none.
    pub variables: serde_json::Value,
}

/// A single error entry from a GraphQL response envelope.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GraphQlError {
    /// Server-provided error description.
    pub message: String,
}

/// The `{data, errors}` response envelope.
#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Join all error messages from a GraphQL envelope into one display string.
fn collapse_errors(errors: &[GraphQlError]) -> String {
    if errors.is_empty() {
        return "unknown graphql error".to_owned();
    }
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Pull one named field out of the `data` object and deserialize it.
fn extract_field<T: DeserializeOwned>(
    data: Option<serde_json::Value>,
    field: &str,
) -> Result<T, String> {
    let mut data = data.ok_or_else(|| "response contained no data".to_owned())?;
    let value = data
        .get_mut(field)
        .map(serde_json::Value::take)
        .ok_or_else(|| format!("response missing field: {field}"))?;
    serde_json::from_value(value).map_err(|e| format!("malformed {field} payload: {e}"))
}

/// Execute a GraphQL request and deserialize the named top-level data field.
///
/// # Errors
///
/// Returns a display-ready error string if the HTTP request fails, the server
/// responds with a non-OK status, the envelope carries GraphQL errors, or the
/// named field is absent or malformed.
pub async fn execute<T: DeserializeOwned>(
    request: &GraphQlRequest,
    field: &str,
) -> Result<T, String> {
    let resp = gloo_net::http::Request::post(GRAPHQL_ENDPOINT)
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(resp.status()));
    }
    let body: GraphQlResponse = resp.json().await.map_err(|e| e.to_string())?;
    if let Some(errors) = body.errors.filter(|e| !e.is_empty()) {
        return Err(collapse_errors(&errors));
    }
    extract_field(body.data, field)
}
