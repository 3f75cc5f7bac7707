use super::*;

fn error(message: &str) -> GraphQlError {
    GraphQlError {
        message: message.to_owned(),
    }
}

// =============================================================
// Request serialization
// =============================================================

#[test]
fn request_serializes_query_and_variables() {
    let request = GraphQlRequest {
        query: "query { checkAuth { success } }",
        variables: serde_json::json!({}),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "query": "query { checkAuth { success } }",
            "variables": {}
        })
    );
}

// =============================================================
// Error collapsing
// =============================================================

#[test]
fn collapse_errors_joins_messages() {
    let errors = vec![error("Not authenticated"), error("field resolution failed")];
    assert_eq!(
        collapse_errors(&errors),
        "Not authenticated; field resolution failed"
    );
}

#[test]
fn collapse_errors_single_message_passes_through() {
    assert_eq!(collapse_errors(&[error("boom")]), "boom");
}

#[test]
fn collapse_errors_empty_list_falls_back() {
    assert_eq!(collapse_errors(&[]), "unknown graphql error");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(502), "request failed: 502");
}

// =============================================================
// Data field extraction
// =============================================================

#[test]
fn extract_field_deserializes_named_field() {
    let data = serde_json::json!({
        "logout": {"success": true, "message": "Logged out successfully"}
    });
    let payload: crate::net::types::AuthPayload = extract_field(Some(data), "logout").unwrap();
    assert!(payload.success);
}

#[test]
fn extract_field_missing_data_is_an_error() {
    let result: Result<serde_json::Value, String> = extract_field(None, "logout");
    assert_eq!(result.unwrap_err(), "response contained no data");
}

#[test]
fn extract_field_missing_field_is_an_error() {
    let data = serde_json::json!({"login": {"success": true, "message": "ok"}});
    let result: Result<serde_json::Value, String> = extract_field(Some(data), "logout");
    assert_eq!(result.unwrap_err(), "response missing field: logout");
}

#[test]
fn extract_field_malformed_payload_is_an_error() {
    let data = serde_json::json!({"getPortfolios": "not a list"});
    let result: Result<Vec<crate::net::types::Portfolio>, String> =
        extract_field(Some(data), "getPortfolios");
    assert!(result.unwrap_err().starts_with("malformed getPortfolios payload"));
}
