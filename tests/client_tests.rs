/// Transport-core tests: authentication placement, status mapping and
/// response handling, driven through a recording mock transport.
mod common;

use std::error::Error as _;

use adesk_sdk::{AdeskError, HttpMethod, Params};
use serde_json::json;

use common::{client_with, form, json_body, pair, MockTransport, TOKEN};

// ---------------------------------------------------------------------------
// Request shape
// ---------------------------------------------------------------------------

#[test]
fn v1_get_puts_token_in_query() {
    let mock = MockTransport::new();
    let client = client_with(&mock);
    let mut params = Params::new();
    params.push("q", "acme");

    client.get("/contractors", params).unwrap();

    let request = mock.last();
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.url.as_str(), "https://api.test/v1/contractors");
    assert_eq!(request.query_value("q"), Some("acme"));
    assert_eq!(request.query_value("api_token"), Some(TOKEN));
    assert!(request.body.is_none());
    assert!(request.header("X-API-Token").is_none());
}

#[test]
fn v1_post_puts_token_in_form_body() {
    let mock = MockTransport::new();
    let client = client_with(&mock);
    let mut data = Params::new();
    data.push("name", "Q1");

    client.post("project", data, Params::new()).unwrap();

    let request = mock.last();
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(
        form(&request),
        vec![pair("name", "Q1"), pair("api_token", TOKEN)]
    );
    assert!(request.query.is_empty());
    assert_eq!(
        request.header("content-type"),
        Some("application/x-www-form-urlencoded")
    );
}

#[test]
fn v1_post_without_data_still_authenticates() {
    let mock = MockTransport::new();
    let client = client_with(&mock);

    client
        .post("project/5/remove", Params::new(), Params::new())
        .unwrap();

    assert_eq!(form(&mock.last()), vec![pair("api_token", TOKEN)]);
}

#[test]
fn v2_uses_headers_and_json() {
    let mock = MockTransport::new();
    let client = client_with(&mock);

    client
        .post_v2("custom-report-groups/create", Some(json!([{"name": "A"}])), Params::new())
        .unwrap();

    let request = mock.last();
    assert_eq!(
        request.url.as_str(),
        "https://api.test/v2/custom-report-groups/create"
    );
    assert_eq!(request.header("X-API-Token"), Some(TOKEN));
    assert_eq!(request.header("Content-Type"), Some("application/json"));
    assert_eq!(request.header("Accept"), Some("application/json"));
    assert!(request.query_value("api_token").is_none());
    assert_eq!(json_body(&request), json!([{"name": "A"}]));
}

#[test]
fn v2_methods_map_to_http_verbs() {
    let mock = MockTransport::new();
    let client = client_with(&mock);

    client.get_v2("a", Params::new()).unwrap();
    client.put_v2("b", None, Params::new()).unwrap();
    client.delete_v2("c", Params::new()).unwrap();

    let methods: Vec<_> = mock.requests().iter().map(|r| r.method).collect();
    assert_eq!(
        methods,
        vec![HttpMethod::Get, HttpMethod::Put, HttpMethod::Delete]
    );
    assert!(mock.requests()[1].body.is_none());
}

// ---------------------------------------------------------------------------
// Success handling
// ---------------------------------------------------------------------------

#[test]
fn json_body_is_returned() {
    let mock = MockTransport::new();
    mock.reply_json(200, json!({"projects": []}));
    let client = client_with(&mock);

    let value = client.get("projects", Params::new()).unwrap();
    assert_eq!(value, Some(json!({"projects": []})));
}

#[test]
fn empty_and_no_content_bodies_are_absent() {
    let mock = MockTransport::new();
    mock.reply(200, "");
    mock.reply(204, "");
    mock.reply(204, "");
    let client = client_with(&mock);

    assert_eq!(client.get("projects", Params::new()).unwrap(), None);
    assert_eq!(client.delete_v2("custom-report-groups/1", Params::new()).unwrap(), None);
    assert_eq!(client.post("tag/1/remove", Params::new(), Params::new()).unwrap(), None);
}

#[test]
fn in_band_code_21_is_payment_required_with_success_status() {
    let mock = MockTransport::new();
    mock.reply_json(200, json!({"code": 21, "message": "Account is not paid"}));
    let client = client_with(&mock);

    let err = client.get("projects", Params::new()).unwrap_err();
    assert!(matches!(err, AdeskError::PaymentRequired(_)));
    assert_eq!(err.status_code(), Some(200));
    assert_eq!(err.response_data(), Some(&json!({"code": 21, "message": "Account is not paid"})));
}

#[test]
fn in_band_code_is_ignored_on_v2() {
    let mock = MockTransport::new();
    mock.reply_json(200, json!({"code": 21}));
    let client = client_with(&mock);

    assert!(client.get_v2("custom-report-groups", Params::new()).is_ok());
}

#[test]
fn non_json_success_body_is_an_api_error() {
    let mock = MockTransport::new();
    mock.reply(200, "<html>maintenance</html>");
    let client = client_with(&mock);

    let err = client.get("projects", Params::new()).unwrap_err();
    assert!(matches!(err, AdeskError::Api(_)));
    assert_eq!(err.status_code(), Some(200));
    assert_eq!(err.response_data(), Some(&json!("<html>maintenance</html>")));
}

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

#[test]
fn status_codes_map_to_error_kinds() {
    let cases: [(u16, fn(&AdeskError) -> bool); 7] = [
        (400, |e| matches!(e, AdeskError::BadRequest(_))),
        (401, |e| matches!(e, AdeskError::Auth(_))),
        (402, |e| matches!(e, AdeskError::PaymentRequired(_))),
        (403, |e| matches!(e, AdeskError::PaymentRequired(_))),
        (404, |e| matches!(e, AdeskError::NotFound(_))),
        (429, |e| matches!(e, AdeskError::RateLimit(_))),
        (418, |e| matches!(e, AdeskError::Api(_))),
    ];
    for (status, is_expected) in cases {
        let mock = MockTransport::new();
        mock.reply_json(status, json!({"message": "nope"}));
        let err = client_with(&mock).get("projects", Params::new()).unwrap_err();
        assert!(is_expected(&err), "status {status} mapped to {err:?}");
        assert_eq!(err.status_code(), Some(status));
        assert_eq!(err.failure().unwrap().message, "nope");
    }
}

#[test]
fn every_5xx_is_a_server_error() {
    for status in [500u16, 502, 503, 599] {
        let mock = MockTransport::new();
        mock.reply(status, "");
        let err = client_with(&mock).get_v2("x", Params::new()).unwrap_err();
        assert!(matches!(err, AdeskError::Server(_)));
        assert!(err.is_retryable());
        assert_eq!(err.status_code(), Some(status));
        assert_eq!(err.failure().unwrap().message, format!("HTTP {status}"));
    }
}

#[test]
fn v2_maps_403_but_not_402_to_payment_required() {
    let mock = MockTransport::new();
    mock.reply_json(403, json!({"message": "pay"}));
    mock.reply_json(402, json!({"message": "pay"}));
    let client = client_with(&mock);

    let forbidden = client.get_v2("custom-report-values", Params::new()).unwrap_err();
    let payment = client.get_v2("custom-report-values", Params::new()).unwrap_err();
    assert!(matches!(forbidden, AdeskError::PaymentRequired(_)));
    assert!(matches!(payment, AdeskError::Api(_)));
}

#[test]
fn v2_error_message_includes_field_errors() {
    let mock = MockTransport::new();
    mock.reply_json(
        400,
        json!({"message": "Invalid data", "errors": {"name": ["required"]}}),
    );
    let client = client_with(&mock);

    let err = client
        .post_v2("custom-report-groups/create", Some(json!([{}])), Params::new())
        .unwrap_err();
    let message = &err.failure().unwrap().message;
    assert!(message.starts_with("Invalid data"));
    assert!(message.contains(r#"{"name":["required"]}"#));
}

#[test]
fn non_json_error_body_is_kept_as_text() {
    let mock = MockTransport::new();
    mock.reply(404, "Not Found");
    let client = client_with(&mock);

    let err = client.get("project/1", Params::new()).unwrap_err();
    assert!(matches!(err, AdeskError::NotFound(_)));
    assert_eq!(err.response_data(), Some(&json!("Not Found")));
    assert_eq!(err.failure().unwrap().message, "HTTP 404");
}

#[test]
fn network_failure_is_a_generic_api_error_with_cause() {
    let mock = MockTransport::new();
    mock.fail("connection refused");
    let client = client_with(&mock);

    let err = client.get("projects", Params::new()).unwrap_err();
    assert!(matches!(err, AdeskError::Api(_)));
    assert_eq!(err.status_code(), None);
    assert!(err.to_string().contains("V1 request failed"));
    let cause = err.source().and_then(|failure| failure.source()).unwrap();
    assert_eq!(cause.to_string(), "connection refused");
}

#[test]
fn malformed_base_url_fails_before_sending() {
    let mock = MockTransport::new();
    let config = adesk_sdk::ClientConfig::new(TOKEN).with_base_url("not a url");
    let client = adesk_sdk::AdeskClient::with_transport(config, mock.clone());

    let err = client.get("projects", Params::new()).unwrap_err();
    assert!(matches!(err, AdeskError::Api(_)));
    assert_eq!(mock.call_count(), 0);
}

#[test]
fn one_request_per_call_without_retry() {
    let mock = MockTransport::new();
    mock.reply(503, "");
    let client = client_with(&mock);

    assert!(client.get("projects", Params::new()).is_err());
    assert_eq!(mock.call_count(), 1);
}
