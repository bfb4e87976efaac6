/// Live-HTTP tests for the default reqwest transport.
///
/// An in-process axum server runs on a background tokio runtime; the
/// blocking client is driven from the test thread.
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::thread;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use adesk_sdk::resources::{CustomReportGroupInput, NewProject, ProjectFilter};
use adesk_sdk::{AdeskClient, AdeskError, ClientConfig};

#[derive(Clone, Default)]
struct Seen {
    last: Arc<Mutex<Option<Value>>>,
}

impl Seen {
    fn record(&self, value: Value) {
        *self.last.lock().unwrap() = Some(value);
    }

    fn take(&self) -> Value {
        self.last.lock().unwrap().take().expect("server saw no request")
    }
}

async fn list_projects(
    State(seen): State<Seen>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    seen.record(json!(query));
    Json(json!({"projects": [{"id": 1, "name": "Store", "planIncome": "99.5"}]}))
}

async fn create_project(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Json<Value> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    seen.record(json!({"form": form, "content_type": content_type}));
    Json(json!({"project": {"id": 42, "name": form.get("name")}}))
}

async fn create_groups(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let token = headers
        .get("x-api-token")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    seen.record(json!({"body": body, "token": token}));
    (StatusCode::OK, Json(json!({"data": [{"id": 1, "name": "Marketing"}]})))
}

async fn unpaid() -> Json<Value> {
    Json(json!({"code": 21, "message": "Payment required"}))
}

async fn rate_limited() -> impl IntoResponse {
    (StatusCode::TOO_MANY_REQUESTS, Json(json!({"message": "Too many requests"})))
}

async fn removed() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Start the mock API on a background runtime and return its base URL.
fn start_server(seen: Seen) -> String {
    let (tx, rx) = std::sync::mpsc::channel();
    thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async move {
            let app = Router::new()
                .route("/v1/projects", get(list_projects))
                .route("/v1/project", post(create_project))
                .route("/v1/tags", get(unpaid))
                .route("/v1/contractors", get(rate_limited))
                .route("/v2/custom-report-groups/create", post(create_groups))
                .route("/v2/custom-report-groups/remove", post(removed))
                .with_state(seen);
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });
    let addr = rx.recv().unwrap();
    format!("http://{addr}")
}

fn client_for(base: &str) -> AdeskClient {
    AdeskClient::with_config(
        ClientConfig::new("live-token")
            .with_base_url(format!("{base}/v1/"))
            .with_base_url_v2(format!("{base}/v2")),
    )
}

#[test]
fn get_sends_token_in_query_and_hydrates() {
    let seen = Seen::default();
    let client = client_for(&start_server(seen.clone()));
    let filter = ProjectFilter {
        q: Some("store".into()),
        ..Default::default()
    };

    let projects = client.projects().list(&filter).unwrap();

    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].plan_income, Some(99.5));
    assert_eq!(seen.take(), json!({"q": "store", "api_token": "live-token"}));
}

#[test]
fn post_sends_form_encoded_body() {
    let seen = Seen::default();
    let client = client_for(&start_server(seen.clone()));

    let project = client
        .projects()
        .create(&NewProject {
            is_deal: Some(true),
            ..NewProject::new("Q1 Launch")
        })
        .unwrap()
        .unwrap();

    assert_eq!(project.id, Some(42));
    let request = seen.take();
    assert_eq!(
        request["form"],
        json!({"name": "Q1 Launch", "is_deal": "true", "api_token": "live-token"})
    );
    assert!(request["content_type"]
        .as_str()
        .unwrap()
        .starts_with("application/x-www-form-urlencoded"));
}

#[test]
fn v2_sends_json_with_header_token() {
    let seen = Seen::default();
    let client = client_for(&start_server(seen.clone()));
    let input = CustomReportGroupInput {
        name: Some("Marketing".into()),
        ..Default::default()
    };

    let groups = client.v2().custom_report_groups().create(&[input]).unwrap();

    assert_eq!(groups[0].name.as_deref(), Some("Marketing"));
    assert_eq!(
        seen.take(),
        json!({"body": [{"name": "Marketing"}], "token": "live-token"})
    );
}

#[test]
fn statuses_and_in_band_codes_over_the_wire() {
    let client = client_for(&start_server(Seen::default()));

    let unpaid = client.tags().list(None).unwrap_err();
    assert!(matches!(unpaid, AdeskError::PaymentRequired(_)));
    assert_eq!(unpaid.status_code(), Some(200));

    let limited = client.contractors().list(&Default::default()).unwrap_err();
    assert!(matches!(limited, AdeskError::RateLimit(_)));
    assert_eq!(limited.failure().unwrap().message, "Too many requests");

    let removed = client.v2().custom_report_groups().remove(&[1]).unwrap();
    assert!(removed.is_none());

    let missing = client.webhooks().list().unwrap_err();
    assert!(matches!(missing, AdeskError::NotFound(_)));
}

#[test]
fn connection_refused_is_an_api_error() {
    // Bind then drop to get a port nothing listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let client = client_for(&format!("http://{addr}"));

    let err = client.webhooks().list().unwrap_err();
    assert!(matches!(err, AdeskError::Api(_)));
    assert_eq!(err.status_code(), None);
}
