//! Shared test helpers: a recording transport with canned replies.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use adesk_sdk::{
    AdeskClient, ClientConfig, HttpRequest, HttpResponse, RequestBody, Transport, TransportError,
};

pub const TOKEN: &str = "test-token";

/// Records every request and answers from a queue of canned results.
/// An exhausted queue answers `200 {}`.
#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<HttpRequest>>,
    replies: Mutex<VecDeque<Result<HttpResponse, String>>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, status: u16, body: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    pub fn reply_json(&self, status: u16, body: serde_json::Value) {
        self.reply(status, &body.to_string());
    }

    /// Fail the next call as if the connection had been refused.
    pub fn fail(&self, message: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Transport for MockTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                message,
            ))),
            None => Ok(HttpResponse::new(200, "{}")),
        }
    }
}

pub fn client_with(mock: &Arc<MockTransport>) -> AdeskClient {
    let config = ClientConfig::new(TOKEN)
        .with_base_url("https://api.test/v1/")
        .with_base_url_v2("https://api.test/v2/");
    AdeskClient::with_transport(config, mock.clone())
}

/// Form pairs of a v1 POST.
pub fn form(request: &HttpRequest) -> Vec<(String, String)> {
    match &request.body {
        Some(RequestBody::Form(pairs)) => pairs.clone(),
        other => panic!("expected a form body, got {other:?}"),
    }
}

/// Form pairs minus the token, sorted for comparison.
pub fn form_without_token(request: &HttpRequest) -> Vec<(String, String)> {
    let mut pairs: Vec<_> = form(request)
        .into_iter()
        .filter(|(k, _)| k != "api_token")
        .collect();
    pairs.sort();
    pairs
}

pub fn json_body(request: &HttpRequest) -> serde_json::Value {
    match &request.body {
        Some(RequestBody::Json(value)) => value.clone(),
        other => panic!("expected a JSON body, got {other:?}"),
    }
}

pub fn pair(key: &str, value: &str) -> (String, String) {
    (key.to_string(), value.to_string())
}
