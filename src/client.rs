/// Adesk API client.
///
/// One method call is one HTTP request. The client adds authentication,
/// hands a plain-data [`HttpRequest`] to its [`Transport`], and turns the
/// reply into either a JSON value or a typed [`AdeskError`]. It never
/// retries and holds no per-call state, so a single instance can be cloned
/// and shared across threads.
use std::sync::Arc;

use log::debug;
use serde_json::Value;
use url::Url;

use crate::config::{ApiVersion, ClientConfig};
use crate::errors::{AdeskError, ApiFailure, PAYMENT_REQUIRED_CODE};
use crate::models::FromWire;
use crate::params::Params;
use crate::resources::{
    BankAccounts, Commitments, Contractors, CustomReportDebtEntries, CustomReportEntries,
    CustomReportGroups, CustomReportValues, Operations, Projects, Tags, Warehouse, Webhooks,
};
use crate::transport::{
    HttpMethod, HttpRequest, HttpResponse, RequestBody, ReqwestTransport, Transport,
};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Synchronous client for both Adesk API versions.
#[derive(Clone)]
pub struct AdeskClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for AdeskClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdeskClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AdeskClient {
    /// Client for the public endpoints using the default HTTP transport.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(api_token))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    /// Client with a caller-supplied transport (mocks, custom HTTP stacks).
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Resources
    // -----------------------------------------------------------------------

    pub fn projects(&self) -> Projects<'_> {
        Projects::new(self)
    }

    /// Transactions (income, outcome, planned).
    pub fn operations(&self) -> Operations<'_> {
        Operations::new(self)
    }

    pub fn contractors(&self) -> Contractors<'_> {
        Contractors::new(self)
    }

    pub fn commitments(&self) -> Commitments<'_> {
        Commitments::new(self)
    }

    pub fn bank_accounts(&self) -> BankAccounts<'_> {
        BankAccounts::new(self)
    }

    pub fn tags(&self) -> Tags<'_> {
        Tags::new(self)
    }

    pub fn webhooks(&self) -> Webhooks<'_> {
        Webhooks::new(self)
    }

    pub fn warehouse(&self) -> Warehouse<'_> {
        Warehouse::new(self)
    }

    /// Resources only served by the v2 JSON API.
    pub fn v2(&self) -> ApiV2<'_> {
        ApiV2 { client: self }
    }

    // -----------------------------------------------------------------------
    // v1 (form-encoded)
    // -----------------------------------------------------------------------

    /// GET against the v1 API. The token travels in the query string.
    pub fn get(&self, endpoint: &str, params: Params) -> Result<Option<Value>, AdeskError> {
        let mut query = params;
        query.push("api_token", self.config.api_token.as_str());
        self.request_v1(HttpMethod::Get, endpoint, query, None)
    }

    /// POST a form body to the v1 API. The token travels in the body.
    pub fn post(
        &self,
        endpoint: &str,
        data: Params,
        params: Params,
    ) -> Result<Option<Value>, AdeskError> {
        let mut form = data;
        form.push("api_token", self.config.api_token.as_str());
        self.request_v1(HttpMethod::Post, endpoint, params, Some(form))
    }

    fn request_v1(
        &self,
        method: HttpMethod,
        endpoint: &str,
        query: Params,
        form: Option<Params>,
    ) -> Result<Option<Value>, AdeskError> {
        debug!(
            "client.request_v1 method={} endpoint={}",
            method.as_str(),
            endpoint
        );
        let url = self.endpoint_url(ApiVersion::V1, endpoint)?;
        let mut headers = Vec::new();
        let body = form.map(|form| {
            headers.push(("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string()));
            RequestBody::Form(form.into_pairs())
        });
        let request = HttpRequest {
            method,
            url,
            query: query.into_pairs(),
            headers,
            body,
        };
        let response = self.execute(ApiVersion::V1, &request)?;
        parse_response(ApiVersion::V1, response)
    }

    // -----------------------------------------------------------------------
    // v2 (JSON)
    // -----------------------------------------------------------------------

    pub fn get_v2(&self, endpoint: &str, params: Params) -> Result<Option<Value>, AdeskError> {
        self.request_v2(HttpMethod::Get, endpoint, params, None)
    }

    pub fn post_v2(
        &self,
        endpoint: &str,
        body: Option<Value>,
        params: Params,
    ) -> Result<Option<Value>, AdeskError> {
        self.request_v2(HttpMethod::Post, endpoint, params, body)
    }

    pub fn put_v2(
        &self,
        endpoint: &str,
        body: Option<Value>,
        params: Params,
    ) -> Result<Option<Value>, AdeskError> {
        self.request_v2(HttpMethod::Put, endpoint, params, body)
    }

    pub fn delete_v2(&self, endpoint: &str, params: Params) -> Result<Option<Value>, AdeskError> {
        self.request_v2(HttpMethod::Delete, endpoint, params, None)
    }

    fn request_v2(
        &self,
        method: HttpMethod,
        endpoint: &str,
        query: Params,
        body: Option<Value>,
    ) -> Result<Option<Value>, AdeskError> {
        debug!(
            "client.request_v2 method={} endpoint={} has_body={}",
            method.as_str(),
            endpoint,
            body.is_some()
        );
        let url = self.endpoint_url(ApiVersion::V2, endpoint)?;
        let request = HttpRequest {
            method,
            url,
            query: query.into_pairs(),
            headers: vec![
                ("X-API-Token".to_string(), self.config.api_token.clone()),
                ("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()),
                ("Accept".to_string(), JSON_CONTENT_TYPE.to_string()),
            ],
            body: body.map(RequestBody::Json),
        };
        let response = self.execute(ApiVersion::V2, &request)?;
        parse_response(ApiVersion::V2, response)
    }

    // -----------------------------------------------------------------------
    // Shared plumbing
    // -----------------------------------------------------------------------

    fn endpoint_url(&self, version: ApiVersion, endpoint: &str) -> Result<Url, AdeskError> {
        let base = self.config.base_for(version);
        let joined = format!(
            "{}/{}",
            base.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );
        Ok(Url::parse(&joined)?)
    }

    fn execute(
        &self,
        version: ApiVersion,
        request: &HttpRequest,
    ) -> Result<HttpResponse, AdeskError> {
        self.transport.execute(request).map_err(|err| {
            debug!(
                "client.execute transport_failed version={} endpoint={} error={}",
                version,
                request.url.path(),
                err
            );
            AdeskError::Api(
                ApiFailure::new(format!("{version} request failed: {err}"), None, None)
                    .with_source(err),
            )
        })
    }
}

/// Turn a raw response into a JSON value or a typed error.
fn parse_response(
    version: ApiVersion,
    response: HttpResponse,
) -> Result<Option<Value>, AdeskError> {
    let status = response.status;
    let text = response.body.trim();
    debug!(
        "client.parse_response version={} status={} body_len={}",
        version,
        status,
        text.len()
    );

    if status >= 400 {
        let payload = if text.is_empty() {
            None
        } else {
            Some(serde_json::from_str::<Value>(text).unwrap_or_else(|_| Value::String(text.to_string())))
        };
        let mut message = payload
            .as_ref()
            .and_then(|p| p.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {status}"));
        if version == ApiVersion::V2 {
            if let Some(errors) = payload.as_ref().and_then(|p| p.get("errors")) {
                message = format!("{message} Errors: {errors}");
            }
        }
        debug!(
            "client.parse_response error version={} status={} message={}",
            version, status, message
        );
        return Err(AdeskError::from_status(version, status, message, payload));
    }

    if status == 204 || text.is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(text).map_err(|err| {
        AdeskError::Api(
            ApiFailure::new(
                format!("Invalid JSON response: {err}"),
                Some(status),
                Some(Value::String(text.to_string())),
            )
            .with_source(err),
        )
    })?;

    if version == ApiVersion::V1 && is_payment_required(&value) {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Payment required")
            .to_string();
        debug!(
            "client.parse_response in_band_payment_required status={}",
            status
        );
        return Err(AdeskError::PaymentRequired(ApiFailure::new(
            message,
            Some(status),
            Some(value),
        )));
    }

    Ok(Some(value))
}

/// v1 signals an unpaid account with `code: 21` inside a 2xx body.
fn is_payment_required(value: &Value) -> bool {
    match value.get("code") {
        Some(Value::Number(n)) => n.as_f64() == Some(PAYMENT_REQUIRED_CODE as f64),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok() == Some(PAYMENT_REQUIRED_CODE),
        _ => false,
    }
}

/// Hydrate the array stored under `key`; a missing body or key is an empty list.
pub(crate) fn unwrap_list<T: FromWire>(response: Option<Value>, key: &str) -> Vec<T> {
    T::from_wire_list(response.as_ref().and_then(|body| body.get(key)))
}

/// Hydrate the object stored under `key`; a missing body or key is `None`.
pub(crate) fn unwrap_one<T: FromWire>(response: Option<Value>, key: &str) -> Option<T> {
    response
        .as_ref()
        .and_then(|body| body.get(key))
        .filter(|value| value.is_object())
        .map(T::from_wire)
}

/// Accessors for the v2 custom report resources.
#[derive(Debug, Clone, Copy)]
pub struct ApiV2<'a> {
    client: &'a AdeskClient,
}

impl<'a> ApiV2<'a> {
    pub fn custom_report_groups(&self) -> CustomReportGroups<'a> {
        CustomReportGroups::new(self.client)
    }

    pub fn custom_report_entries(&self) -> CustomReportEntries<'a> {
        CustomReportEntries::new(self.client)
    }

    pub fn custom_report_values(&self) -> CustomReportValues<'a> {
        CustomReportValues::new(self.client)
    }

    pub fn custom_report_debt_entries(&self) -> CustomReportDebtEntries<'a> {
        CustomReportDebtEntries::new(self.client)
    }
}
