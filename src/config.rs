/// Client configuration for the Adesk API endpoints.
use std::fmt;

/// Default base URL of the form-encoded v1 API.
pub const DEFAULT_BASE_URL: &str = "https://api.adesk.ru/v1/";

/// Default base URL of the JSON v2 API.
pub const DEFAULT_BASE_URL_V2: &str = "https://api.adesk.ru/v2/";

/// The two API surfaces served by Adesk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    V1,
    V2,
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiVersion::V1 => f.write_str("V1"),
            ApiVersion::V2 => f.write_str("V2"),
        }
    }
}

/// Configuration holding the API token and the base URL of each API version.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_token: String,
    pub base_url: String,
    pub base_url_v2: String,
}

impl ClientConfig {
    /// Configuration for the public Adesk endpoints.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: DEFAULT_BASE_URL.into(),
            base_url_v2: DEFAULT_BASE_URL_V2.into(),
        }
    }

    /// Override the v1 base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the v2 base URL.
    pub fn with_base_url_v2(mut self, base_url_v2: impl Into<String>) -> Self {
        self.base_url_v2 = base_url_v2.into();
        self
    }

    /// Base URL for the given API version.
    pub fn base_for(&self, version: ApiVersion) -> &str {
        match version {
            ApiVersion::V1 => &self.base_url,
            ApiVersion::V2 => &self.base_url_v2,
        }
    }
}

// The token never shows up in logs or panic messages.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("base_url_v2", &self.base_url_v2)
            .finish()
    }
}
