/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Configured reqwest client and typed request execution
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::env;
use std::fmt;
use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::http::resource::RestRequest;
use crate::http::{Result, TwilioError};
use crate::types::RestException;

/// Base URL for the 2010-04-01 Twilio REST API
pub const DEFAULT_BASE_URL: &str = "https://api.twilio.com/2010-04-01/";

pub const ACCOUNT_SID_ENV: &str = "TWILIO_ACCOUNT_SID";
pub const AUTH_TOKEN_ENV: &str = "TWILIO_AUTH_TOKEN";

const RAW_LOG_MAX_BYTES: usize = 1024;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub base_url: String,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("twilio-adapter/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Account credentials used for HTTP basic authentication
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub account_sid: String,
    pub auth_token: String,
}

impl Credentials {
    pub fn new(account_sid: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
        }
    }

    /// Read credentials from `TWILIO_ACCOUNT_SID` and `TWILIO_AUTH_TOKEN`
    pub fn from_env() -> Result<Self> {
        let account_sid = read_env(ACCOUNT_SID_ENV)?;
        let auth_token = read_env(AUTH_TOKEN_ENV)?;
        Ok(Self::new(account_sid, auth_token))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

fn read_env(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(TwilioError::Config(format!("{name} is not set"))),
    }
}

/// Main HTTP client for the Twilio REST API
///
/// Holds immutable configuration only; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct TwilioClient {
    http_client: Client,
    base_url: Url,
    credentials: Credentials,
}

impl TwilioClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client from environment credentials and default configuration
    pub fn from_env() -> Result<Self> {
        Self::new(Credentials::from_env()?)
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.clone();
        Self::with_config_and_base_url(credentials, config, &base_url)
    }

    /// Create a new client pointed at an explicit base URL
    pub fn with_config_and_base_url(
        credentials: Credentials,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        if credentials.account_sid.trim().is_empty() {
            return Err(TwilioError::Config("account sid is empty".to_string()));
        }

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|err| TwilioError::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            http_client,
            base_url: normalize_base_url(base_url)?,
            credentials,
        })
    }

    /// The authenticated account's sid
    pub fn account_sid(&self) -> &str {
        &self.credentials.account_sid
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the absolute URL for a request
    pub fn request_url(&self, request: &RestRequest) -> Result<Url> {
        let path = request.resolve_path(self.account_sid())?;
        Ok(self.base_url.join(&path)?)
    }

    /// Send a request and deserialize a successful response into `T`
    pub async fn execute<T: DeserializeOwned>(&self, request: RestRequest) -> Result<T> {
        let url = self.request_url(&request)?;
        debug!(
            method = %request.method(),
            resource = request.resource(),
            params = request.params().len(),
            "twilio request"
        );

        let mut builder = self
            .http_client
            .request(request.method().clone(), url)
            .basic_auth(&self.credentials.account_sid, Some(&self.credentials.auth_token))
            .header(ACCEPT, "application/json");

        if !request.params().is_empty() {
            builder = if request.uses_query() {
                builder.query(request.params())
            } else {
                builder.form(request.params())
            };
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(%status, bytes = body.len(), resource = request.resource(), "twilio response");

        if !status.is_success() {
            let err = api_error_from_body(status, &body);
            warn!(%status, resource = request.resource(), error = %err, "twilio request failed");
            return Err(err);
        }

        serde_json::from_str(&body).map_err(|err| {
            warn!(
                resource = request.resource(),
                error = %err,
                body = %truncate_for_log(&body, RAW_LOG_MAX_BYTES),
                "failed to decode twilio response"
            );
            TwilioError::Serialization(err)
        })
    }
}

fn normalize_base_url(base_url: &str) -> Result<Url> {
    let trimmed = base_url.trim();
    if trimmed.ends_with('/') {
        Ok(Url::parse(trimmed)?)
    } else {
        Ok(Url::parse(&format!("{trimmed}/"))?)
    }
}

fn api_error_from_body(status: StatusCode, body: &str) -> TwilioError {
    match serde_json::from_str::<RestException>(body) {
        Ok(exception) => TwilioError::from_exception(status, exception),
        Err(_) if body.trim().is_empty() => TwilioError::api_error(
            status,
            status.canonical_reason().unwrap_or("request failed"),
        ),
        Err(_) => TwilioError::api_error(status, truncate_for_log(body, RAW_LOG_MAX_BYTES)),
    }
}

fn truncate_for_log(value: &str, max_len: usize) -> String {
    if value.len() <= max_len {
        return value.to_string();
    }
    let mut end = max_len;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    let mut out = String::with_capacity(end + 3);
    out.push_str(&value[..end]);
    out.push_str("...");
    out
}
