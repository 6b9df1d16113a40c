//! API client contract and its HTTP implementation.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::config::AdminApiConfig;
use crate::error::{AdminClientError, Result};
use crate::request::{ApiRequest, WriteMethod};
use crate::response::ApiResponse;

/// Media type of admin API requests and responses.
pub const JSON_LD: &str = "application/ld+json";

/// User agent string identifying this client.
const USER_AGENT: &str = concat!("catalog-admin-client/", env!("CARGO_PKG_VERSION"));

/// Client for one admin API resource, keeping the request being built and
/// the last response received.
#[async_trait]
pub trait ApiClient: Send {
    /// Start a new create request, discarding any request in progress.
    fn build_create_request(&mut self);

    /// Start a new update request for the resource identified by `code`.
    fn build_update_request(&mut self, code: &str);

    /// Set a top-level field on the request in progress.
    fn add_request_data(&mut self, key: &str, value: Value) -> Result<()>;

    /// Deep-merge `data` into the request in progress.
    fn update_request_data(&mut self, data: Map<String, Value>) -> Result<()>;

    /// Send the create request in progress.
    async fn create(&mut self) -> Result<ApiResponse>;

    /// Send the update request in progress.
    async fn update(&mut self) -> Result<ApiResponse>;

    /// Fetch the resource collection.
    async fn index(&mut self) -> Result<ApiResponse>;

    /// Fetch a single resource.
    async fn show(&mut self, code: &str) -> Result<ApiResponse>;

    /// Delete a single resource.
    async fn delete(&mut self, code: &str) -> Result<ApiResponse>;

    /// The most recent response of any request.
    fn last_response(&self) -> Result<&ApiResponse>;
}

/// JSON-LD admin API client over reqwest.
///
/// NOTE: `Debug` is implemented by hand so the bearer token is never printed.
pub struct HttpApiClient {
    http: reqwest::Client,
    collection_url: Url,
    token: Option<String>,
    request: Option<ApiRequest>,
    last_response: Option<ApiResponse>,
}

impl std::fmt::Debug for HttpApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpApiClient")
            .field("collection_url", &self.collection_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("request", &self.request)
            .field("last_response", &self.last_response)
            .finish()
    }
}

impl HttpApiClient {
    /// Create a client for `resource` (e.g. `product-association-types`).
    pub fn new(config: &AdminApiConfig, resource: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        let mut collection_url = Url::parse(&config.api_base_url)?;
        collection_url
            .path_segments_mut()
            .map_err(|_| {
                AdminClientError::Config(format!(
                    "API base URL cannot have path segments: {}",
                    config.api_base_url
                ))
            })?
            .pop_if_empty()
            .push(resource);

        Ok(Self {
            http,
            collection_url,
            token: config.token.clone(),
            request: None,
            last_response: None,
        })
    }

    /// URL of the resource collection.
    pub fn collection_url(&self) -> &Url {
        &self.collection_url
    }

    /// URL of a single resource; the code is encoded as one path segment.
    pub fn item_url(&self, code: &str) -> Url {
        let mut url = self.collection_url.clone();
        // The collection URL was checked for a path base in `new`.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(code);
        }
        url
    }

    /// The request currently being built, if any.
    pub fn pending_request(&self) -> Option<&ApiRequest> {
        self.request.as_ref()
    }

    fn pending_mut(&mut self) -> Result<&mut ApiRequest> {
        self.request.as_mut().ok_or(AdminClientError::NoRequestBuilt)
    }

    async fn send_pending(&mut self, expected: WriteMethod) -> Result<ApiResponse> {
        let request = match &self.request {
            Some(request) if request.method == expected => request.clone(),
            _ => return Err(AdminClientError::NoRequestBuilt),
        };

        let (method, url) = match (&request.method, &request.code) {
            (WriteMethod::Post, _) => (Method::POST, self.collection_url.clone()),
            (WriteMethod::Put, Some(code)) => (Method::PUT, self.item_url(code)),
            (WriteMethod::Put, None) => return Err(AdminClientError::NoRequestBuilt),
        };

        self.send(method, url, Some(Value::Object(request.body))).await
    }

    async fn send(&mut self, method: Method, url: Url, body: Option<Value>) -> Result<ApiResponse> {
        // Only a response that parsed belongs to the request just sent.
        self.last_response = None;

        let mut builder = self
            .http
            .request(method.clone(), url.clone())
            .header(ACCEPT, JSON_LD);

        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, JSON_LD).body(body.to_string());
        }

        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        debug!(method = %method, url = %url, status, "admin API request");

        let text = resp.text().await?;
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).map_err(|e| {
                warn!(url = %url, status, error = %e, "admin API returned a non-JSON body");
                AdminClientError::ResponseParse {
                    url: url.to_string(),
                    status,
                    message: e.to_string(),
                }
            })?
        };

        let response = ApiResponse::new(status, body);
        self.last_response = Some(response.clone());
        Ok(response)
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    fn build_create_request(&mut self) {
        self.request = Some(ApiRequest::create());
    }

    fn build_update_request(&mut self, code: &str) {
        self.request = Some(ApiRequest::update(code));
    }

    fn add_request_data(&mut self, key: &str, value: Value) -> Result<()> {
        self.pending_mut()?.add(key, value);
        Ok(())
    }

    fn update_request_data(&mut self, data: Map<String, Value>) -> Result<()> {
        self.pending_mut()?.merge(data);
        Ok(())
    }

    async fn create(&mut self) -> Result<ApiResponse> {
        self.send_pending(WriteMethod::Post).await
    }

    async fn update(&mut self) -> Result<ApiResponse> {
        self.send_pending(WriteMethod::Put).await
    }

    async fn index(&mut self) -> Result<ApiResponse> {
        let url = self.collection_url.clone();
        self.send(Method::GET, url, None).await
    }

    async fn show(&mut self, code: &str) -> Result<ApiResponse> {
        let url = self.item_url(code);
        self.send(Method::GET, url, None).await
    }

    async fn delete(&mut self, code: &str) -> Result<ApiResponse> {
        let url = self.item_url(code);
        self.send(Method::DELETE, url, None).await
    }

    fn last_response(&self) -> Result<&ApiResponse> {
        self.last_response.as_ref().ok_or(AdminClientError::NoResponse)
    }
}
