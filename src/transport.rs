//! HTTP transport for the Bitbucket SDK.
//!
//! Wraps a `reqwest::Client` with the API base URL and Basic-auth
//! credentials, and parses non-2xx responses into typed errors. Retries,
//! timeouts, and connection management are reqwest's concern; nothing is
//! layered on top here.

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, Error};

/// HTTP transport layer with Basic authentication.
///
/// Holds the only state the SDK keeps across calls: the base URL, the
/// credentials, and the underlying client. All of it is fixed at
/// construction.
#[derive(Debug)]
pub struct HttpTransport {
    base_url: String,
    username: String,
    app_password: String,
    client: Client,
}

impl HttpTransport {
    /// Create a new HTTP transport.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL for API requests (e.g., "<https://api.bitbucket.org/2.0>")
    /// * `username` - Bitbucket username
    /// * `app_password` - App password or equivalent token
    /// * `timeout` - Request timeout applied to every call
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(
        base_url: &str,
        username: &str,
        app_password: &str,
        timeout: Duration,
    ) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.to_string(),
            app_password: app_password.to_string(),
            client,
        })
    }

    /// GET a path and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Option<&[(&str, String)]>,
    ) -> Result<T, Error> {
        let mut request = self
            .request(Method::GET, path)
            .header(ACCEPT, "application/json");
        if let Some(p) = params {
            request = request.query(p);
        }

        let response = self.execute(request).await?;
        Self::decode(response).await
    }

    /// GET a path as raw text.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response; a 404
    /// surfaces as `ApiError::NotFound` for the caller to interpret.
    pub async fn get_text(&self, path: &str) -> Result<String, Error> {
        let request = self.request(Method::GET, path).header(ACCEPT, "text/plain");
        let response = self.execute(request).await?;
        response
            .text()
            .await
            .map_err(|e| Error::Http(format!("Failed to read response body: {e}")))
    }

    /// POST a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn post<T: DeserializeOwned>(&self, path: &str, body: &Value) -> Result<T, Error> {
        let request = self
            .request(Method::POST, path)
            .header(ACCEPT, "application/json")
            .json(body);
        let response = self.execute(request).await?;
        Self::decode(response).await
    }

    /// PUT with an optional JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T, Error> {
        let mut request = self
            .request(Method::PUT, path)
            .header(ACCEPT, "application/json");
        if let Some(b) = body {
            request = request.json(b);
        }
        let response = self.execute(request).await?;
        Self::decode(response).await
    }

    /// DELETE a path, expecting an empty response.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn delete(&self, path: &str) -> Result<(), Error> {
        let request = self.request(Method::DELETE, path);
        self.execute(request).await?;
        Ok(())
    }

    /// POST a multipart form and return the raw response.
    ///
    /// Callers that need response headers (e.g. `Location`) use this instead
    /// of the JSON entry points.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn post_form(&self, path: &str, form: Form) -> Result<Response, Error> {
        let request = self.request(Method::POST, path).multipart(form);
        self.execute(request).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("{method} {url}");
        self.client
            .request(method, &url)
            .basic_auth(&self.username, Some(&self.app_password))
    }

    /// Send the request and check the status, parsing failures into typed
    /// errors.
    async fn execute(&self, request: RequestBuilder) -> Result<Response, Error> {
        let response = request
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body: Value = response.json().await.unwrap_or_else(|_| Value::Null);
        let message = error_message(status.as_u16(), &body);
        Err(Error::Api(ApiError::from_status(status.as_u16(), message)))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
        let body = response
            .text()
            .await
            .map_err(|e| Error::Http(format!("Failed to read response body: {e}")))?;
        serde_json::from_str(&body).map_err(Error::from)
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the authenticated username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Extract the human-readable message from a Bitbucket error body.
///
/// The API wraps failures as `{"type": "error", "error": {"message", "detail"}}`;
/// anything else falls back to `HTTP {status}`.
fn error_message(status: u16, body: &Value) -> String {
    body.get("error")
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .map_or_else(|| format!("HTTP {status}"), str::to_string)
}
