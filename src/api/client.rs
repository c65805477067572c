//! Generic JSON-over-HTTP client shared by every remote service call

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::types::ApiError;

/// Ceiling for one request end to end, including reading the response body.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Ceiling for establishing the TCP/TLS connection.
pub const CONNECT_TIMEOUT_SECS: u64 = 15;

/// Typed JSON client bound to one service base URL.
///
/// Configuration is fixed at construction; a built client is safe to share
/// across concurrent in-flight requests without locking.
pub struct ApiClient {
    http: Client,
    base_url: String,
    additional_headers: Vec<(String, String)>,
}

impl ApiClient {
    /// Create a client for `base_url` with no extra headers.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_headers(base_url, Vec::new())
    }

    /// Create a client that sends `additional_headers` on every request,
    /// on top of the default `Content-Type: application/json`.
    pub fn with_headers(
        base_url: &str,
        additional_headers: Vec<(String, String)>,
    ) -> Result<Self, ApiError> {
        Self::with_timeouts(
            base_url,
            additional_headers,
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
            Duration::from_secs(CONNECT_TIMEOUT_SECS),
        )
    }

    /// Build with explicit timeout ceilings; the public constructors pin
    /// them to the service defaults.
    fn with_timeouts(
        base_url: &str,
        additional_headers: Vec<(String, String)>,
        request_timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in &additional_headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::Config(format!("invalid header name '{}': {}", name, e)))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| ApiError::Config(format!("invalid value for header '{}': {}", name, e)))?;
            headers.insert(header_name, header_value);
        }

        let http = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            additional_headers,
        })
    }

    /// Base URL this client is bound to (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers sent on every request beyond the JSON content type.
    pub fn additional_headers(&self) -> &[(String, String)] {
        &self.additional_headers
    }

    /// GET `endpoint` and decode the JSON response body as `T`.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.endpoint_url(endpoint);
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        Self::decode(response).await
    }

    /// POST `body` (if any) to `endpoint` and decode the response as `T`.
    pub async fn post<T, B>(&self, endpoint: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = self.endpoint_url(endpoint);
        tracing::debug!("POST {}", url);

        let mut request = self.http.post(&url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        Self::decode(response).await
    }

    /// PUT `body` (if any) to `endpoint` and decode the response as `T`.
    pub async fn put<T, B>(&self, endpoint: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = self.endpoint_url(endpoint);
        tracing::debug!("PUT {}", url);

        let mut request = self.http.put(&url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        Self::decode(response).await
    }

    /// DELETE `endpoint` and decode the response as `T`.
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.endpoint_url(endpoint);
        tracing::debug!("DELETE {}", url);

        let response = self.http.delete(&url).send().await?;
        Self::decode(response).await
    }

    /// Release the underlying connection pool.
    ///
    /// Consuming the client is the release discipline: once a non-singleton
    /// client goes out of scope, on any path, its connections are returned.
    pub fn close(self) {}

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Split the response into the three failure kinds callers must be able
    /// to tell apart: failing status, undecodable body, transport fault.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!("Request failed ({}): {}", status, message);
            return Err(ApiError::Status {
                code: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to decode response body: {}", e);
            ApiError::Decode(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn test_new_client_strips_trailing_slash() {
        let client = ApiClient::new("https://api.example.com/").unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
        assert!(client.additional_headers().is_empty());
    }

    #[test]
    fn test_with_headers_keeps_configuration() {
        let client = ApiClient::with_headers(
            "https://api.example.com",
            vec![("Authorization".into(), "Bearer secret".into())],
        )
        .unwrap();

        let headers = client.additional_headers();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[0].0, "Authorization");
        assert_eq!(headers[0].1, "Bearer secret");
    }

    #[test]
    fn test_with_headers_rejects_invalid_header_name() {
        let result = ApiClient::with_headers(
            "https://api.example.com",
            vec![("bad header name".into(), "value".into())],
        );

        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[test]
    fn test_with_headers_rejects_invalid_header_value() {
        let result = ApiClient::with_headers(
            "https://api.example.com",
            vec![("X-Token".into(), "line\nbreak".into())],
        );

        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[test]
    fn test_endpoint_url_joins_with_leading_slash() {
        let client = ApiClient::new("https://api.example.com").unwrap();
        assert_eq!(
            client.endpoint_url("/api/v1/patients"),
            "https://api.example.com/api/v1/patients"
        );
    }

    #[test]
    fn test_endpoint_url_joins_without_leading_slash() {
        let client = ApiClient::new("https://api.example.com").unwrap();
        assert_eq!(
            client.endpoint_url("models/gemini-1.5-flash:generateContent"),
            "https://api.example.com/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_timeout_constants() {
        assert_eq!(REQUEST_TIMEOUT_SECS, 30);
        assert_eq!(CONNECT_TIMEOUT_SECS, 15);
    }

    #[tokio::test]
    async fn test_get_connection_refused_is_transport() {
        let client = ApiClient::new("http://127.0.0.1:59999").unwrap();
        let result: Result<serde_json::Value, ApiError> = client.get("/anything").await;

        assert!(matches!(result, Err(ApiError::Transport(_))));
    }

    #[tokio::test]
    async fn test_slow_response_times_out_as_transport() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({}))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        // A request ceiling far below the response delay: the call must
        // resolve with a transport error, not sit suspended.
        let client = ApiClient::with_timeouts(
            &server.uri(),
            Vec::new(),
            Duration::from_millis(200),
            Duration::from_secs(1),
        )
        .unwrap();

        let err = client.get::<serde_json::Value>("/slow").await.unwrap_err();
        match err {
            ApiError::Transport(e) => assert!(e.is_timeout()),
            other => panic!("expected Transport, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_close_consumes_client() {
        let client = ApiClient::new("https://api.example.com").unwrap();
        client.close();
    }
}
