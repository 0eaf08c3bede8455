//! HTTP API client with bearer-token support.
//!
//! Every request goes to a fixed API base. JSON requests carry
//! `Content-Type: application/json`; when a token is set, every request
//! (multipart included) carries `Authorization: Bearer <token>`. Non-success
//! statuses become [`ApiError::Http`] with the body's `message` field.
//!
//! There is no caching, retrying or deduplication: each call is one request
//! and a failure surfaces immediately.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use vitrine_shared::ApiError;

use crate::config::ClientConfig;

/// HTTP client for the listing backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new anonymous API client
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: String::new(),
            token: None,
        }
        .with_base_url(config.api_base.clone())
    }

    /// Set the base URL for API requests
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// A copy of this client that authenticates with `token`.
    ///
    /// The underlying connection pool is shared.
    pub fn with_token(&self, token: Option<String>) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            token,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.base_url)
    }

    fn authorize(&self, rb: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => rb.header(AUTHORIZATION, format!("Bearer {token}")),
            None => rb,
        }
    }

    fn json_request(&self, rb: RequestBuilder) -> RequestBuilder {
        self.authorize(rb).header(CONTENT_TYPE, "application/json")
    }

    /// Make a GET request
    pub async fn get_json<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        let rb = self.json_request(self.client.get(self.url(path)));
        send(rb, None).await
    }

    /// Make a GET request with query parameters
    pub async fn get_query<TRes: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<TRes, ApiError> {
        let rb = self.json_request(self.client.get(self.url(path)).query(query));
        send(rb, None).await
    }

    /// Make a POST request with JSON body
    pub async fn post_json<TReq: Serialize, TRes: DeserializeOwned>(
        &self,
        path: &str,
        body: &TReq,
    ) -> Result<TRes, ApiError> {
        let body_bytes =
            serde_json::to_vec(body).map_err(|e| ApiError::Deserialize(e.to_string()))?;
        let rb = self.json_request(self.client.post(self.url(path)).body(body_bytes));
        send(rb, None).await
    }

    /// Make a POST request without a body
    pub async fn post_empty<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        let rb = self.json_request(self.client.post(self.url(path)));
        send(rb, None).await
    }

    /// Make a DELETE request
    pub async fn delete_json<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        let rb = self.json_request(self.client.delete(self.url(path)));
        send(rb, None).await
    }

    /// Make a multipart POST request. Only the auth header is added; reqwest
    /// sets the multipart content type and boundary.
    pub async fn post_multipart<TRes: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
        error_fallback: &str,
    ) -> Result<TRes, ApiError> {
        let rb = self.authorize(self.client.post(self.url(path)).multipart(form));
        send(rb, Some(error_fallback)).await
    }
}

async fn send<TRes: DeserializeOwned>(
    rb: RequestBuilder,
    error_fallback: Option<&str>,
) -> Result<TRes, ApiError> {
    let resp = rb.send().await.map_err(|e| ApiError::Network(e.to_string()))?;

    let status = resp.status().as_u16();
    let is_success = resp.status().is_success();
    let text = resp
        .text()
        .await
        .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

    if !is_success {
        return Err(match error_fallback {
            Some(fallback) => ApiError::from_response_or(status, &text, fallback),
            None => ApiError::from_response(status, &text),
        });
    }

    let text = if text.trim().is_empty() { "null" } else { text.as_str() };
    serde_json::from_str(text).map_err(|e| ApiError::Deserialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Ack {
        success: bool,
    }

    fn client_for(server: &mockito::Server) -> ApiClient {
        ApiClient::new(&ClientConfig::default()).with_base_url(server.url())
    }

    #[tokio::test]
    async fn sends_json_content_type_and_bearer_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/auth/me")
            .match_header("content-type", "application/json")
            .match_header("authorization", "Bearer tok-123")
            .with_body(r#"{"success":true}"#)
            .create_async()
            .await;

        let client = client_for(&server).with_token(Some("tok-123".into()));
        let ack: Ack = client.get_json("/auth/me").await.unwrap();
        assert!(ack.success);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn anonymous_requests_have_no_authorization_header() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/cidades")
            .match_header("authorization", Matcher::Missing)
            .with_body("[]")
            .create_async()
            .await;

        let cities: Vec<serde_json::Value> = client_for(&server).get_json("cidades").await.unwrap();
        assert!(cities.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn error_status_uses_body_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/auth/login")
            .with_status(403)
            .with_body(r#"{"code":"invalid","message":"Senha incorreta"}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .post_json::<_, Ack>("/auth/login", &serde_json::json!({"email": "a@b.c"}))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 403,
                message: "Senha incorreta".into()
            }
        );
    }

    #[tokio::test]
    async fn error_status_without_message_falls_back_to_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/planos")
            .with_status(500)
            .with_body("{}")
            .create_async()
            .await;

        let err = client_for(&server)
            .get_json::<Vec<serde_json::Value>>("/planos")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Erro 500");
    }

    #[tokio::test]
    async fn empty_success_body_decodes_as_null() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("DELETE", "/upload/4")
            .with_status(200)
            .create_async()
            .await;

        let value: Option<Ack> = client_for(&server).delete_json("/upload/4").await.unwrap();
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_network_error() {
        let client = ApiClient::new(&ClientConfig::default()).with_base_url("http://127.0.0.1:9");
        let err = client.get_json::<Ack>("/auth/me").await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
