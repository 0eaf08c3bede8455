//! Shared error types and backend error-body parsing.

use serde::Deserialize;

/// Message shown whenever the backend could not be reached at all.
pub const CONNECTION_ERROR_MESSAGE: &str = "Erro de conexão. Tente novamente.";

/// Error envelope returned by the listing backend.
///
/// The backend is a WordPress REST plugin, so failures come back as
/// `{ "code": "...", "message": "...", "data": { "status": 401 } }`. Only
/// `message` is guaranteed to be user-facing.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Extract the user-facing message from an error response body.
pub fn response_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<ErrorBody>(body).ok()?;
    parsed
        .message
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}

/// API error type for client-side use.
///
/// `Display` on the `Http` variant is the normalized message itself, so views
/// can show `err.to_string()` without further unwrapping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

impl ApiError {
    /// Translate a non-success response into an error, preferring the body's
    /// `message` field and falling back to `Erro <status>`.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Http {
            status,
            message: response_message(body).unwrap_or_else(|| format!("Erro {status}")),
        }
    }

    /// Same as [`ApiError::from_response`] with a caller-chosen fallback.
    pub fn from_response_or(status: u16, body: &str, fallback: &str) -> Self {
        Self::Http {
            status,
            message: response_message(body).unwrap_or_else(|| fallback.to_string()),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// Message suitable for an inline error banner.
    ///
    /// Backend rejections keep their own wording; transport and decoding
    /// failures collapse into the generic connection message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { message, .. } => message.clone(),
            ApiError::Network(_) | ApiError::Deserialize(_) => {
                CONNECTION_ERROR_MESSAGE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_prefers_body_message() {
        let err = ApiError::from_response(
            403,
            r#"{"code":"rest_forbidden","message":"Credenciais inválidas","data":{"status":403}}"#,
        );
        assert_eq!(err.to_string(), "Credenciais inválidas");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn http_error_falls_back_to_status() {
        let err = ApiError::from_response(502, "<html>bad gateway</html>");
        assert_eq!(err.to_string(), "Erro 502");

        let blank = ApiError::from_response(500, r#"{"message":"   "}"#);
        assert_eq!(blank.to_string(), "Erro 500");
    }

    #[test]
    fn custom_fallback_is_used_when_body_has_no_message() {
        let err = ApiError::from_response_or(413, "{}", "Erro no upload");
        assert_eq!(err.to_string(), "Erro no upload");
    }

    #[test]
    fn network_errors_render_generic_message() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.user_message(), CONNECTION_ERROR_MESSAGE);
        assert_eq!(err.status(), None);
    }
}
