//! Errors raised by the backend client

use serde::Deserialize;

/// Error body returned by the backend on non-2xx responses
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(default)]
    pub code: u16,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Backend client error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppwriteError {
    #[error("Backend is not configured: {0} is missing")]
    NotConfigured(&'static str),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("Request failed: {0}")]
    Network(String),

    #[error("Backend error {code} ({kind}): {message}")]
    Api {
        code: u16,
        kind: String,
        message: String,
    },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Not available during server rendering")]
    Unavailable,
}

impl AppwriteError {
    /// Build an API error from a status code and the (possibly unparsable) body
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => AppwriteError::Api {
                code: if parsed.code == 0 { status } else { parsed.code },
                kind: parsed.kind,
                message: parsed.message,
            },
            Err(_) => AppwriteError::Api {
                code: status,
                kind: String::new(),
                message: body.to_string(),
            },
        }
    }

    /// True for 401 responses, which the backend uses for "no session"
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppwriteError::Api { code: 401, .. })
    }
}

impl From<serde_json::Error> for AppwriteError {
    fn from(err: serde_json::Error) -> Self {
        AppwriteError::Decode(err.to_string())
    }
}

impl From<url::ParseError> for AppwriteError {
    fn from(err: url::ParseError) -> Self {
        AppwriteError::InvalidUrl(err.to_string())
    }
}

impl From<gloo_net::Error> for AppwriteError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => AppwriteError::Decode(e.to_string()),
            other => AppwriteError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_parses_backend_body() {
        let body = r#"{"message":"Invalid credentials","code":401,"type":"user_invalid_credentials","version":"1.4.13"}"#;
        let err = AppwriteError::from_response(401, body);

        assert_eq!(
            err,
            AppwriteError::Api {
                code: 401,
                kind: "user_invalid_credentials".to_string(),
                message: "Invalid credentials".to_string(),
            }
        );
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_from_response_keeps_raw_body_when_not_json() {
        let err = AppwriteError::from_response(502, "Bad Gateway");

        assert_eq!(
            err,
            AppwriteError::Api {
                code: 502,
                kind: String::new(),
                message: "Bad Gateway".to_string(),
            }
        );
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_from_response_falls_back_to_status_code() {
        let err = AppwriteError::from_response(409, r#"{"message":"exists"}"#);
        assert!(matches!(err, AppwriteError::Api { code: 409, .. }));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            AppwriteError::NotConfigured("APPWRITE_URL").to_string(),
            "Backend is not configured: APPWRITE_URL is missing"
        );
        assert_eq!(
            AppwriteError::Api {
                code: 409,
                kind: "user_already_exists".to_string(),
                message: "A user with the same id, email, or phone already exists".to_string(),
            }
            .to_string(),
            "Backend error 409 (user_already_exists): A user with the same id, email, or phone already exists"
        );
    }
}
