use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Message shown when the backend gives nothing usable.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Categorization of client-side failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    /// Form input rejected before or by the backend (400/422).
    Validation,
    /// The request never produced an HTTP response.
    Network,
    /// 401: the session is no longer accepted.
    Unauthorized,
    Forbidden,
    NotFound,
    /// Any other non-2xx answer.
    Server,
    /// A 2xx answer whose body could not be parsed.
    Decode,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Validation => write!(f, "Validation"),
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::Server => write!(f, "Server"),
            AppErrorKind::Decode => write!(f, "Decode"),
        }
    }
}

/// Structured error returned by every request and consumed uniformly by the views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

/// Error body shape used by the backend: `{"message": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default, alias = "error")]
    message: Option<String>,
}

impl AppError {
    fn with_kind(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::Validation,
            message: message.into(),
            field_errors,
        }
    }

    /// Validation failure on a single field.
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut field_errors = HashMap::new();
        field_errors.insert(field.to_string(), message.clone());
        Self::validation(message, field_errors)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Network, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Forbidden, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::NotFound, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Server, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Decode, message)
    }

    /// Classify a non-2xx HTTP answer.
    ///
    /// The message is taken from the body's `message` field when present,
    /// otherwise a generic fallback is used.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = Self::message_from_body(body);
        let kind = match status {
            400 | 422 => AppErrorKind::Validation,
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            _ => AppErrorKind::Server,
        };
        Self::with_kind(kind, message)
    }

    /// Extract the `message` field of a JSON error body, falling back to the
    /// generic message.
    pub fn message_from_body(body: &str) -> String {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
    }

    /// True when the failure means the stored session must be dropped.
    pub fn is_auth_failure(&self) -> bool {
        self.kind == AppErrorKind::Unauthorized
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Please fix the highlighted fields", field_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_status_takes_message_field() {
        let err = AppError::from_status(401, r#"{"message":"Invalid email or password"}"#);
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert_eq!(err.message, "Invalid email or password");
        assert!(err.is_auth_failure());
    }

    #[test]
    fn from_status_falls_back_for_unparseable_body() {
        let err = AppError::from_status(500, "<html>Bad Gateway</html>");
        assert_eq!(err.kind, AppErrorKind::Server);
        assert_eq!(err.message, GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn from_status_falls_back_for_blank_message() {
        let err = AppError::from_status(400, r#"{"message":"   "}"#);
        assert_eq!(err.kind, AppErrorKind::Validation);
        assert_eq!(err.message, GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn from_status_accepts_error_alias() {
        let err = AppError::from_status(409, r#"{"error":"Email already registered"}"#);
        assert_eq!(err.kind, AppErrorKind::Server);
        assert_eq!(err.message, "Email already registered");
    }

    #[test]
    fn status_classification() {
        assert_eq!(AppError::from_status(422, "").kind, AppErrorKind::Validation);
        assert_eq!(AppError::from_status(403, "").kind, AppErrorKind::Forbidden);
        assert_eq!(AppError::from_status(404, "").kind, AppErrorKind::NotFound);
        assert_eq!(AppError::from_status(502, "").kind, AppErrorKind::Server);
        assert!(!AppError::from_status(403, "").is_auth_failure());
    }

    #[test]
    fn field_error_lookup() {
        let err = AppError::field("email", "Email is required");
        assert_eq!(err.kind, AppErrorKind::Validation);
        assert_eq!(err.field_error("email"), Some("Email is required"));
        assert_eq!(err.field_error("password"), None);
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::network("connection refused");
        assert_eq!(format!("{}", err), "Network: connection refused");
    }
}
