use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of errors raised while talking to the asset API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Unauthorized,
    Forbidden,
    /// The request never produced an HTTP response (offline, DNS, CORS).
    Network,
    /// A response arrived but its body did not match the expected shape.
    Decode,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::Decode => write!(f, "Decode"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured error shared by the API client and the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

/// Error body shape returned by the asset API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiErrorBody {
    #[serde(default, alias = "error")]
    message: Option<String>,
    #[serde(default)]
    field_errors: HashMap<String, String>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::BadRequest, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Forbidden, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Network, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Decode, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InternalError, message)
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == AppErrorKind::NotFound
    }

    /// Build an error from a non-success HTTP status and its response body.
    ///
    /// The body is inspected for a JSON `{ "message": ..., "fieldErrors": ... }`
    /// object; otherwise a generic message for the status is used.
    pub fn from_status(status: u16, body: &str) -> Self {
        let kind = match status {
            400 => AppErrorKind::BadRequest,
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            422 => AppErrorKind::ValidationError,
            _ => AppErrorKind::InternalError,
        };

        let parsed = serde_json::from_str::<ApiErrorBody>(body).ok();
        let field_errors = parsed
            .as_ref()
            .map(|b| b.field_errors.clone())
            .unwrap_or_default();
        let message = parsed
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| default_message(kind, status));

        Self {
            kind,
            message,
            field_errors,
        }
    }

    /// Parse an AppError from a string that embeds its JSON form.
    pub fn from_error_string(error_message: &str) -> Option<Self> {
        if let Ok(err) = serde_json::from_str::<Self>(error_message) {
            return Some(err);
        }
        let start = error_message.find('{')?;
        let end = error_message.rfind('}')?;
        if end > start {
            serde_json::from_str(&error_message[start..=end]).ok()
        } else {
            None
        }
    }

    /// A message suitable for showing to the user.
    ///
    /// Transport and decode failures get a generic sentence; everything else
    /// surfaces the server-provided message.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::Network => {
                "Could not reach the asset service. Check your connection and try again."
                    .to_string()
            }
            AppErrorKind::Decode | AppErrorKind::InternalError => {
                "Something went wrong. Please try again.".to_string()
            }
            AppErrorKind::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
            _ => self.message.clone(),
        }
    }
}

fn default_message(kind: AppErrorKind, status: u16) -> String {
    match kind {
        AppErrorKind::NotFound => "Not found".to_string(),
        AppErrorKind::BadRequest => "Bad request".to_string(),
        AppErrorKind::ValidationError => "Validation failed".to_string(),
        AppErrorKind::Unauthorized => "Authentication required".to_string(),
        AppErrorKind::Forbidden => "Access denied".to_string(),
        _ => format!("Request failed with status {status}"),
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}
