//! Error taxonomy shared by the data-access layer and the pages.
//!
//! Transport failures, non-2xx responses and undecodable bodies all become an
//! [`ApiError`]; client-side form checks produce a [`ValidationError`] before
//! any request is sent. Neither is ever fatal: pages render the message and the
//! user retries.

use serde::Deserialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("Error de red: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx HTTP status.
    #[error("Error {status}: {status_text}")]
    Status {
        status: u16,
        status_text: String,
        message: Option<String>,
    },

    /// HTTP succeeded but the envelope reports a failure.
    #[error("Error {status}: {message}")]
    Envelope { status: u16, message: String },

    /// The body did not match the expected shape.
    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),
}

/// Error bodies the backend returns alongside a non-2xx status.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Builds a status error, pulling `message` out of a JSON error body when there is one.
    pub fn from_status(status: u16, status_text: impl Into<String>, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        Self::Status {
            status,
            status_text: status_text.into(),
            message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::Envelope { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            Self::Envelope { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// Text to show the user: the server's own message when it sent one,
    /// otherwise the per-operation fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

/// Client-side validation failures. The `Display` text is shown verbatim in the form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Todos los campos son obligatorios")]
    MissingFields,

    #[error("Por favor selecciona una materia y un alumno válidos")]
    InvalidReference,

    #[error("El valor debe ser un número")]
    InvalidValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_prefers_server_message() {
        let err = ApiError::from_status(
            400,
            "Bad Request",
            r#"{"status":400,"message":"El código ya existe","data":null}"#,
        );
        assert_eq!(err.user_message("Error al crear la materia"), "El código ya existe");
        assert_eq!(err.to_string(), "Error 400: Bad Request");
    }

    #[test]
    fn status_error_without_body_uses_fallback() {
        let err = ApiError::from_status(500, "Internal Server Error", "<html>oops</html>");
        assert_eq!(err.server_message(), None);
        assert_eq!(err.user_message("Error al crear la materia"), "Error al crear la materia");
    }

    #[test]
    fn not_found_is_detected_from_status() {
        assert!(ApiError::from_status(404, "Not Found", "").is_not_found());
        assert!(!ApiError::Transport("offline".into()).is_not_found());
    }
}
