//! Error taxonomy shared by mapping, validation, transport and controllers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message shown to the user when a failure has no backend-provided text.
pub const FALLBACK_MESSAGE: &str = "Ocurrió un error inesperado. Por favor intente de nuevo más tarde.";

/// Field-level validation failure with a user-facing (Spanish) message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    /// Machine name of the offending property.
    pub field: String,
    /// Human readable description of the violated constraint.
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Error for a required field that was absent, null or blank.
    pub fn required(field: &str, label: &str) -> Self {
        Self::new(field, format!("El campo {label} es obligatorio"))
    }
}

/// Failures raised while projecting a payload onto a model schema.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MappingError {
    #[error("{schema}: payload is not an object")]
    NotAnObject { schema: &'static str },

    #[error("{schema}: unknown property `{property}`")]
    UnknownProperty {
        schema: &'static str,
        property: String,
    },

    #[error("{schema}: {message}")]
    Decode {
        schema: &'static str,
        message: String,
    },
}

/// Transport failure classes reported by the API layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportErrorKind {
    /// Request could not be prepared (bad URL, bad header value, ...).
    CustomError,
    /// Network level failure, the request never produced a response.
    FetchError,
    /// Response body could not be decoded.
    ParsingError,
    /// The request exceeded the client timeout.
    TimeoutError,
}

impl TransportErrorKind {
    /// Stable numeric code surfaced in [`ErrorBody::error_code`].
    pub const fn code(self) -> i64 {
        match self {
            Self::CustomError => 50001,
            Self::FetchError => 50002,
            Self::ParsingError => 50003,
            Self::TimeoutError => 50004,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CustomError => "CUSTOM_ERROR",
            Self::FetchError => "FETCH_ERROR",
            Self::ParsingError => "PARSING_ERROR",
            Self::TimeoutError => "TIMEOUT_ERROR",
        }
    }
}

/// Structured error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[error("{user_message} (code {error_code})")]
pub struct ErrorBody {
    pub error_code: i64,
    pub user_message: String,
    #[serde(default)]
    pub developer_message: String,
    #[serde(default)]
    pub more_info: String,
}

impl ErrorBody {
    /// Builds the body reported for a classified transport failure.
    pub fn from_transport(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            error_code: kind.code(),
            user_message: message.into(),
            developer_message: String::new(),
            more_info: String::new(),
        }
    }

    /// Parses a response body, returning `None` when it is not a recognized error shape.
    pub fn parse(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok()
    }
}

/// Closed error type for every fallible operation of the crate.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("mapping error: {0}")]
    Mapping(#[from] MappingError),

    #[error("{}: {message}", .kind.as_str())]
    Transport {
        kind: TransportErrorKind,
        message: String,
    },

    #[error("backend error: {0}")]
    Backend(ErrorBody),

    #[error("unexpected error: {0}")]
    Unknown(String),
}

impl AppError {
    pub fn transport(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self::Transport {
            kind,
            message: message.into(),
        }
    }

    /// Collapses the error into the wire error body used by API slices.
    ///
    /// Backend bodies pass through unchanged; everything else is reported as
    /// one of the transport kinds.
    pub fn into_error_body(self) -> ErrorBody {
        match self {
            Self::Backend(body) => body,
            Self::Transport { kind, message } => ErrorBody::from_transport(kind, message),
            Self::Mapping(err) => {
                ErrorBody::from_transport(TransportErrorKind::ParsingError, err.to_string())
            }
            Self::Validation(err) => {
                ErrorBody::from_transport(TransportErrorKind::CustomError, err.message)
            }
            Self::Unknown(message) => {
                ErrorBody::from_transport(TransportErrorKind::CustomError, message)
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// The single error shape surfaced to the UI by controllers.
#[derive(Debug, Clone, Error, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[error("{user_message}")]
pub struct ErrorModel {
    pub user_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
}

impl ErrorModel {
    pub fn new(user_message: impl Into<String>, code: Option<i64>) -> Self {
        Self {
            user_message: user_message.into(),
            code,
        }
    }

    /// Generic error with the localized fallback message and no code.
    pub fn fallback() -> Self {
        Self::new(FALLBACK_MESSAGE, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_error_body_carries_code_and_raw_message() {
        let body = ErrorBody::from_transport(TransportErrorKind::TimeoutError, "took too long");

        assert_eq!(
            body,
            ErrorBody {
                error_code: 50004,
                user_message: "took too long".to_string(),
                developer_message: String::new(),
                more_info: String::new(),
            }
        );
    }

    #[test]
    fn transport_kinds_have_distinct_codes() {
        let codes = [
            TransportErrorKind::CustomError,
            TransportErrorKind::FetchError,
            TransportErrorKind::ParsingError,
            TransportErrorKind::TimeoutError,
        ]
        .map(TransportErrorKind::code);

        assert_eq!(codes, [50001, 50002, 50003, 50004]);
    }

    #[test]
    fn parse_accepts_backend_shape_with_missing_optional_parts() {
        let body = ErrorBody::parse(br#"{"errorCode":404,"userMessage":"Sede no encontrada"}"#)
            .expect("recognized body");

        assert_eq!(body.error_code, 404);
        assert_eq!(body.user_message, "Sede no encontrada");
        assert!(body.developer_message.is_empty());
    }

    #[test]
    fn parse_rejects_unrelated_json() {
        assert!(ErrorBody::parse(br#"{"message":"boom"}"#).is_none());
        assert!(ErrorBody::parse(b"<html>bad gateway</html>").is_none());
    }

    #[test]
    fn backend_error_passes_through_into_error_body() {
        let body = ErrorBody {
            error_code: 409,
            user_message: "Cupo lleno".to_string(),
            developer_message: "quota exhausted".to_string(),
            more_info: "https://docs.invalid/409".to_string(),
        };

        assert_eq!(AppError::Backend(body.clone()).into_error_body(), body);
    }

    #[test]
    fn serialized_error_model_omits_missing_code() {
        let json = serde_json::to_value(ErrorModel::fallback()).unwrap();

        assert_eq!(json, serde_json::json!({ "userMessage": FALLBACK_MESSAGE }));
    }
}
