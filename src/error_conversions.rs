//! Conversions between the layered error types.
//!
//! The domain layer stays free of controller concerns, so the glue that
//! collapses failures into the UI-facing [`ErrorModel`] lives here.

use crate::errors::{AppError, ErrorBody, ErrorModel};

impl From<ErrorBody> for ErrorModel {
    fn from(val: ErrorBody) -> Self {
        ErrorModel::new(val.user_message, Some(val.error_code))
    }
}

/// Backend failures keep their message and code, anything else becomes the fallback.
impl From<AppError> for ErrorModel {
    fn from(val: AppError) -> Self {
        match val {
            AppError::Backend(body) => body.into(),
            _ => ErrorModel::fallback(),
        }
    }
}
