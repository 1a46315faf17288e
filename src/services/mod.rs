//! Controllers turning provider payloads into domain models.
//!
//! Each service wraps exactly one provider call. Whatever goes wrong, the
//! caller only ever sees an [`ErrorModel`].

use crate::errors::{AppError, ErrorModel};

pub mod pool;
pub mod report;
pub mod survey;

pub type ServiceResult<T> = Result<T, ErrorModel>;

/// Logs a failed operation and collapses the error for the UI.
fn normalize(operation: &str, err: AppError) -> ErrorModel {
    log::error!("Failed to {operation}: {err}");
    ErrorModel::from(err)
}
