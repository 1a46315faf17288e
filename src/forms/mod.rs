//! Request parameter DTOs validated before a request is issued.
//!
//! Each DTO keeps the caller-supplied payload projected through its schema so
//! that individual fields can be validated as a form is filled in, and
//! converts into a typed params struct once the whole payload is valid.

use crate::domain::types::TypeConstraintError;
use crate::errors::{AppError, ValidationError};
use crate::mapper::ModelRecord;

/// Generates the schema-backed wrapper shared by every request DTO.
macro_rules! request_dto {
    ($name:ident, $schema:path, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name($crate::mapper::ModelRecord);

        impl $name {
            pub const SCHEMA: &'static $crate::schema::ModelSchema = &$schema;

            /// Keeps the declared properties of a caller-supplied payload.
            pub fn from_payload(
                payload: &serde_json::Value,
            ) -> Result<Self, $crate::errors::MappingError> {
                $crate::mapper::project(payload, Self::SCHEMA).map(Self)
            }

            /// Validates one property, or every declared property when `None`.
            pub fn validate(&self, property: Option<&str>) -> Result<(), $crate::errors::AppError> {
                self.0.validate(property)
            }

            pub fn record(&self) -> &$crate::mapper::ModelRecord {
                &self.0
            }
        }
    };
}

pub mod attendance;
pub mod page;
pub mod quota;
pub mod sale;
pub mod survey;

/// Reads an identifier property and wraps it in its newtype.
fn id_field<T, F>(record: &ModelRecord, property: &str, make: F) -> Result<Option<T>, AppError>
where
    F: FnOnce(i64) -> Result<T, TypeConstraintError>,
{
    record
        .integer(property)?
        .map(|raw| make(raw).map_err(|err| ValidationError::new(property, err.to_string()).into()))
        .transpose()
}

/// Rejects ranges whose end precedes their start.
fn ensure_date_range(
    start: chrono::NaiveDate,
    end: chrono::NaiveDate,
    end_field: &str,
) -> Result<(), AppError> {
    if end < start {
        return Err(ValidationError::new(
            end_field,
            "La fecha final debe ser igual o posterior a la fecha inicial",
        )
        .into());
    }
    Ok(())
}

fn format_date(date: chrono::NaiveDate) -> String {
    date.format(crate::validators::DATE_FORMAT).to_string()
}
