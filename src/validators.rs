//! Primitive field validators used by request DTO schemas.
//!
//! Every validator receives the raw JSON value, the machine field name, the
//! label shown to the user and its rule set, and returns the coerced value.
//! Messages are in Spanish because they are rendered next to form inputs.

use chrono::{DateTime, NaiveDate};
use serde_json::Value;
use validator::{ValidateLength, ValidateRange};

use crate::errors::ValidationError;

/// Wire format for dates sent to and received from the API.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Bounds applied by [`validate_integer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerRules {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl IntegerRules {
    pub const ANY: Self = Self {
        min: None,
        max: None,
    };

    pub const fn at_least(min: i64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub const fn between(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }
}

/// Constraints applied by [`validate_required_string`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringRules {
    pub max_length: Option<u64>,
}

impl StringRules {
    pub const ANY: Self = Self { max_length: None };

    pub const fn max_length(max: u64) -> Self {
        Self {
            max_length: Some(max),
        }
    }
}

fn integer_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Null or whitespace-only text, the values a required field rejects.
pub(crate) fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        _ => false,
    }
}

/// Validates an integer field, accepting numeric strings coming from forms.
pub fn validate_integer(
    value: &Value,
    field: &str,
    label: &str,
    rules: IntegerRules,
) -> Result<i64, ValidationError> {
    if is_blank(value) {
        return Err(ValidationError::required(field, label));
    }

    let number = integer_value(value).ok_or_else(|| {
        ValidationError::new(field, format!("El campo {label} debe ser un número entero"))
    })?;

    if number.validate_range(rules.min, rules.max, None, None) {
        return Ok(number);
    }

    let message = match (rules.min, rules.max) {
        (Some(min), Some(max)) => format!("El campo {label} debe estar entre {min} y {max}"),
        (Some(min), None) => format!("El campo {label} debe ser mayor o igual a {min}"),
        (None, Some(max)) => format!("El campo {label} debe ser menor o igual a {max}"),
        (None, None) => format!("El campo {label} no es válido"),
    };
    Err(ValidationError::new(field, message))
}

/// Validates a mandatory text field and returns it trimmed.
pub fn validate_required_string(
    value: &Value,
    field: &str,
    label: &str,
    rules: StringRules,
) -> Result<String, ValidationError> {
    if is_blank(value) {
        return Err(ValidationError::required(field, label));
    }

    let Value::String(text) = value else {
        return Err(ValidationError::new(
            field,
            format!("El campo {label} debe ser un texto"),
        ));
    };

    let trimmed = text.trim();
    if let Some(max) = rules.max_length {
        if !trimmed.validate_length(None, Some(max), None) {
            return Err(ValidationError::new(
                field,
                format!("El campo {label} no puede superar los {max} caracteres"),
            ));
        }
    }

    Ok(trimmed.to_string())
}

/// Validates a date given either as `YYYY-MM-DD` or as an RFC 3339 timestamp.
pub fn validate_date_string(
    value: &Value,
    field: &str,
    label: &str,
) -> Result<NaiveDate, ValidationError> {
    if is_blank(value) {
        return Err(ValidationError::required(field, label));
    }

    let invalid = || {
        ValidationError::new(
            field,
            format!("El campo {label} debe ser una fecha válida (AAAA-MM-DD)"),
        )
    };

    let Value::String(text) = value else {
        return Err(invalid());
    };

    let text = text.trim();
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|datetime| datetime.date_naive())
        })
        .ok_or_else(invalid)
}
