//! Projection of raw JSON payloads onto declared model schemas.
//!
//! [`project`] keeps only the properties a schema declares (recursing into
//! nested models) and silently drops everything else, so new server fields
//! never break older clients. [`map_payload`] then decodes the projected
//! record into the typed model.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::errors::{AppError, MappingError, ValidationError};
use crate::schema::{FieldKind, FieldRule, FieldSpec, ModelSchema};
use crate::validators::{
    is_blank, validate_date_string, validate_integer, validate_required_string,
};

/// A typed record that can be built from a raw payload.
pub trait Model: DeserializeOwned {
    const SCHEMA: &'static ModelSchema;

    /// Projects `payload` through [`Model::SCHEMA`] and decodes the result.
    fn from_payload(payload: &Value) -> Result<Self, MappingError> {
        map_payload(payload)
    }
}

/// Payload restricted to the fields declared by a schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRecord {
    schema: &'static ModelSchema,
    fields: Map<String, Value>,
}

fn project_object(object: &Map<String, Value>, schema: &ModelSchema) -> Map<String, Value> {
    schema
        .fields
        .iter()
        .filter_map(|spec| {
            object
                .get(spec.name)
                .map(|value| (spec.name.to_string(), project_value(value, spec.kind)))
        })
        .collect()
}

fn project_value(value: &Value, kind: FieldKind) -> Value {
    match (kind, value) {
        (FieldKind::Model(schema), Value::Object(object)) => {
            Value::Object(project_object(object, schema))
        }
        (FieldKind::List(schema), Value::Array(items)) => Value::Array(
            items
                .iter()
                .map(|item| match item {
                    Value::Object(object) => Value::Object(project_object(object, schema)),
                    other => other.clone(),
                })
                .collect(),
        ),
        _ => value.clone(),
    }
}

/// Copies the declared fields of `payload` into a new record.
pub fn project(
    payload: &Value,
    schema: &'static ModelSchema,
) -> Result<ModelRecord, MappingError> {
    let object = payload.as_object().ok_or(MappingError::NotAnObject {
        schema: schema.name,
    })?;

    Ok(ModelRecord {
        schema,
        fields: project_object(object, schema),
    })
}

/// Projects `payload` and decodes it into `M`.
pub fn map_payload<M: Model>(payload: &Value) -> Result<M, MappingError> {
    project(payload, M::SCHEMA)?.decode()
}

impl ModelRecord {
    pub fn schema(&self) -> &'static ModelSchema {
        self.schema
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    /// Decodes the record into its typed model.
    pub fn decode<M: DeserializeOwned>(self) -> Result<M, MappingError> {
        let schema = self.schema.name;
        serde_json::from_value(self.into_value()).map_err(|err| MappingError::Decode {
            schema,
            message: err.to_string(),
        })
    }

    fn spec(&self, property: &str) -> Result<&'static FieldSpec, MappingError> {
        self.schema
            .field(property)
            .ok_or_else(|| MappingError::UnknownProperty {
                schema: self.schema.name,
                property: property.to_string(),
            })
    }

    /// Validates one declared property, or all of them when `property` is `None`.
    ///
    /// Validation stops at the first failing field. The record is never modified.
    pub fn validate(&self, property: Option<&str>) -> Result<(), AppError> {
        match property {
            Some(name) => {
                let spec = self.spec(name)?;
                self.validate_field(spec)?;
            }
            None => {
                for spec in self.schema.fields {
                    self.validate_field(spec)?;
                }
            }
        }
        Ok(())
    }

    fn validate_field(&self, spec: &FieldSpec) -> Result<(), ValidationError> {
        let value = match self.fields.get(spec.name) {
            Some(value) if !is_blank(value) => value,
            _ if spec.required => return Err(ValidationError::required(spec.name, spec.label)),
            _ => return Ok(()),
        };

        match spec.rule {
            FieldRule::None => Ok(()),
            FieldRule::Integer(rules) => {
                validate_integer(value, spec.name, spec.label, rules).map(drop)
            }
            FieldRule::Text(rules) => {
                validate_required_string(value, spec.name, spec.label, rules).map(drop)
            }
            FieldRule::Date => validate_date_string(value, spec.name, spec.label).map(drop),
        }
    }

    /// Coerced integer value of a declared property, `None` when absent.
    pub fn integer(&self, property: &str) -> Result<Option<i64>, AppError> {
        let spec = self.spec(property)?;
        let rules = match spec.rule {
            FieldRule::Integer(rules) => rules,
            _ => Default::default(),
        };
        self.present(spec)
            .map(|value| validate_integer(value, spec.name, spec.label, rules))
            .transpose()
            .map_err(AppError::from)
    }

    /// Coerced, trimmed text value of a declared property, `None` when absent.
    pub fn text(&self, property: &str) -> Result<Option<String>, AppError> {
        let spec = self.spec(property)?;
        let rules = match spec.rule {
            FieldRule::Text(rules) => rules,
            _ => Default::default(),
        };
        self.present(spec)
            .map(|value| validate_required_string(value, spec.name, spec.label, rules))
            .transpose()
            .map_err(AppError::from)
    }

    /// Coerced date value of a declared property, `None` when absent.
    pub fn date(&self, property: &str) -> Result<Option<NaiveDate>, AppError> {
        let spec = self.spec(property)?;
        self.present(spec)
            .map(|value| validate_date_string(value, spec.name, spec.label))
            .transpose()
            .map_err(AppError::from)
    }

    /// Turns an absent coerced value into the field's "required" error.
    pub fn require<T>(&self, property: &str, value: Option<T>) -> Result<T, AppError> {
        let spec = self.spec(property)?;
        value.ok_or_else(|| ValidationError::required(spec.name, spec.label).into())
    }

    fn present(&self, spec: &FieldSpec) -> Option<&Value> {
        self.fields.get(spec.name).filter(|value| !is_blank(value))
    }
}
