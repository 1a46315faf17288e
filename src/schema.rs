//! Declarative field schemas for wire models and request DTOs.
//!
//! A schema lists the properties a model recognizes. The mapper uses it to
//! drop unknown payload keys and request DTOs use it to drive validation.

use crate::validators::{IntegerRules, StringRules};

/// Wire type of a declared field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Integer,
    Number,
    Text,
    Boolean,
    Date,
    /// Nested object projected through its own schema.
    Model(&'static ModelSchema),
    /// Array of nested objects, each projected through the schema.
    List(&'static ModelSchema),
}

/// Validation applied to a present field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRule {
    None,
    Integer(IntegerRules),
    Text(StringRules),
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Property name as it appears on the wire.
    pub name: &'static str,
    /// Label used in user-facing validation messages.
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub rule: FieldRule,
}

impl FieldSpec {
    pub const fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
            rule: FieldRule::None,
        }
    }

    pub const fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            rule: FieldRule::None,
        }
    }

    pub const fn with_rule(self, rule: FieldRule) -> Self {
        Self { rule, ..self }
    }
}

/// Named set of fields a model recognizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelSchema {
    /// Stable identifier used in mapping errors.
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl ModelSchema {
    pub const fn new(name: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self { name, fields }
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    pub fn declares(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|spec| spec.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NESTED: ModelSchema = ModelSchema::new(
        "NestedModel",
        &[FieldSpec::required("id", "Id", FieldKind::Integer)],
    );

    const PARENT: ModelSchema = ModelSchema::new(
        "ParentModel",
        &[
            FieldSpec::required("id", "Id", FieldKind::Integer)
                .with_rule(FieldRule::Integer(IntegerRules::at_least(1))),
            FieldSpec::optional("children", "Hijos", FieldKind::List(&NESTED)),
        ],
    );

    #[test]
    fn looks_up_declared_fields() {
        assert!(PARENT.declares("children"));
        assert!(!PARENT.declares("extra"));
        assert_eq!(
            PARENT.field("id").map(|spec| spec.rule),
            Some(FieldRule::Integer(IntegerRules::at_least(1)))
        );
        assert_eq!(PARENT.field_names().collect::<Vec<_>>(), ["id", "children"]);
    }
}
