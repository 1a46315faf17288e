//! Strongly-typed value objects used by domain entities and request params.
//!
//! Identifiers coming back from the API are trusted as-is; the constructors
//! here are used when a caller-supplied value has to be checked before it is
//! sent to the backend.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(i64);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i64` backing this identifier.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(PoolId, "Unique identifier for a pool (\"sede\").");
id_newtype!(TrainerId, "Unique identifier for a trainer.");
id_newtype!(SurveyId, "Unique identifier for a survey.");
id_newtype!(QuestionId, "Unique identifier for a survey question.");
id_newtype!(ResultId, "Unique identifier for a survey result.");
id_newtype!(SaleId, "Unique identifier for a sale.");
id_newtype!(QuotaId, "Unique identifier for a scheduling quota.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_reject_non_positive_values() {
        assert_eq!(PoolId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(ResultId::try_from(-4), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(QuestionId::new(7).map(QuestionId::get), Ok(7));
    }

    #[test]
    fn ids_serialize_as_plain_numbers() {
        let id = PoolId::new(12).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "12");
        let parsed: PoolId = serde_json::from_str("12").unwrap();
        assert_eq!(parsed, id);
    }
}
