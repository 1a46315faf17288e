use serde::{Deserialize, Serialize};

use crate::domain::types::{PoolId, TrainerId};
use crate::mapper::Model;
use crate::schema::{FieldKind, FieldSpec, ModelSchema};

pub const TRAINER_SCHEMA: ModelSchema = ModelSchema::new(
    "TrainerModel",
    &[
        FieldSpec::required("trainerId", "Entrenador", FieldKind::Integer),
        FieldSpec::required("name", "Nombre", FieldKind::Text),
        FieldSpec::optional("lastName", "Apellido", FieldKind::Text),
        FieldSpec::optional("email", "Correo", FieldKind::Text),
        FieldSpec::optional("phone", "Teléfono", FieldKind::Text),
        FieldSpec::optional("poolId", "Sede", FieldKind::Integer),
    ],
);

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Trainer {
    pub trainer_id: TrainerId,
    pub name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Pool the trainer is assigned to, if any.
    pub pool_id: Option<PoolId>,
}

impl Trainer {
    /// Display name combining first and last name.
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last_name) => format!("{} {}", self.name, last_name),
            None => self.name.clone(),
        }
    }
}

impl Model for Trainer {
    const SCHEMA: &'static ModelSchema = &TRAINER_SCHEMA;
}
