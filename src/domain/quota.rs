use serde::{Deserialize, Serialize};

use crate::domain::types::{PoolId, QuotaId, TrainerId};
use crate::mapper::Model;
use crate::schema::{FieldKind, FieldSpec, ModelSchema};

pub const QUOTA_SCHEMA: ModelSchema = ModelSchema::new(
    "QuotaModel",
    &[
        FieldSpec::required("quotaId", "Cupo", FieldKind::Integer),
        FieldSpec::required("poolId", "Sede", FieldKind::Integer),
        FieldSpec::required("name", "Nombre", FieldKind::Text),
        FieldSpec::required("capacity", "Capacidad", FieldKind::Integer),
        FieldSpec::optional("occupied", "Ocupados", FieldKind::Integer),
        FieldSpec::optional("weekday", "Día", FieldKind::Integer),
        FieldSpec::optional("startTime", "Hora de inicio", FieldKind::Text),
        FieldSpec::optional("endTime", "Hora de fin", FieldKind::Text),
        FieldSpec::optional("trainerId", "Entrenador", FieldKind::Integer),
    ],
);

/// A scheduled class slot with a limited number of places.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Quota {
    pub quota_id: QuotaId,
    pub pool_id: PoolId,
    pub name: String,
    pub capacity: i64,
    pub occupied: Option<i64>,
    /// ISO weekday, 1 = Monday.
    pub weekday: Option<i64>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub trainer_id: Option<TrainerId>,
}

impl Quota {
    /// Places still free; never negative.
    pub fn available(&self) -> i64 {
        (self.capacity - self.occupied.unwrap_or(0)).max(0)
    }
}

impl Model for Quota {
    const SCHEMA: &'static ModelSchema = &QUOTA_SCHEMA;
}
