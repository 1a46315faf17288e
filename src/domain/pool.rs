use serde::{Deserialize, Serialize};

use crate::domain::types::PoolId;
use crate::mapper::Model;
use crate::schema::{FieldKind, FieldSpec, ModelSchema};

pub const POOL_SCHEMA: ModelSchema = ModelSchema::new(
    "PoolModel",
    &[
        FieldSpec::required("poolId", "Sede", FieldKind::Integer),
        FieldSpec::required("name", "Nombre", FieldKind::Text),
        FieldSpec::required("eiSerie", "Serie", FieldKind::Text),
        FieldSpec::optional("description", "Descripción", FieldKind::Text),
        FieldSpec::optional("address", "Dirección", FieldKind::Text),
    ],
);

/// A pool location ("sede") operated by the business.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    pub pool_id: PoolId,
    pub name: String,
    pub ei_serie: String,
    pub description: Option<String>,
    pub address: Option<String>,
}

impl Model for Pool {
    const SCHEMA: &'static ModelSchema = &POOL_SCHEMA;
}
