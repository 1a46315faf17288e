use crate::domain::types::PoolId;
use crate::errors::AppError;
use crate::forms::id_field;
use crate::schema::{FieldKind, FieldRule, FieldSpec, ModelSchema};
use crate::validators::IntegerRules;

pub const QUOTA_PARAMS_SCHEMA: ModelSchema = ModelSchema::new(
    "QuotaParamsDtoModel",
    &[FieldSpec::required("poolId", "Sede", FieldKind::Integer)
        .with_rule(FieldRule::Integer(IntegerRules::at_least(1)))],
);

request_dto!(
    QuotaParamsDto,
    QUOTA_PARAMS_SCHEMA,
    "Raw filter payload of the quota schedule."
);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuotaParams {
    pub pool_id: PoolId,
}

impl QuotaParams {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![("poolId", self.pool_id.to_string())]
    }
}

impl TryFrom<&QuotaParamsDto> for QuotaParams {
    type Error = AppError;

    fn try_from(dto: &QuotaParamsDto) -> Result<Self, Self::Error> {
        dto.validate(None)?;
        let record = dto.record();

        Ok(Self {
            pool_id: record.require("poolId", id_field(record, "poolId", PoolId::new)?)?,
        })
    }
}
