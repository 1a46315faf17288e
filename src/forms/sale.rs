use chrono::NaiveDate;

use crate::domain::types::PoolId;
use crate::errors::AppError;
use crate::forms::{ensure_date_range, format_date, id_field};
use crate::schema::{FieldKind, FieldRule, FieldSpec, ModelSchema};
use crate::validators::IntegerRules;

pub const SALE_DETAIL_PARAMS_SCHEMA: ModelSchema = ModelSchema::new(
    "SaleDetailParamsDtoModel",
    &[
        FieldSpec::required("startDate", "Fecha inicial", FieldKind::Date).with_rule(FieldRule::Date),
        FieldSpec::required("endDate", "Fecha final", FieldKind::Date).with_rule(FieldRule::Date),
        FieldSpec::optional("poolId", "Sede", FieldKind::Integer)
            .with_rule(FieldRule::Integer(IntegerRules::at_least(1))),
    ],
);

request_dto!(
    SaleDetailParamsDto,
    SALE_DETAIL_PARAMS_SCHEMA,
    "Raw filter payload of the sales detail report."
);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaleDetailParams {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// All pools when absent.
    pub pool_id: Option<PoolId>,
}

impl SaleDetailParams {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("startDate", format_date(self.start_date)),
            ("endDate", format_date(self.end_date)),
        ];
        if let Some(pool_id) = self.pool_id {
            pairs.push(("poolId", pool_id.to_string()));
        }
        pairs
    }
}

impl TryFrom<&SaleDetailParamsDto> for SaleDetailParams {
    type Error = AppError;

    fn try_from(dto: &SaleDetailParamsDto) -> Result<Self, Self::Error> {
        dto.validate(None)?;
        let record = dto.record();

        let start_date = record.require("startDate", record.date("startDate")?)?;
        let end_date = record.require("endDate", record.date("endDate")?)?;
        ensure_date_range(start_date, end_date, "endDate")?;

        Ok(Self {
            start_date,
            end_date,
            pool_id: id_field(record, "poolId", PoolId::new)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn pool_filter_is_optional() {
        let dto = SaleDetailParamsDto::from_payload(&json!({
            "startDate": "2024-03-01",
            "endDate": "2024-03-31",
            "poolId": ""
        }))
        .unwrap();

        let params = SaleDetailParams::try_from(&dto).unwrap();

        assert_eq!(params.pool_id, None);
        assert_eq!(params.query_pairs().len(), 2);
    }
}
