use chrono::NaiveDate;

use crate::domain::types::PoolId;
use crate::errors::AppError;
use crate::forms::{ensure_date_range, format_date, id_field};
use crate::schema::{FieldKind, FieldRule, FieldSpec, ModelSchema};
use crate::validators::IntegerRules;

pub const ATTENDANCE_PARAMS_SCHEMA: ModelSchema = ModelSchema::new(
    "AttendanceParamsDtoModel",
    &[
        FieldSpec::required("startDate", "Fecha inicial", FieldKind::Date).with_rule(FieldRule::Date),
        FieldSpec::required("endDate", "Fecha final", FieldKind::Date).with_rule(FieldRule::Date),
        FieldSpec::required("poolId", "Sede", FieldKind::Integer)
            .with_rule(FieldRule::Integer(IntegerRules::at_least(1))),
    ],
);

request_dto!(
    AttendanceParamsDto,
    ATTENDANCE_PARAMS_SCHEMA,
    "Raw filter payload of the club attendance report."
);

/// Validated filter of the club attendance report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttendanceParams {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub pool_id: PoolId,
}

impl AttendanceParams {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("startDate", format_date(self.start_date)),
            ("endDate", format_date(self.end_date)),
            ("poolId", self.pool_id.to_string()),
        ]
    }
}

impl TryFrom<&AttendanceParamsDto> for AttendanceParams {
    type Error = AppError;

    fn try_from(dto: &AttendanceParamsDto) -> Result<Self, Self::Error> {
        dto.validate(None)?;
        let record = dto.record();

        let start_date = record.require("startDate", record.date("startDate")?)?;
        let end_date = record.require("endDate", record.date("endDate")?)?;
        ensure_date_range(start_date, end_date, "endDate")?;
        let pool_id = record.require("poolId", id_field(record, "poolId", PoolId::new)?)?;

        Ok(Self {
            start_date,
            end_date,
            pool_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn builds_query_for_valid_filter() {
        let dto = AttendanceParamsDto::from_payload(&json!({
            "startDate": "2024-01-01",
            "endDate": "2024-01-31T23:59:59Z",
            "poolId": 2
        }))
        .unwrap();

        let params = AttendanceParams::try_from(&dto).unwrap();

        assert_eq!(
            params.query_pairs(),
            [
                ("startDate", "2024-01-01".to_string()),
                ("endDate", "2024-01-31".to_string()),
                ("poolId", "2".to_string())
            ]
        );
    }

    #[test]
    fn rejects_inverted_range() {
        let dto = AttendanceParamsDto::from_payload(&json!({
            "startDate": "2024-02-01",
            "endDate": "2024-01-01",
            "poolId": 2
        }))
        .unwrap();

        let err = AttendanceParams::try_from(&dto).unwrap_err();

        assert!(matches!(err, AppError::Validation(ref e) if e.field == "endDate"));
    }

    #[test]
    fn validation_stops_at_first_declared_field() {
        let dto = AttendanceParamsDto::from_payload(&json!({ "poolId": 0 })).unwrap();

        let err = dto.validate(None).unwrap_err();

        assert!(matches!(err, AppError::Validation(ref e) if e.field == "startDate"));
    }
}
