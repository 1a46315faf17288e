//! Parameters of the survey report and result maintenance endpoints.

use chrono::NaiveDate;

use crate::domain::types::{PoolId, QuestionId, ResultId};
use crate::errors::AppError;
use crate::forms::{ensure_date_range, format_date, id_field};
use crate::schema::{FieldKind, FieldRule, FieldSpec, ModelSchema};
use crate::validators::IntegerRules;

pub const SURVEY_REPORT_PARAMS_SCHEMA: ModelSchema = ModelSchema::new(
    "SurveyReportParamsDtoModel",
    &[
        FieldSpec::required("from", "Desde", FieldKind::Date).with_rule(FieldRule::Date),
        FieldSpec::required("to", "Hasta", FieldKind::Date).with_rule(FieldRule::Date),
        FieldSpec::optional("poolId", "Sede", FieldKind::Integer)
            .with_rule(FieldRule::Integer(IntegerRules::at_least(1))),
        FieldSpec::optional("questionId", "Pregunta", FieldKind::Integer)
            .with_rule(FieldRule::Integer(IntegerRules::at_least(1))),
    ],
);

pub const RESULT_DELETE_PARAMS_SCHEMA: ModelSchema = ModelSchema::new(
    "ResultDeleteParamsDtoModel",
    &[FieldSpec::required("resultId", "Resultado", FieldKind::Integer)
        .with_rule(FieldRule::Integer(IntegerRules::at_least(1)))],
);

request_dto!(
    SurveyReportParamsDto,
    SURVEY_REPORT_PARAMS_SCHEMA,
    "Raw filter payload of the survey report."
);

request_dto!(
    ResultDeleteParamsDto,
    RESULT_DELETE_PARAMS_SCHEMA,
    "Raw payload identifying the survey result to delete."
);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurveyReportParams {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub pool_id: Option<PoolId>,
    pub question_id: Option<QuestionId>,
}

impl SurveyReportParams {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("from", format_date(self.from)), ("to", format_date(self.to))];
        if let Some(pool_id) = self.pool_id {
            pairs.push(("poolId", pool_id.to_string()));
        }
        if let Some(question_id) = self.question_id {
            pairs.push(("questionId", question_id.to_string()));
        }
        pairs
    }
}

impl TryFrom<&SurveyReportParamsDto> for SurveyReportParams {
    type Error = AppError;

    fn try_from(dto: &SurveyReportParamsDto) -> Result<Self, Self::Error> {
        dto.validate(None)?;
        let record = dto.record();

        let from = record.require("from", record.date("from")?)?;
        let to = record.require("to", record.date("to")?)?;
        ensure_date_range(from, to, "to")?;

        Ok(Self {
            from,
            to,
            pool_id: id_field(record, "poolId", PoolId::new)?,
            question_id: id_field(record, "questionId", QuestionId::new)?,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResultDeleteParams {
    pub result_id: ResultId,
}

impl TryFrom<&ResultDeleteParamsDto> for ResultDeleteParams {
    type Error = AppError;

    fn try_from(dto: &ResultDeleteParamsDto) -> Result<Self, Self::Error> {
        dto.validate(None)?;
        let record = dto.record();

        Ok(Self {
            result_id: record.require("resultId", id_field(record, "resultId", ResultId::new)?)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::errors::{MappingError, ValidationError};

    #[test]
    fn result_delete_requires_result_id() {
        let dto = ResultDeleteParamsDto::from_payload(&json!({})).unwrap();

        assert_eq!(
            dto.validate(None),
            Err(AppError::Validation(ValidationError::new(
                "resultId",
                "El campo Resultado es obligatorio"
            )))
        );
    }

    #[test]
    fn result_delete_validation_leaves_dto_unchanged() {
        let dto = ResultDeleteParamsDto::from_payload(&json!({ "resultId": 1 })).unwrap();
        let before = dto.clone();

        assert_eq!(dto.validate(None), Ok(()));
        assert_eq!(dto, before);
        assert_eq!(
            ResultDeleteParams::try_from(&dto).map(|params| params.result_id.get()),
            Ok(1)
        );
    }

    #[test]
    fn validating_undeclared_property_is_a_mapping_error() {
        let dto = ResultDeleteParamsDto::from_payload(&json!({ "resultId": 1 })).unwrap();

        assert_eq!(
            dto.validate(Some("surveyId")),
            Err(AppError::Mapping(MappingError::UnknownProperty {
                schema: "ResultDeleteParamsDtoModel",
                property: "surveyId".to_string(),
            }))
        );
    }

    #[test]
    fn report_params_include_optional_filters_only_when_set() {
        let dto = SurveyReportParamsDto::from_payload(&json!({
            "from": "2024-01-01",
            "to": "2024-06-30",
            "questionId": "12",
            "format": "xlsx"
        }))
        .unwrap();

        let params = SurveyReportParams::try_from(&dto).unwrap();

        assert_eq!(
            params.query_pairs(),
            [
                ("from", "2024-01-01".to_string()),
                ("to", "2024-06-30".to_string()),
                ("questionId", "12".to_string())
            ]
        );
    }
}
