//! Satisfaction surveys answered at the pools and their aggregated report.

use serde::{Deserialize, Serialize};

use crate::domain::pool::{POOL_SCHEMA, Pool};
use crate::domain::types::{PoolId, QuestionId, ResultId, SurveyId};
use crate::mapper::Model;
use crate::schema::{FieldKind, FieldSpec, ModelSchema};

pub const SURVEY_SCHEMA: ModelSchema = ModelSchema::new(
    "SurveyModel",
    &[
        FieldSpec::required("surveyId", "Encuesta", FieldKind::Integer),
        FieldSpec::required("name", "Nombre", FieldKind::Text),
        FieldSpec::optional("description", "Descripción", FieldKind::Text),
        FieldSpec::optional("isActive", "Activa", FieldKind::Boolean),
    ],
);

pub const QUESTION_SCHEMA: ModelSchema = ModelSchema::new(
    "QuestionModel",
    &[
        FieldSpec::required("questionId", "Pregunta", FieldKind::Integer),
        FieldSpec::optional("surveyId", "Encuesta", FieldKind::Integer),
        FieldSpec::required("question", "Pregunta", FieldKind::Text),
        FieldSpec::optional("questionType", "Tipo de pregunta", FieldKind::Text),
        FieldSpec::optional("order", "Orden", FieldKind::Integer),
    ],
);

pub const RESULT_SCHEMA: ModelSchema = ModelSchema::new(
    "ResultModel",
    &[
        FieldSpec::required("resultId", "Resultado", FieldKind::Integer),
        FieldSpec::required("questionId", "Pregunta", FieldKind::Integer),
        FieldSpec::required("poolId", "Sede", FieldKind::Integer),
        FieldSpec::optional("answer", "Respuesta", FieldKind::Text),
        FieldSpec::optional("score", "Puntuación", FieldKind::Number),
        FieldSpec::optional("total", "Total", FieldKind::Integer),
    ],
);

pub const SURVEY_REPORT_SCHEMA: ModelSchema = ModelSchema::new(
    "SurveyReportModel",
    &[
        FieldSpec::required("survey", "Encuesta", FieldKind::Model(&SURVEY_SCHEMA)),
        FieldSpec::required("questions", "Preguntas", FieldKind::List(&QUESTION_SCHEMA)),
        FieldSpec::required("pools", "Sedes", FieldKind::List(&POOL_SCHEMA)),
        FieldSpec::required("results", "Resultados", FieldKind::List(&RESULT_SCHEMA)),
    ],
);

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub survey_id: SurveyId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_id: QuestionId,
    pub survey_id: Option<SurveyId>,
    pub question: String,
    pub question_type: Option<String>,
    pub order: Option<i64>,
}

/// One aggregated answer to a question at a pool.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResult {
    pub result_id: ResultId,
    pub question_id: QuestionId,
    pub pool_id: PoolId,
    pub answer: Option<String>,
    pub score: Option<f64>,
    pub total: Option<i64>,
}

/// Response of the survey report endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SurveyReport {
    pub survey: Survey,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub pools: Vec<Pool>,
    #[serde(default)]
    pub results: Vec<SurveyResult>,
}

impl SurveyReport {
    /// Results answering `question_id`, in report order.
    pub fn results_for(&self, question_id: QuestionId) -> impl Iterator<Item = &SurveyResult> {
        self.results
            .iter()
            .filter(move |result| result.question_id == question_id)
    }
}

impl Model for Survey {
    const SCHEMA: &'static ModelSchema = &SURVEY_SCHEMA;
}

impl Model for Question {
    const SCHEMA: &'static ModelSchema = &QUESTION_SCHEMA;
}

impl Model for SurveyResult {
    const SCHEMA: &'static ModelSchema = &RESULT_SCHEMA;
}

impl Model for SurveyReport {
    const SCHEMA: &'static ModelSchema = &SURVEY_REPORT_SCHEMA;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn report_payload() -> serde_json::Value {
        json!({
            "survey": { "surveyId": 1, "name": "Satisfacción", "owner": "ops" },
            "questions": [
                { "questionId": 10, "question": "¿Limpieza?", "weight": 2 },
                { "questionId": 11, "question": "¿Atención?" }
            ],
            "pools": [{ "poolId": 4, "name": "Norte", "eiSerie": "EI-4", "lat": 1.0 }],
            "results": [
                { "resultId": 100, "questionId": 11, "poolId": 4, "score": 4.5 },
                { "resultId": 101, "questionId": 10, "poolId": 4, "score": 3.0 },
                { "resultId": 102, "questionId": 11, "poolId": 4, "score": 5.0 }
            ],
            "generatedAt": "2024-06-01"
        })
    }

    #[test]
    fn maps_nested_report() {
        let report = SurveyReport::from_payload(&report_payload()).unwrap();

        assert_eq!(report.survey.name, "Satisfacción");
        assert_eq!(report.questions.len(), 2);
        assert_eq!(report.pools[0].ei_serie, "EI-4");
        assert_eq!(report.results.len(), 3);
    }

    #[test]
    fn filters_results_by_question_preserving_order() {
        let report = SurveyReport::from_payload(&report_payload()).unwrap();
        let question = QuestionId::new(11).unwrap();

        let ids: Vec<i64> = report
            .results_for(question)
            .map(|result| result.result_id.get())
            .collect();

        assert_eq!(ids, [100, 102]);
    }

    #[test]
    fn report_without_survey_fails() {
        assert!(SurveyReport::from_payload(&json!({ "questions": [] })).is_err());
    }
}
