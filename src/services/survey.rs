//! Survey questions, reports and result maintenance.

use crate::domain::survey::{Question, SurveyReport};
use crate::forms::survey::{ResultDeleteParams, SurveyReportParams};
use crate::mapper::Model;
use crate::pagination::Page;
use crate::providers::SurveyProvider;
use crate::services::{ServiceResult, normalize};
use crate::transport::Session;

/// Loads the questions of the active survey.
pub async fn list_questions<P>(provider: &P, session: &Session) -> ServiceResult<Page<Question>>
where
    P: SurveyProvider + ?Sized,
{
    let raw = provider
        .fetch_questions(session)
        .await
        .map_err(|err| normalize("fetch survey questions", err))?;

    Page::from_pagination(&raw, Question::from_payload)
        .map_err(|err| normalize("map survey questions", err.into()))
}

/// Loads the survey report with its questions, pools and results.
pub async fn get_survey_report<P>(
    provider: &P,
    session: &Session,
    params: &SurveyReportParams,
) -> ServiceResult<SurveyReport>
where
    P: SurveyProvider + ?Sized,
{
    let raw = provider
        .fetch_report(session, params)
        .await
        .map_err(|err| normalize("fetch survey report", err))?;

    SurveyReport::from_payload(&raw).map_err(|err| normalize("map survey report", err.into()))
}

/// Deletes one survey result. The response body is ignored.
pub async fn delete_result<P>(
    provider: &P,
    session: &Session,
    params: &ResultDeleteParams,
) -> ServiceResult<()>
where
    P: SurveyProvider + ?Sized,
{
    provider
        .delete_result(session, params)
        .await
        .map(drop)
        .map_err(|err| normalize("delete survey result", err))
}
