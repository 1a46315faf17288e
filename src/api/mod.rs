//! Declarative query definitions over the dashboard REST API.
//!
//! Every endpoint is described once by a [`Query`]: its method, path, query
//! parameters and how the raw JSON response becomes a domain value. The
//! [`ApiClient`] executes queries and reports failures as the wire
//! [`ErrorBody`], with transport failures classified into the 5000x codes.

use reqwest::Method;
use serde_json::Value;

use crate::domain::attendance::AttendanceListResponse;
use crate::domain::pool::Pool;
use crate::domain::quota::Quota;
use crate::domain::sale::SaleDetail;
use crate::domain::survey::{Question, SurveyReport};
use crate::domain::trainer::Trainer;
use crate::errors::{AppError, AppResult, ErrorBody, MappingError};
use crate::forms::attendance::AttendanceParams;
use crate::forms::page::PageParams;
use crate::forms::quota::QuotaParams;
use crate::forms::sale::SaleDetailParams;
use crate::forms::survey::{ResultDeleteParams, SurveyReportParams};
use crate::pagination::Page;
use crate::transport::{HttpTransport, Session};

pub mod queries;

pub use queries::{
    AttendanceQuery, DeleteResultQuery, PoolsQuery, QuestionsQuery, QuotasQuery,
    SaleDetailsQuery, SurveyReportQuery, TrainersQuery,
};

pub type ApiResult<T> = Result<T, ErrorBody>;

/// One API endpoint together with its response mapping.
pub trait Query: Send + Sync {
    type Output;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String;

    fn params(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn transform(&self, raw: Value) -> Result<Self::Output, MappingError>;
}

/// Executes [`Query`] definitions against one API base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    transport: HttpTransport,
}

impl ApiClient {
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    /// Sends `query` and returns the raw response body.
    pub async fn fetch<Q: Query>(&self, session: &Session, query: &Q) -> AppResult<Value> {
        self.transport
            .send(session, query.method(), &query.path(), &query.params())
            .await
    }

    /// Sends `query` and maps its response.
    ///
    /// Backend error bodies are returned unchanged, every other failure is
    /// classified into a transport error body.
    pub async fn query<Q: Query>(&self, session: &Session, query: &Q) -> ApiResult<Q::Output> {
        let raw = self
            .fetch(session, query)
            .await
            .map_err(AppError::into_error_body)?;
        query
            .transform(raw)
            .map_err(|err| AppError::from(err).into_error_body())
    }

    pub async fn get_pools(&self, session: &Session, params: PageParams) -> ApiResult<Page<Pool>> {
        self.query(session, &PoolsQuery(params)).await
    }

    pub async fn get_trainers(
        &self,
        session: &Session,
        params: PageParams,
    ) -> ApiResult<Page<Trainer>> {
        self.query(session, &TrainersQuery(params)).await
    }

    pub async fn get_attendance(
        &self,
        session: &Session,
        params: AttendanceParams,
    ) -> ApiResult<Page<AttendanceListResponse>> {
        self.query(session, &AttendanceQuery(params)).await
    }

    pub async fn get_questions(&self, session: &Session) -> ApiResult<Page<Question>> {
        self.query(session, &QuestionsQuery).await
    }

    pub async fn get_survey_report(
        &self,
        session: &Session,
        params: SurveyReportParams,
    ) -> ApiResult<SurveyReport> {
        self.query(session, &SurveyReportQuery(params)).await
    }

    pub async fn get_sale_details(
        &self,
        session: &Session,
        params: SaleDetailParams,
    ) -> ApiResult<Page<SaleDetail>> {
        self.query(session, &SaleDetailsQuery(params)).await
    }

    pub async fn get_quotas(&self, session: &Session, params: QuotaParams) -> ApiResult<Page<Quota>> {
        self.query(session, &QuotasQuery(params)).await
    }

    pub async fn delete_result(
        &self,
        session: &Session,
        params: ResultDeleteParams,
    ) -> ApiResult<()> {
        self.query(session, &DeleteResultQuery(params)).await
    }
}
