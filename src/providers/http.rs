//! Providers backed by the REST API.

use async_trait::async_trait;
use serde_json::Value;

use crate::api::{
    ApiClient, AttendanceQuery, DeleteResultQuery, PoolsQuery, QuestionsQuery, QuotasQuery,
    SaleDetailsQuery, SurveyReportQuery, TrainersQuery,
};
use crate::errors::AppResult;
use crate::forms::attendance::AttendanceParams;
use crate::forms::page::PageParams;
use crate::forms::quota::QuotaParams;
use crate::forms::sale::SaleDetailParams;
use crate::forms::survey::{ResultDeleteParams, SurveyReportParams};
use crate::providers::{
    AttendanceProvider, PoolProvider, QuotaProvider, SaleProvider, SurveyProvider,
    TrainerProvider,
};
use crate::transport::Session;

#[async_trait]
impl PoolProvider for ApiClient {
    async fn fetch_pools(&self, session: &Session, params: &PageParams) -> AppResult<Value> {
        self.fetch(session, &PoolsQuery(*params)).await
    }
}

#[async_trait]
impl TrainerProvider for ApiClient {
    async fn fetch_trainers(&self, session: &Session, params: &PageParams) -> AppResult<Value> {
        self.fetch(session, &TrainersQuery(*params)).await
    }
}

#[async_trait]
impl AttendanceProvider for ApiClient {
    async fn fetch_attendance(
        &self,
        session: &Session,
        params: &AttendanceParams,
    ) -> AppResult<Value> {
        self.fetch(session, &AttendanceQuery(*params)).await
    }
}

#[async_trait]
impl SurveyProvider for ApiClient {
    async fn fetch_questions(&self, session: &Session) -> AppResult<Value> {
        self.fetch(session, &QuestionsQuery).await
    }

    async fn fetch_report(
        &self,
        session: &Session,
        params: &SurveyReportParams,
    ) -> AppResult<Value> {
        self.fetch(session, &SurveyReportQuery(*params)).await
    }

    async fn delete_result(
        &self,
        session: &Session,
        params: &ResultDeleteParams,
    ) -> AppResult<Value> {
        self.fetch(session, &DeleteResultQuery(*params)).await
    }
}

#[async_trait]
impl SaleProvider for ApiClient {
    async fn fetch_sale_details(
        &self,
        session: &Session,
        params: &SaleDetailParams,
    ) -> AppResult<Value> {
        self.fetch(session, &SaleDetailsQuery(*params)).await
    }
}

#[async_trait]
impl QuotaProvider for ApiClient {
    async fn fetch_quotas(&self, session: &Session, params: &QuotaParams) -> AppResult<Value> {
        self.fetch(session, &QuotasQuery(*params)).await
    }
}
