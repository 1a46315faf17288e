//! Per-resource data providers returning raw response payloads.
//!
//! Providers only fetch; mapping into domain models and error normalization
//! happen in the services that call them.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::AppResult;
use crate::forms::attendance::AttendanceParams;
use crate::forms::page::PageParams;
use crate::forms::quota::QuotaParams;
use crate::forms::sale::SaleDetailParams;
use crate::forms::survey::{ResultDeleteParams, SurveyReportParams};
use crate::transport::Session;

pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

#[async_trait]
pub trait PoolProvider: Send + Sync {
    async fn fetch_pools(&self, session: &Session, params: &PageParams) -> AppResult<Value>;
}

#[async_trait]
pub trait TrainerProvider: Send + Sync {
    async fn fetch_trainers(&self, session: &Session, params: &PageParams) -> AppResult<Value>;
}

#[async_trait]
pub trait AttendanceProvider: Send + Sync {
    async fn fetch_attendance(
        &self,
        session: &Session,
        params: &AttendanceParams,
    ) -> AppResult<Value>;
}

#[async_trait]
pub trait SurveyProvider: Send + Sync {
    async fn fetch_questions(&self, session: &Session) -> AppResult<Value>;

    async fn fetch_report(
        &self,
        session: &Session,
        params: &SurveyReportParams,
    ) -> AppResult<Value>;

    async fn delete_result(
        &self,
        session: &Session,
        params: &ResultDeleteParams,
    ) -> AppResult<Value>;
}

#[async_trait]
pub trait SaleProvider: Send + Sync {
    async fn fetch_sale_details(
        &self,
        session: &Session,
        params: &SaleDetailParams,
    ) -> AppResult<Value>;
}

#[async_trait]
pub trait QuotaProvider: Send + Sync {
    async fn fetch_quotas(&self, session: &Session, params: &QuotaParams) -> AppResult<Value>;
}
