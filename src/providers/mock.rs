//! Mock providers for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

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

mock! {
    pub Provider {}

    #[async_trait]
    impl PoolProvider for Provider {
        async fn fetch_pools(&self, session: &Session, params: &PageParams) -> AppResult<Value>;
    }

    #[async_trait]
    impl TrainerProvider for Provider {
        async fn fetch_trainers(&self, session: &Session, params: &PageParams) -> AppResult<Value>;
    }

    #[async_trait]
    impl AttendanceProvider for Provider {
        async fn fetch_attendance(
            &self,
            session: &Session,
            params: &AttendanceParams,
        ) -> AppResult<Value>;
    }

    #[async_trait]
    impl SurveyProvider for Provider {
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
    impl SaleProvider for Provider {
        async fn fetch_sale_details(
            &self,
            session: &Session,
            params: &SaleDetailParams,
        ) -> AppResult<Value>;
    }

    #[async_trait]
    impl QuotaProvider for Provider {
        async fn fetch_quotas(&self, session: &Session, params: &QuotaParams) -> AppResult<Value>;
    }
}
