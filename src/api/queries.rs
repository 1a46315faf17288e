//! Endpoint definitions used by both the API client and the data providers.

use reqwest::Method;
use serde_json::Value;

use crate::api::Query;
use crate::domain::attendance::AttendanceListResponse;
use crate::domain::pool::Pool;
use crate::domain::quota::Quota;
use crate::domain::sale::SaleDetail;
use crate::domain::survey::{Question, SurveyReport};
use crate::domain::trainer::Trainer;
use crate::errors::MappingError;
use crate::forms::attendance::AttendanceParams;
use crate::forms::page::PageParams;
use crate::forms::quota::QuotaParams;
use crate::forms::sale::SaleDetailParams;
use crate::forms::survey::{ResultDeleteParams, SurveyReportParams};
use crate::mapper::Model;
use crate::pagination::Page;

/// Paginated `GET` endpoint whose items map through the item model.
macro_rules! paginated_query {
    ($name:ident, $params:ty, $item:ty, $path:literal) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name(pub $params);

        impl Query for $name {
            type Output = Page<$item>;

            fn path(&self) -> String {
                $path.to_string()
            }

            fn params(&self) -> Vec<(&'static str, String)> {
                self.0.query_pairs()
            }

            fn transform(&self, raw: Value) -> Result<Self::Output, MappingError> {
                Page::from_pagination(&raw, <$item>::from_payload)
            }
        }
    };
}

paginated_query!(PoolsQuery, PageParams, Pool, "/pool");
paginated_query!(TrainersQuery, PageParams, Trainer, "/trainer");
// The attendance path is misspelled on the server.
paginated_query!(AttendanceQuery, AttendanceParams, AttendanceListResponse, "/club/attedance");
paginated_query!(SaleDetailsQuery, SaleDetailParams, SaleDetail, "/sale/detail");
paginated_query!(QuotasQuery, QuotaParams, Quota, "/quota");

/// Every question of the active survey.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuestionsQuery;

impl Query for QuestionsQuery {
    type Output = Page<Question>;

    fn path(&self) -> String {
        "/survey/question".to_string()
    }

    fn transform(&self, raw: Value) -> Result<Self::Output, MappingError> {
        Page::from_pagination(&raw, Question::from_payload)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurveyReportQuery(pub SurveyReportParams);

impl Query for SurveyReportQuery {
    type Output = SurveyReport;

    fn path(&self) -> String {
        "/survey/report".to_string()
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        self.0.query_pairs()
    }

    fn transform(&self, raw: Value) -> Result<Self::Output, MappingError> {
        SurveyReport::from_payload(&raw)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeleteResultQuery(pub ResultDeleteParams);

impl Query for DeleteResultQuery {
    type Output = ();

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> String {
        format!("/survey/result/{}", self.0.result_id)
    }

    fn transform(&self, _raw: Value) -> Result<Self::Output, MappingError> {
        Ok(())
    }
}
