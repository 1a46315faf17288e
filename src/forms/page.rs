//! Offset pagination parameters shared by the pool and trainer listings.

use crate::errors::{AppError, ValidationError};
use crate::schema::{FieldKind, FieldRule, FieldSpec, ModelSchema};
use crate::validators::IntegerRules;

/// Largest page the dashboard asks the API for.
pub const MAX_PAGE_SIZE: i64 = 500;

pub const DEFAULT_PAGE_SIZE: u64 = 20;

pub const PAGE_PARAMS_SCHEMA: ModelSchema = ModelSchema::new(
    "PageParamsDtoModel",
    &[
        FieldSpec::required("startIndex", "Índice inicial", FieldKind::Integer)
            .with_rule(FieldRule::Integer(IntegerRules::at_least(0))),
        FieldSpec::required("maxResults", "Resultados por página", FieldKind::Integer)
            .with_rule(FieldRule::Integer(IntegerRules::between(1, MAX_PAGE_SIZE))),
    ],
);

request_dto!(
    PageParamsDto,
    PAGE_PARAMS_SCHEMA,
    "Raw `startIndex`/`maxResults` payload of a paginated listing."
);

/// Validated offset pagination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageParams {
    pub start_index: u64,
    pub max_results: u64,
}

impl PageParams {
    /// Params for the 1-based `page` of `page_size` rows.
    pub fn for_page(page: u64, page_size: u64) -> Self {
        Self {
            start_index: page.saturating_sub(1).saturating_mul(page_size),
            max_results: page_size,
        }
    }

    /// 1-based page the offset falls on.
    pub fn current_page(&self) -> u64 {
        self.start_index / self.max_results.max(1) + 1
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("startIndex", self.start_index.to_string()),
            ("maxResults", self.max_results.to_string()),
        ]
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::for_page(1, DEFAULT_PAGE_SIZE)
    }
}

fn non_negative(property: &str, raw: i64) -> Result<u64, AppError> {
    u64::try_from(raw).map_err(|err| ValidationError::new(property, err.to_string()).into())
}

impl TryFrom<&PageParamsDto> for PageParams {
    type Error = AppError;

    fn try_from(dto: &PageParamsDto) -> Result<Self, Self::Error> {
        dto.validate(None)?;
        let record = dto.record();

        let start_index = record.require("startIndex", record.integer("startIndex")?)?;
        let max_results = record.require("maxResults", record.integer("maxResults")?)?;

        Ok(Self {
            start_index: non_negative("startIndex", start_index)?,
            max_results: non_negative("maxResults", max_results)?,
        })
    }
}
