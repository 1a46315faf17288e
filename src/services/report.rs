//! Attendance and sales reports.

use crate::domain::attendance::AttendanceListResponse;
use crate::domain::sale::SaleDetail;
use crate::forms::attendance::AttendanceParams;
use crate::forms::sale::SaleDetailParams;
use crate::mapper::Model;
use crate::pagination::Page;
use crate::providers::{AttendanceProvider, SaleProvider};
use crate::services::{ServiceResult, normalize};
use crate::transport::Session;

/// Loads daily attendance totals of one pool for a date range.
pub async fn list_attendance<P>(
    provider: &P,
    session: &Session,
    params: &AttendanceParams,
) -> ServiceResult<Page<AttendanceListResponse>>
where
    P: AttendanceProvider + ?Sized,
{
    let raw = provider
        .fetch_attendance(session, params)
        .await
        .map_err(|err| normalize("fetch attendance", err))?;

    Page::from_pagination(&raw, AttendanceListResponse::from_payload)
        .map_err(|err| normalize("map attendance", err.into()))
}

/// Loads sale lines for a date range, optionally restricted to one pool.
pub async fn list_sale_details<P>(
    provider: &P,
    session: &Session,
    params: &SaleDetailParams,
) -> ServiceResult<Page<SaleDetail>>
where
    P: SaleProvider + ?Sized,
{
    let raw = provider
        .fetch_sale_details(session, params)
        .await
        .map_err(|err| normalize("fetch sale details", err))?;

    Page::from_pagination(&raw, SaleDetail::from_payload)
        .map_err(|err| normalize("map sale details", err.into()))
}
