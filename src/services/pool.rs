//! Pool, trainer and quota listings.

use crate::domain::pool::Pool;
use crate::domain::quota::Quota;
use crate::domain::trainer::Trainer;
use crate::forms::page::PageParams;
use crate::forms::quota::QuotaParams;
use crate::mapper::Model;
use crate::pagination::Page;
use crate::providers::{PoolProvider, QuotaProvider, TrainerProvider};
use crate::services::{ServiceResult, normalize};
use crate::transport::Session;

/// Loads one page of pools.
pub async fn list_pools<P>(
    provider: &P,
    session: &Session,
    params: &PageParams,
) -> ServiceResult<Page<Pool>>
where
    P: PoolProvider + ?Sized,
{
    let raw = provider
        .fetch_pools(session, params)
        .await
        .map_err(|err| normalize("fetch pools", err))?;

    Page::from_pagination(&raw, Pool::from_payload)
        .map_err(|err| normalize("map pools", err.into()))
}

/// Loads one page of trainers.
pub async fn list_trainers<P>(
    provider: &P,
    session: &Session,
    params: &PageParams,
) -> ServiceResult<Page<Trainer>>
where
    P: TrainerProvider + ?Sized,
{
    let raw = provider
        .fetch_trainers(session, params)
        .await
        .map_err(|err| normalize("fetch trainers", err))?;

    Page::from_pagination(&raw, Trainer::from_payload)
        .map_err(|err| normalize("map trainers", err.into()))
}

/// Loads the quota schedule of one pool.
pub async fn list_quotas<P>(
    provider: &P,
    session: &Session,
    params: &QuotaParams,
) -> ServiceResult<Page<Quota>>
where
    P: QuotaProvider + ?Sized,
{
    let raw = provider
        .fetch_quotas(session, params)
        .await
        .map_err(|err| normalize("fetch quotas", err))?;

    Page::from_pagination(&raw, Quota::from_payload)
        .map_err(|err| normalize("map quotas", err.into()))
}
