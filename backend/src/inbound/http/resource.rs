//! CRUD plumbing shared by the collection endpoints.
//!
//! Each resource module declares its own annotated handlers and delegates
//! here, so status codes and messages stay identical across collections.

use actix_web::HttpResponse;
use serde::Serialize;

use super::ApiResult;
use super::envelope::{created, deleted, ok};
use super::query::ListQuery;
use crate::domain::Error;
use crate::domain::filter::Filterable;
use crate::domain::ports::RecordStore;
use crate::domain::record::Record;

fn not_found<R: Record>() -> Error {
    Error::not_found(format!("{} not found", R::LABEL))
}

/// Filtered listing in stored order.
pub(crate) fn list<R>(store: &dyn RecordStore<R>, query: ListQuery) -> ApiResult<HttpResponse>
where
    R: Record + Filterable + Serialize,
{
    let filter = query.into_filter()?;
    let records = filter.apply(store.list()?);
    Ok(ok(records))
}

/// One record or `404 "<Label> not found"`.
pub(crate) fn show<R>(store: &dyn RecordStore<R>, id: &str) -> ApiResult<HttpResponse>
where
    R: Record + Serialize,
{
    let record = store.get(id)?.ok_or_else(not_found::<R>)?;
    Ok(ok(record))
}

/// Store a validated draft and echo it with `201`.
pub(crate) fn create<R>(store: &dyn RecordStore<R>, draft: R::Draft) -> ApiResult<HttpResponse>
where
    R: Record + Serialize,
{
    let record = store.create(draft)?;
    tracing::info!(id = %record.id(), "created {}", R::LABEL);
    Ok(created(record))
}

/// Merge a patch or `404`.
pub(crate) fn update<R>(
    store: &dyn RecordStore<R>,
    id: &str,
    patch: R::Patch,
) -> ApiResult<HttpResponse>
where
    R: Record + Serialize,
{
    let record = store.update(id, patch)?.ok_or_else(not_found::<R>)?;
    Ok(ok(record))
}

/// Remove a record or `404`.
pub(crate) fn delete<R>(store: &dyn RecordStore<R>, id: &str) -> ApiResult<HttpResponse>
where
    R: Record,
{
    if store.delete(id)? {
        tracing::info!(id, "deleted {}", R::LABEL);
        Ok(deleted(R::LABEL))
    } else {
        Err(not_found::<R>())
    }
}
