//! Delete Coupon Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    coupons::errors::into_status_error, extensions::*, observability::observe_coupon_operation,
    state::State,
};

/// Delete Coupon Handler
///
/// Soft-deletes a coupon. Deleting it a second time is a client error.
#[endpoint(
    tags("coupons"),
    summary = "Delete Coupon",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Coupon deleted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed id or coupon already deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Coupon not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "coupons.http.delete",
    skip(id, depot),
    fields(coupon_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();

    tracing::Span::current().record("coupon_uuid", tracing::field::display(id));

    state
        .app
        .coupons
        .delete_coupon(id.into(), Timestamp::now())
        .await
        .map_err(|error| into_status_error("delete", error))?;

    observe_coupon_operation("delete", "deleted");

    Ok(StatusCode::NO_CONTENT)
}
