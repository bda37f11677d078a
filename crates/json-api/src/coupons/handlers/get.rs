//! Get Coupon Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    coupons::{errors::into_status_error, models::CouponResponse},
    extensions::*,
    observability::observe_coupon_operation,
    state::State,
};

/// Get Coupon Handler
///
/// Returns a coupon unless it has been deleted.
#[endpoint(
    tags("coupons"),
    summary = "Get Coupon",
    responses(
        (status_code = StatusCode::OK, description = "Coupon found", body = CouponResponse),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed coupon id"),
        (status_code = StatusCode::NOT_FOUND, description = "Coupon not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CouponResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let coupon = state
        .app
        .coupons
        .get_coupon(id.into_inner().into())
        .await
        .map_err(|error| into_status_error("get", error))?;

    observe_coupon_operation("get", "found");

    Ok(Json(coupon.into()))
}
