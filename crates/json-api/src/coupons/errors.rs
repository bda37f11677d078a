//! Coupon Errors

use salvo::http::StatusError;
use tracing::error;

use coupons_app::domain::coupons::CouponsServiceError;

use crate::observability::observe_coupon_operation;

/// Map a service failure to its HTTP status, counting it under `operation`.
///
/// Repository failures are logged here and surface as a bare 500.
pub(crate) fn into_status_error(operation: &str, error: CouponsServiceError) -> StatusError {
    observe_coupon_operation(operation, outcome(&error));

    match error {
        CouponsServiceError::InvalidInput(reason) => {
            StatusError::unprocessable_entity().brief(reason.to_string())
        }
        CouponsServiceError::NotFound => StatusError::not_found().brief("Coupon not found"),
        CouponsServiceError::AlreadyDeleted => {
            StatusError::bad_request().brief("Coupon is already deleted")
        }
        CouponsServiceError::Repository(source) => {
            error!(error = ?source, "coupon {operation} failed: {source}");

            StatusError::internal_server_error()
        }
    }
}

fn outcome(error: &CouponsServiceError) -> &'static str {
    match error {
        CouponsServiceError::InvalidInput(_) => "invalid_input",
        CouponsServiceError::NotFound => "not_found",
        CouponsServiceError::AlreadyDeleted => "already_deleted",
        CouponsServiceError::Repository(_) => "repository_error",
    }
}
