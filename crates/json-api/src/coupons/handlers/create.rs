//! Create Coupon Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use crate::{
    coupons::{
        errors::into_status_error,
        models::{CouponResponse, CreateCouponRequest},
    },
    extensions::*,
    observability::observe_coupon_operation,
    state::State,
};

/// Create Coupon Handler
///
/// Validates and stores a new coupon. The code is stripped down to its
/// alphanumeric characters before its length is checked.
#[endpoint(
    tags("coupons"),
    summary = "Create Coupon",
    responses(
        (status_code = StatusCode::CREATED, description = "Coupon created", body = CouponResponse),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed request body"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Coupon rules violated"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCouponRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CouponResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let coupon = state
        .app
        .coupons
        .create_coupon(json.into_inner().into(), Timestamp::now())
        .await
        .map_err(|error| into_status_error("create", error))?;

    observe_coupon_operation("create", "created");

    res.add_header(LOCATION, format!("/coupon/{}", coupon.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(coupon.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use coupons_app::domain::coupons::{
        CouponsServiceError, MockCouponsService, errors::InvalidCoupon, models::CouponUuid,
    };

    use crate::test_helpers::coupons_service;

    use super::{super::tests::make_coupon, *};

    fn make_service(coupons: MockCouponsService) -> Service {
        coupons_service(coupons, Router::with_path("coupon").post(handler))
    }

    #[tokio::test]
    async fn test_create_coupon_success() -> TestResult {
        let uuid = CouponUuid::new();
        let coupon = make_coupon(uuid)?;

        let mut coupons = MockCouponsService::new();

        coupons
            .expect_create_coupon()
            .once()
            .withf(|new, _| {
                new.code.as_deref() == Some("ABC-123")
                    && new.description.as_deref() == Some("Test coupon")
                    && new.discount_value == Some(Decimal::new(150, 1))
                    && new.published.is_none()
            })
            .return_once(move |_, _| Ok(coupon));

        coupons.expect_get_coupon().never();
        coupons.expect_delete_coupon().never();

        let mut res = TestClient::post("http://example.com/coupon")
            .json(&json!({
                "code": "ABC-123",
                "description": "Test coupon",
                "discountValue": 15.0,
                "expirationDate": "2030-01-01T00:00:00.000Z",
            }))
            .send(&make_service(coupons))
            .await;

        let body: CouponResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/coupon/{uuid}").as_str()));
        assert_eq!(body.id, uuid.into_uuid());
        assert_eq!(body.code, "ABC123");
        assert_eq!(body.status, "ACTIVE");
        assert_eq!(body.expiration_date, "2030-01-01T00:00:00.000Z");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_coupon_rule_violation_returns_422() -> TestResult {
        let mut coupons = MockCouponsService::new();

        coupons
            .expect_create_coupon()
            .once()
            .return_once(|_, _| Err(InvalidCoupon::CodeLength.into()));

        coupons.expect_get_coupon().never();
        coupons.expect_delete_coupon().never();

        let mut res = TestClient::post("http://example.com/coupon")
            .json(&json!({
                "code": "AB-12",
                "description": "Invalid code",
                "discountValue": 10,
                "expirationDate": "2030-01-01T00:00:00.000Z",
            }))
            .send(&make_service(coupons))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert!(res.take_string().await?.contains("6 alphanumeric characters"));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_coupon_malformed_date_returns_400() -> TestResult {
        let mut coupons = MockCouponsService::new();

        coupons.expect_create_coupon().never();

        let res = TestClient::post("http://example.com/coupon")
            .json(&json!({
                "code": "ABC123",
                "description": "Bad date",
                "discountValue": 10,
                "expirationDate": "01/01/2030",
            }))
            .send(&make_service(coupons))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_coupon_repository_failure_returns_500() -> TestResult {
        let mut coupons = MockCouponsService::new();

        coupons.expect_create_coupon().once().return_once(|_, _| {
            Err(CouponsServiceError::Repository(
                coupons_app::domain::coupons::CouponsRepositoryError::Unavailable,
            ))
        });

        let res = TestClient::post("http://example.com/coupon")
            .json(&json!({ "code": "ABC123" }))
            .send(&make_service(coupons))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
