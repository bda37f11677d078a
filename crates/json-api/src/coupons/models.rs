//! Coupon request and response bodies.

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use coupons_app::domain::coupons::{data::NewCoupon, models::CouponView};

/// Create Coupon Request
///
/// Every field may be omitted so that missing values are reported by the
/// coupon rules, in their fixed order, rather than as a parse failure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateCouponRequest {
    /// Coupon code; non-alphanumeric characters are stripped
    pub code: Option<String>,

    pub description: Option<String>,

    /// Discount amount, at least 0.5; a JSON number or a decimal string
    #[salvo(schema(value_type = Option<String>))]
    pub discount_value: Option<Decimal>,

    /// RFC 3339 timestamp, e.g. `2030-01-01T00:00:00.000Z`
    #[salvo(schema(value_type = Option<String>))]
    pub expiration_date: Option<Timestamp>,

    /// Defaults to `false`
    pub published: Option<bool>,
}

impl From<CreateCouponRequest> for NewCoupon {
    fn from(request: CreateCouponRequest) -> Self {
        NewCoupon {
            code: request.code,
            description: request.description,
            discount_value: request.discount_value,
            expiration_date: request.expiration_date,
            published: request.published,
        }
    }
}

/// Coupon Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CouponResponse {
    /// The unique identifier of the coupon
    pub id: Uuid,

    /// Sanitized six character code
    pub code: String,

    pub description: String,

    /// Exact decimal discount, serialised as a string
    #[salvo(schema(value_type = String))]
    pub discount_value: Decimal,

    /// RFC 3339 timestamp with millisecond precision
    pub expiration_date: String,

    /// `ACTIVE` or `DELETED`
    pub status: String,

    pub published: bool,

    pub redeemed: bool,
}

impl From<CouponView> for CouponResponse {
    fn from(coupon: CouponView) -> Self {
        CouponResponse {
            id: coupon.uuid.into_uuid(),
            code: coupon.code,
            description: coupon.description,
            discount_value: coupon.discount_value,
            expiration_date: format!("{:.3}", coupon.expiration_date),
            status: coupon.status.to_string(),
            published: coupon.published,
            redeemed: coupon.redeemed,
        }
    }
}
