//! Coupon Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::domain::coupons::models::{CouponStatus, CouponUuid};

/// Coupon Record
///
/// Stored representation of a coupon, as exchanged with repository adapters.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponRecord {
    pub uuid: CouponUuid,
    pub code: String,
    pub description: String,
    pub discount_value: Decimal,
    pub expiration_date: Timestamp,
    pub status: CouponStatus,
    pub published: bool,
    pub redeemed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
