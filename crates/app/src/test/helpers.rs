//! Test Helpers

use jiff::{SignedDuration, Timestamp};
use rust_decimal::Decimal;

use crate::domain::coupons::data::NewCoupon;

/// Fixed instant used as "now" so expiry checks stay deterministic.
pub(crate) fn fixed_now() -> Result<Timestamp, jiff::Error> {
    "2026-01-01T00:00:00Z".parse()
}

/// A valid coupon expiring one day after `now`.
pub(crate) fn new_coupon(now: Timestamp) -> Result<NewCoupon, jiff::Error> {
    Ok(NewCoupon {
        code: Some("ABC123".to_string()),
        description: Some("Test".to_string()),
        discount_value: Some(Decimal::ONE),
        expiration_date: Some(now.checked_add(SignedDuration::from_hours(24))?),
        published: Some(false),
    })
}
