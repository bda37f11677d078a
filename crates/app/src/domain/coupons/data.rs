//! Coupons Data

use jiff::Timestamp;
use rust_decimal::Decimal;

/// New Coupon Data
///
/// Raw, unvalidated input for [`Coupon::create`](super::models::Coupon::create).
/// Every field is optional so that missing values are reported by the coupon
/// rules rather than by the transport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewCoupon {
    /// Code as typed by the user, separators included.
    pub code: Option<String>,

    /// Free text description.
    pub description: Option<String>,

    /// Discount amount.
    pub discount_value: Option<Decimal>,

    /// Moment after which the coupon is expired.
    pub expiration_date: Option<Timestamp>,

    /// Whether the coupon is published; `false` when omitted.
    pub published: Option<bool>,
}
