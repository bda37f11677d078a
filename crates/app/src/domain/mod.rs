//! Coupon Domain Concerns

pub mod coupons;
