//! Coupon use cases.

mod create;
mod delete;
mod get;

pub use create::CreateCoupon;
pub use delete::DeleteCoupon;
pub use get::GetCouponById;
