//! Coupons Repository

use async_trait::async_trait;
use mockall::automock;

use crate::domain::coupons::{
    errors::CouponsRepositoryError,
    models::{Coupon, CouponUuid},
};

/// Storage port for coupons.
///
/// Soft-deleted coupons are only ever returned by the `including_deleted`
/// lookup; every other read excludes them explicitly.
#[automock]
#[async_trait]
pub trait CouponsRepository: Send + Sync {
    /// Insert or update a coupon keyed by its identifier.
    ///
    /// Returns the stored coupon, with an identifier assigned if it had none.
    async fn save(&self, coupon: Coupon) -> Result<Coupon, CouponsRepositoryError>;

    /// Find a coupon by identifier unless it is deleted.
    async fn find_by_id_excluding_deleted(
        &self,
        coupon: CouponUuid,
    ) -> Result<Option<Coupon>, CouponsRepositoryError>;

    /// Find a coupon by identifier whatever its status.
    async fn find_by_id_including_deleted(
        &self,
        coupon: CouponUuid,
    ) -> Result<Option<Coupon>, CouponsRepositoryError>;

    /// Find a coupon by its sanitized code unless it is deleted.
    async fn find_by_code_excluding_deleted(
        &self,
        code: &str,
    ) -> Result<Option<Coupon>, CouponsRepositoryError>;
}
