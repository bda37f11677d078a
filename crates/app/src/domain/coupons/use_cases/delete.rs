//! Delete Coupon

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use jiff::Timestamp;
use tracing::info;

use crate::domain::coupons::{
    errors::CouponsServiceError, models::CouponUuid, repository::CouponsRepository,
};

/// Soft-deletes a coupon.
///
/// Deleted coupons are still looked up so a repeated delete reports
/// [`CouponsServiceError::AlreadyDeleted`] rather than
/// [`CouponsServiceError::NotFound`].
pub struct DeleteCoupon {
    repository: Arc<dyn CouponsRepository>,
}

impl DeleteCoupon {
    #[must_use]
    pub fn new(repository: Arc<dyn CouponsRepository>) -> Self {
        Self { repository }
    }

    /// Mark the coupon identified by `coupon` as deleted at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`CouponsServiceError::NotFound`] for an unknown identifier and
    /// [`CouponsServiceError::AlreadyDeleted`] if it was deleted before. The
    /// coupon is only saved after a successful transition.
    #[tracing::instrument(
        name = "coupons.delete",
        skip(self, coupon),
        fields(coupon_uuid = %coupon),
        err(level = "warn")
    )]
    pub async fn execute(
        &self,
        coupon: CouponUuid,
        now: Timestamp,
    ) -> Result<(), CouponsServiceError> {
        let mut found = self
            .repository
            .find_by_id_including_deleted(coupon)
            .await?
            .ok_or(CouponsServiceError::NotFound)?;

        found.delete(now)?;

        self.repository.save(found).await?;

        info!(coupon_uuid = %coupon, "deleted coupon");

        Ok(())
    }
}

impl Debug for DeleteCoupon {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("DeleteCoupon").finish_non_exhaustive()
    }
}
