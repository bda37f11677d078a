//! Get Coupon By Id

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use crate::domain::coupons::{
    errors::CouponsServiceError,
    models::{CouponUuid, CouponView},
    repository::CouponsRepository,
};

/// Looks up a coupon that has not been deleted.
pub struct GetCouponById {
    repository: Arc<dyn CouponsRepository>,
}

impl GetCouponById {
    #[must_use]
    pub fn new(repository: Arc<dyn CouponsRepository>) -> Self {
        Self { repository }
    }

    /// Fetch the coupon identified by `coupon`.
    ///
    /// # Errors
    ///
    /// Returns [`CouponsServiceError::NotFound`] when no active coupon has
    /// that identifier.
    #[tracing::instrument(
        name = "coupons.get",
        skip(self, coupon),
        fields(coupon_uuid = %coupon),
        err(level = "warn")
    )]
    pub async fn execute(&self, coupon: CouponUuid) -> Result<CouponView, CouponsServiceError> {
        let coupon = self
            .repository
            .find_by_id_excluding_deleted(coupon)
            .await?
            .ok_or(CouponsServiceError::NotFound)?;

        Ok(CouponView::try_from(coupon)?)
    }
}

impl Debug for GetCouponById {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GetCouponById").finish_non_exhaustive()
    }
}
