//! Create Coupon

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use jiff::Timestamp;
use tracing::{Span, info};

use crate::domain::coupons::{
    data::NewCoupon,
    errors::CouponsServiceError,
    models::{Coupon, CouponView},
    repository::CouponsRepository,
};

/// Validates a new coupon and stores it.
pub struct CreateCoupon {
    repository: Arc<dyn CouponsRepository>,
}

impl CreateCoupon {
    #[must_use]
    pub fn new(repository: Arc<dyn CouponsRepository>) -> Self {
        Self { repository }
    }

    /// Validate `coupon` against `now` and save it.
    ///
    /// The repository is only touched once validation has passed.
    ///
    /// # Errors
    ///
    /// Returns [`CouponsServiceError::InvalidInput`] for the first rule the
    /// input breaks, or [`CouponsServiceError::Repository`] if saving fails.
    #[tracing::instrument(
        name = "coupons.create",
        skip(self, coupon),
        fields(coupon_uuid = tracing::field::Empty),
        err
    )]
    pub async fn execute(
        &self,
        coupon: NewCoupon,
        now: Timestamp,
    ) -> Result<CouponView, CouponsServiceError> {
        let coupon = Coupon::create(coupon, now)?;

        let saved = self.repository.save(coupon).await?;
        let view = CouponView::try_from(saved)?;

        Span::current().record("coupon_uuid", tracing::field::display(view.uuid));

        info!(coupon_uuid = %view.uuid, code = %view.code, "created coupon");

        Ok(view)
    }
}

impl Debug for CreateCoupon {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CreateCoupon").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::coupons::{
            errors::{CouponsRepositoryError, InvalidCoupon},
            models::{CouponStatus, CouponUuid},
            repository::MockCouponsRepository,
        },
        test::helpers::{fixed_now, new_coupon},
    };

    use super::*;

    fn assign_uuid(coupon: Coupon) -> Coupon {
        let record = coupon.into_record(CouponUuid::new());

        Coupon::from_record(record)
    }

    #[tokio::test]
    async fn saves_valid_coupon_once() -> TestResult {
        let now = fixed_now()?;
        let mut repository = MockCouponsRepository::new();

        repository
            .expect_save()
            .times(1)
            .withf(|coupon| coupon.uuid().is_none() && coupon.code() == "ABC123")
            .returning(|coupon| Ok(assign_uuid(coupon)));

        let view = CreateCoupon::new(Arc::new(repository))
            .execute(
                NewCoupon {
                    code: Some("AB@C-1#23".to_string()),
                    ..new_coupon(now)?
                },
                now,
            )
            .await?;

        assert_eq!(view.code, "ABC123");
        assert_eq!(view.description, "Test");
        assert_eq!(view.discount_value, Decimal::ONE);
        assert_eq!(view.status, CouponStatus::Active);
        assert!(!view.published);
        assert!(!view.redeemed);

        Ok(())
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_repository() -> TestResult {
        let now = fixed_now()?;
        let mut repository = MockCouponsRepository::new();

        repository.expect_save().never();

        let result = CreateCoupon::new(Arc::new(repository))
            .execute(
                NewCoupon {
                    discount_value: Some(Decimal::new(3, 1)),
                    ..new_coupon(now)?
                },
                now,
            )
            .await;

        assert!(
            matches!(
                result,
                Err(CouponsServiceError::InvalidInput(
                    InvalidCoupon::DiscountValueTooLow
                ))
            ),
            "expected discount value error, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn repository_failure_passes_through() -> TestResult {
        let now = fixed_now()?;
        let mut repository = MockCouponsRepository::new();

        repository
            .expect_save()
            .times(1)
            .returning(|_| Err(CouponsRepositoryError::Unavailable));

        let result = CreateCoupon::new(Arc::new(repository))
            .execute(new_coupon(now)?, now)
            .await;

        assert!(
            matches!(
                result,
                Err(CouponsServiceError::Repository(
                    CouponsRepositoryError::Unavailable
                ))
            ),
            "expected repository error, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn saved_coupon_without_identifier_is_a_repository_error() -> TestResult {
        let now = fixed_now()?;
        let mut repository = MockCouponsRepository::new();

        repository.expect_save().times(1).returning(Ok);

        let result = CreateCoupon::new(Arc::new(repository))
            .execute(new_coupon(now)?, now)
            .await;

        assert!(
            matches!(
                result,
                Err(CouponsServiceError::Repository(
                    CouponsRepositoryError::MissingIdentifier
                ))
            ),
            "expected missing identifier error, got {result:?}"
        );

        Ok(())
    }
}
