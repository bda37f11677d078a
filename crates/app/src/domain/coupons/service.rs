//! Coupons service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::domain::coupons::{
    data::NewCoupon,
    errors::CouponsServiceError,
    models::{CouponUuid, CouponView},
    repository::CouponsRepository,
    use_cases::{CreateCoupon, DeleteCoupon, GetCouponById},
};

/// Coupons service backed by the coupon use cases.
pub struct CouponsUseCases {
    create: CreateCoupon,
    get: GetCouponById,
    delete: DeleteCoupon,
}

impl CouponsUseCases {
    #[must_use]
    pub fn new(repository: Arc<dyn CouponsRepository>) -> Self {
        Self {
            create: CreateCoupon::new(Arc::clone(&repository)),
            get: GetCouponById::new(Arc::clone(&repository)),
            delete: DeleteCoupon::new(repository),
        }
    }
}

impl Debug for CouponsUseCases {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CouponsUseCases").finish_non_exhaustive()
    }
}

#[async_trait]
impl CouponsService for CouponsUseCases {
    async fn create_coupon(
        &self,
        coupon: NewCoupon,
        now: Timestamp,
    ) -> Result<CouponView, CouponsServiceError> {
        self.create.execute(coupon, now).await
    }

    async fn get_coupon(&self, coupon: CouponUuid) -> Result<CouponView, CouponsServiceError> {
        self.get.execute(coupon).await
    }

    async fn delete_coupon(
        &self,
        coupon: CouponUuid,
        now: Timestamp,
    ) -> Result<(), CouponsServiceError> {
        self.delete.execute(coupon, now).await
    }
}

#[automock]
#[async_trait]
pub trait CouponsService: Send + Sync {
    /// Validates and stores a new coupon.
    async fn create_coupon(
        &self,
        coupon: NewCoupon,
        now: Timestamp,
    ) -> Result<CouponView, CouponsServiceError>;

    /// Retrieve a single coupon that has not been deleted.
    async fn get_coupon(&self, coupon: CouponUuid) -> Result<CouponView, CouponsServiceError>;

    /// Soft-deletes the coupon with the given UUID.
    async fn delete_coupon(
        &self,
        coupon: CouponUuid,
        now: Timestamp,
    ) -> Result<(), CouponsServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::coupons::{
            errors::InvalidCoupon, models::CouponStatus,
            repositories::InMemoryCouponsRepository,
        },
        test::helpers::{fixed_now, new_coupon},
    };

    use super::*;

    fn service() -> CouponsUseCases {
        CouponsUseCases::new(Arc::new(InMemoryCouponsRepository::new()))
    }

    #[tokio::test]
    async fn create_sanitizes_code() -> TestResult {
        let now = fixed_now()?;

        let coupon = service()
            .create_coupon(
                NewCoupon {
                    code: Some("AB@C-1#23".to_string()),
                    published: Some(false),
                    ..new_coupon(now)?
                },
                now,
            )
            .await?;

        assert_eq!(coupon.code, "ABC123");
        assert_eq!(coupon.status, CouponStatus::Active);
        assert!(!coupon.redeemed);

        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_code_shorter_than_six_characters() -> TestResult {
        let now = fixed_now()?;

        let result = service()
            .create_coupon(
                NewCoupon {
                    code: Some("AB-12".to_string()),
                    ..new_coupon(now)?
                },
                now,
            )
            .await;

        let Err(CouponsServiceError::InvalidInput(error)) = result else {
            return Err(format!("expected invalid input, got {result:?}").into());
        };

        assert_eq!(error, InvalidCoupon::CodeLength);
        assert!(error.to_string().contains("6 alphanumeric"));

        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_discount_below_minimum() -> TestResult {
        let now = fixed_now()?;

        let result = service()
            .create_coupon(
                NewCoupon {
                    discount_value: Some(Decimal::new(3, 1)),
                    ..new_coupon(now)?
                },
                now,
            )
            .await;

        let Err(CouponsServiceError::InvalidInput(error)) = result else {
            return Err(format!("expected invalid input, got {result:?}").into());
        };

        assert_eq!(error, InvalidCoupon::DiscountValueTooLow);
        assert!(error.to_string().contains("0.5"));

        Ok(())
    }

    #[tokio::test]
    async fn deleted_coupon_is_no_longer_found() -> TestResult {
        let now = fixed_now()?;
        let service = service();

        let coupon = service.create_coupon(new_coupon(now)?, now).await?;

        service.delete_coupon(coupon.uuid, now).await?;

        let result = service.get_coupon(coupon.uuid).await;

        assert!(
            matches!(result, Err(CouponsServiceError::NotFound)),
            "expected not found, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn deleting_twice_reports_already_deleted() -> TestResult {
        let now = fixed_now()?;
        let later = now.checked_add(SignedDuration::from_mins(5))?;
        let service = service();

        let coupon = service.create_coupon(new_coupon(now)?, now).await?;

        service.delete_coupon(coupon.uuid, now).await?;

        let result = service.delete_coupon(coupon.uuid, later).await;

        assert!(
            matches!(result, Err(CouponsServiceError::AlreadyDeleted)),
            "expected already deleted, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_unknown_coupon_is_not_found() -> TestResult {
        let result = service().get_coupon(CouponUuid::new()).await;

        assert!(
            matches!(result, Err(CouponsServiceError::NotFound)),
            "expected not found, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_returns_created_coupon() -> TestResult {
        let now = fixed_now()?;
        let service = service();

        let created = service
            .create_coupon(
                NewCoupon {
                    published: Some(true),
                    ..new_coupon(now)?
                },
                now,
            )
            .await?;

        let fetched = service.get_coupon(created.uuid).await?;

        assert_eq!(fetched, created);
        assert!(fetched.published);

        Ok(())
    }
}
