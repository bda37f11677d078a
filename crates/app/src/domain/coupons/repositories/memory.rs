//! In-memory Coupons Repository

use std::{
    collections::HashMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use async_trait::async_trait;

use crate::domain::coupons::{
    errors::CouponsRepositoryError,
    models::{Coupon, CouponStatus, CouponUuid},
    records::CouponRecord,
    repository::CouponsRepository,
};

/// Coupons repository holding records in process memory.
///
/// Intended for tests and local runs without a database.
#[derive(Debug, Default)]
pub struct InMemoryCouponsRepository {
    coupons: RwLock<HashMap<CouponUuid, CouponRecord>>,
}

impl InMemoryCouponsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(
        &self,
    ) -> Result<RwLockReadGuard<'_, HashMap<CouponUuid, CouponRecord>>, CouponsRepositoryError>
    {
        self.coupons
            .read()
            .map_err(|_poisoned| CouponsRepositoryError::Unavailable)
    }

    fn write(
        &self,
    ) -> Result<RwLockWriteGuard<'_, HashMap<CouponUuid, CouponRecord>>, CouponsRepositoryError>
    {
        self.coupons
            .write()
            .map_err(|_poisoned| CouponsRepositoryError::Unavailable)
    }
}

fn is_visible(record: &CouponRecord) -> bool {
    record.status != CouponStatus::Deleted
}

#[async_trait]
impl CouponsRepository for InMemoryCouponsRepository {
    async fn save(&self, coupon: Coupon) -> Result<Coupon, CouponsRepositoryError> {
        let mut record = coupon.into_record(CouponUuid::new());

        let mut coupons = self.write()?;

        if let Some(existing) = coupons.get(&record.uuid) {
            record.created_at = existing.created_at;
        }

        coupons.insert(record.uuid, record.clone());

        Ok(Coupon::from_record(record))
    }

    async fn find_by_id_excluding_deleted(
        &self,
        coupon: CouponUuid,
    ) -> Result<Option<Coupon>, CouponsRepositoryError> {
        Ok(self
            .read()?
            .get(&coupon)
            .filter(|record| is_visible(record))
            .cloned()
            .map(Coupon::from_record))
    }

    async fn find_by_id_including_deleted(
        &self,
        coupon: CouponUuid,
    ) -> Result<Option<Coupon>, CouponsRepositoryError> {
        Ok(self.read()?.get(&coupon).cloned().map(Coupon::from_record))
    }

    async fn find_by_code_excluding_deleted(
        &self,
        code: &str,
    ) -> Result<Option<Coupon>, CouponsRepositoryError> {
        Ok(self
            .read()?
            .values()
            .filter(|record| is_visible(record) && record.code == code)
            .max_by_key(|record| record.created_at)
            .cloned()
            .map(Coupon::from_record))
    }
}
