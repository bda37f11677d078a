//! Postgres Coupons Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{Error, FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};
use tracing::debug;

use crate::domain::coupons::{
    errors::CouponsRepositoryError,
    models::{Coupon, CouponStatus, CouponUuid},
    records::CouponRecord,
    repository::CouponsRepository,
};

const SAVE_COUPON_SQL: &str = include_str!("sql/save_coupon.sql");
const FIND_COUPON_SQL: &str = include_str!("sql/find_coupon.sql");
const FIND_COUPON_INCLUDING_DELETED_SQL: &str =
    include_str!("sql/find_coupon_including_deleted.sql");
const FIND_COUPON_BY_CODE_SQL: &str = include_str!("sql/find_coupon_by_code.sql");

/// PostgreSQL-backed coupons repository.
#[derive(Debug, Clone)]
pub struct PgCouponsRepository {
    pool: PgPool,
}

impl PgCouponsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one(
        &self,
        sql: &'static str,
        coupon: CouponUuid,
    ) -> Result<Option<Coupon>, CouponsRepositoryError> {
        let record = query_as::<Postgres, CouponRecord>(sql)
            .bind(coupon.into_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(record.map(Coupon::from_record))
    }
}

#[async_trait]
impl CouponsRepository for PgCouponsRepository {
    async fn save(&self, coupon: Coupon) -> Result<Coupon, CouponsRepositoryError> {
        let record = coupon.into_record(CouponUuid::new());

        debug!(coupon_uuid = %record.uuid, status = %record.status, "saving coupon");

        let saved = query_as::<Postgres, CouponRecord>(SAVE_COUPON_SQL)
            .bind(record.uuid.into_uuid())
            .bind(record.code)
            .bind(record.description)
            .bind(record.discount_value)
            .bind(SqlxTimestamp::from(record.expiration_date))
            .bind(record.status.as_str())
            .bind(record.published)
            .bind(record.redeemed)
            .bind(SqlxTimestamp::from(record.created_at))
            .bind(SqlxTimestamp::from(record.updated_at))
            .fetch_one(&self.pool)
            .await?;

        Ok(Coupon::from_record(saved))
    }

    async fn find_by_id_excluding_deleted(
        &self,
        coupon: CouponUuid,
    ) -> Result<Option<Coupon>, CouponsRepositoryError> {
        self.find_one(FIND_COUPON_SQL, coupon).await
    }

    async fn find_by_id_including_deleted(
        &self,
        coupon: CouponUuid,
    ) -> Result<Option<Coupon>, CouponsRepositoryError> {
        self.find_one(FIND_COUPON_INCLUDING_DELETED_SQL, coupon)
            .await
    }

    async fn find_by_code_excluding_deleted(
        &self,
        code: &str,
    ) -> Result<Option<Coupon>, CouponsRepositoryError> {
        let record = query_as::<Postgres, CouponRecord>(FIND_COUPON_BY_CODE_SQL)
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record.map(Coupon::from_record))
    }
}

impl<'r> FromRow<'r, PgRow> for CouponRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        let status = status
            .parse::<CouponStatus>()
            .map_err(|e| Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: CouponUuid::from_uuid(row.try_get("uuid")?),
            code: row.try_get("code")?,
            description: row.try_get("description")?,
            discount_value: row.try_get("discount_value")?,
            expiration_date: row
                .try_get::<SqlxTimestamp, _>("expiration_date")?
                .to_jiff(),
            status,
            published: row.try_get("published")?,
            redeemed: row.try_get("redeemed")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
