//! Coupon Models

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    domain::coupons::{
        data::NewCoupon,
        errors::{CouponAlreadyDeleted, InvalidCoupon, UnknownCouponStatus, UnsavedCoupon},
        records::CouponRecord,
    },
    uuids::TypedUuid,
};

/// Coupon UUID
pub type CouponUuid = TypedUuid<Coupon>;

/// Number of alphanumeric characters in a coupon code.
pub const CODE_LENGTH: usize = 6;

/// Smallest accepted discount value, inclusive (`0.5`).
pub const MINIMUM_DISCOUNT_VALUE: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Coupon lifecycle status.
///
/// The only transition is `Active` to `Deleted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CouponStatus {
    /// Visible to lookups that exclude deleted coupons.
    Active,

    /// Soft deleted. The row is kept but hidden from normal lookups.
    Deleted,
}

impl CouponStatus {
    /// Stored and serialised form, e.g. `ACTIVE`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Deleted => "DELETED",
        }
    }
}

impl Display for CouponStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for CouponStatus {
    type Err = UnknownCouponStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ACTIVE" => Ok(Self::Active),
            "DELETED" => Ok(Self::Deleted),
            other => Err(UnknownCouponStatus(other.to_owned())),
        }
    }
}

/// Coupon Model
///
/// Aggregate root for a discount coupon. A coupon can only be obtained through
/// [`Coupon::create`], which enforces every coupon rule, or by loading it back
/// from a repository.
#[derive(Debug, Clone, PartialEq)]
pub struct Coupon {
    uuid: Option<CouponUuid>,
    code: String,
    description: String,
    discount_value: Decimal,
    expiration_date: Timestamp,
    status: CouponStatus,
    published: bool,
    redeemed: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Coupon {
    /// Create a new active coupon.
    ///
    /// The code is stripped of every character that is not an ASCII letter or
    /// digit before its length is checked.
    ///
    /// # Errors
    ///
    /// Returns the first rule violated, checking code, description, discount
    /// value and expiration date in that order.
    pub fn create(coupon: NewCoupon, now: Timestamp) -> Result<Self, InvalidCoupon> {
        let code = validate_code(coupon.code.as_deref())?;
        let description = validate_description(coupon.description)?;
        let discount_value = validate_discount_value(coupon.discount_value)?;
        let expiration_date = validate_expiration_date(coupon.expiration_date, now)?;

        Ok(Self {
            uuid: None,
            code,
            description,
            discount_value,
            expiration_date,
            status: CouponStatus::Active,
            published: coupon.published.unwrap_or(false),
            redeemed: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Strip everything but ASCII letters and digits from a raw code.
    #[must_use]
    pub fn sanitize_code(code: &str) -> String {
        code.chars().filter(char::is_ascii_alphanumeric).collect()
    }

    /// Soft delete the coupon.
    ///
    /// # Errors
    ///
    /// Returns [`CouponAlreadyDeleted`] without touching the coupon when it is
    /// already deleted.
    pub fn delete(&mut self, now: Timestamp) -> Result<(), CouponAlreadyDeleted> {
        if self.is_deleted() {
            return Err(CouponAlreadyDeleted);
        }

        self.status = CouponStatus::Deleted;
        self.updated_at = now;

        Ok(())
    }

    /// Whether the expiration date lies strictly before `now`.
    #[must_use]
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expiration_date < now
    }

    /// Whether the coupon has been soft deleted.
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.status == CouponStatus::Deleted
    }

    /// Identifier, present once the coupon has been saved.
    pub fn uuid(&self) -> Option<CouponUuid> {
        self.uuid
    }

    /// Sanitized code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Description, as supplied.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Exact discount value.
    pub fn discount_value(&self) -> Decimal {
        self.discount_value
    }

    /// Expiration date.
    pub fn expiration_date(&self) -> Timestamp {
        self.expiration_date
    }

    /// Lifecycle status.
    pub fn status(&self) -> CouponStatus {
        self.status
    }

    /// Published flag.
    pub fn published(&self) -> bool {
        self.published
    }

    /// Redeemed flag. Always `false` for newly created coupons.
    pub fn redeemed(&self) -> bool {
        self.redeemed
    }

    /// When the coupon was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// When the coupon last changed.
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Rebuild a saved coupon from its stored record.
    ///
    /// No coupon rule is checked. Stored coupons may have expired or been
    /// deleted since they were created, and they come back as they were saved.
    /// Repository adapters use this to hand coupons back to the use cases.
    #[must_use]
    pub fn from_record(record: CouponRecord) -> Self {
        Self {
            uuid: Some(record.uuid),
            code: record.code,
            description: record.description,
            discount_value: record.discount_value,
            expiration_date: record.expiration_date,
            status: record.status,
            published: record.published,
            redeemed: record.redeemed,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }

    /// Convert into a record for storage.
    ///
    /// A coupon that has been saved before keeps its identifier; a new one
    /// takes `fallback_uuid`.
    #[must_use]
    pub fn into_record(self, fallback_uuid: CouponUuid) -> CouponRecord {
        CouponRecord {
            uuid: self.uuid.unwrap_or(fallback_uuid),
            code: self.code,
            description: self.description,
            discount_value: self.discount_value,
            expiration_date: self.expiration_date,
            status: self.status,
            published: self.published,
            redeemed: self.redeemed,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

fn validate_code(code: Option<&str>) -> Result<String, InvalidCoupon> {
    let code = code
        .filter(|code| !code.trim().is_empty())
        .ok_or(InvalidCoupon::CodeRequired)?;

    let sanitized = Coupon::sanitize_code(code);

    if sanitized.len() != CODE_LENGTH {
        return Err(InvalidCoupon::CodeLength);
    }

    Ok(sanitized)
}

fn validate_description(description: Option<String>) -> Result<String, InvalidCoupon> {
    description
        .filter(|description| !description.trim().is_empty())
        .ok_or(InvalidCoupon::DescriptionRequired)
}

fn validate_discount_value(discount_value: Option<Decimal>) -> Result<Decimal, InvalidCoupon> {
    let discount_value = discount_value.ok_or(InvalidCoupon::DiscountValueRequired)?;

    if discount_value < MINIMUM_DISCOUNT_VALUE {
        return Err(InvalidCoupon::DiscountValueTooLow);
    }

    Ok(discount_value)
}

fn validate_expiration_date(
    expiration_date: Option<Timestamp>,
    now: Timestamp,
) -> Result<Timestamp, InvalidCoupon> {
    let expiration_date = expiration_date.ok_or(InvalidCoupon::ExpirationDateRequired)?;

    if expiration_date <= now {
        return Err(InvalidCoupon::ExpirationDateNotInFuture);
    }

    Ok(expiration_date)
}

/// Coupon View
///
/// Read-only snapshot of a saved coupon handed to callers of the use cases.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponView {
    pub uuid: CouponUuid,
    pub code: String,
    pub description: String,
    pub discount_value: Decimal,
    pub expiration_date: Timestamp,
    pub status: CouponStatus,
    pub published: bool,
    pub redeemed: bool,
}

impl TryFrom<Coupon> for CouponView {
    type Error = UnsavedCoupon;

    fn try_from(coupon: Coupon) -> Result<Self, Self::Error> {
        let uuid = coupon.uuid.ok_or(UnsavedCoupon)?;

        Ok(Self {
            uuid,
            code: coupon.code,
            description: coupon.description,
            discount_value: coupon.discount_value,
            expiration_date: coupon.expiration_date,
            status: coupon.status,
            published: coupon.published,
            redeemed: coupon.redeemed,
        })
    }
}
