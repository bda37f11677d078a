//! Coupons errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// A coupon rule violated while creating a coupon.
///
/// Rules are checked in declaration order and the first failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidCoupon {
    #[error("Code is required")]
    CodeRequired,

    #[error("Code must have exactly 6 alphanumeric characters.")]
    CodeLength,

    #[error("Description is required")]
    DescriptionRequired,

    #[error("Discount value is required")]
    DiscountValueRequired,

    #[error("Discount value must be at least 0.5")]
    DiscountValueTooLow,

    #[error("Expiration date is required")]
    ExpirationDateRequired,

    #[error("Expiration date must be in the future")]
    ExpirationDateNotInFuture,
}

/// Raised when deleting a coupon that is already deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Coupon is already deleted")]
pub struct CouponAlreadyDeleted;

/// Raised when a stored status does not name a known coupon status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown coupon status {0:?}")]
pub struct UnknownCouponStatus(pub String);

/// Raised when projecting a coupon that was never given an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("coupon has not been saved")]
pub struct UnsavedCoupon;

/// Failures reported by a [`CouponsRepository`](super::CouponsRepository).
#[derive(Debug, Error)]
pub enum CouponsRepositoryError {
    /// A coupon with the same identifier already exists.
    #[error("coupon already exists")]
    AlreadyExists,

    /// The store rejected the coupon's values.
    #[error("invalid coupon data")]
    InvalidData,

    /// A saved coupon came back without an identifier.
    #[error("coupon has no identifier")]
    MissingIdentifier,

    /// The store cannot be reached or is unusable.
    #[error("coupon store unavailable")]
    Unavailable,

    /// Any other database failure.
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CouponsRepositoryError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation | ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

/// Failures reported by the coupon use cases.
#[derive(Debug, Error)]
pub enum CouponsServiceError {
    /// A coupon rule was violated; the message names the rule.
    #[error(transparent)]
    InvalidInput(#[from] InvalidCoupon),

    /// No coupon with that identifier, or it has been deleted.
    #[error("coupon not found")]
    NotFound,

    /// The coupon was deleted before.
    #[error("coupon is already deleted")]
    AlreadyDeleted,

    /// The repository failed.
    #[error("coupon repository failure")]
    Repository(#[from] CouponsRepositoryError),
}

impl From<UnsavedCoupon> for CouponsServiceError {
    fn from(_: UnsavedCoupon) -> Self {
        Self::Repository(CouponsRepositoryError::MissingIdentifier)
    }
}

impl From<CouponAlreadyDeleted> for CouponsServiceError {
    fn from(_: CouponAlreadyDeleted) -> Self {
        Self::AlreadyDeleted
    }
}
