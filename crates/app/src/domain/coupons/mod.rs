//! Coupons

pub mod data;
pub mod errors;
pub mod models;
pub mod records;
pub mod repositories;
pub mod repository;
pub mod service;
pub mod use_cases;

pub use errors::{CouponsRepositoryError, CouponsServiceError};
pub use repository::*;
pub use service::*;
