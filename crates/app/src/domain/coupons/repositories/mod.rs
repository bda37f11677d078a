//! Coupons repository adapters.

mod memory;
mod postgres;

pub use memory::InMemoryCouponsRepository;
pub use postgres::PgCouponsRepository;
