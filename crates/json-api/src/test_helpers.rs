//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use coupons_app::{
    context::AppContext,
    domain::coupons::{MockCouponsRepository, MockCouponsService},
};

use crate::{router::app_router, state::State};

/// Serve `route` with handler state backed by a mocked coupons service.
pub(crate) fn coupons_service(coupons: MockCouponsService, route: Router) -> Service {
    let app = AppContext {
        coupons: Arc::new(coupons),
    };

    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
}

/// Serve the full coupon routes over an empty in-memory store.
pub(crate) fn in_memory_service() -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(AppContext::in_memory())))
            .push(app_router()),
    )
}

/// Serve the full coupon routes over a mocked repository.
pub(crate) fn repository_service(repository: MockCouponsRepository) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(AppContext::from_repository(
                Arc::new(repository),
            ))))
            .push(app_router()),
    )
}
