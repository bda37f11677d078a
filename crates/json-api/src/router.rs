//! App Router

use salvo::Router;

use crate::coupons;

pub fn app_router() -> Router {
    Router::with_path("coupon")
        .post(coupons::create::handler)
        .push(
            Router::with_path("{id}")
                .get(coupons::get::handler)
                .delete(coupons::delete::handler),
        )
}
