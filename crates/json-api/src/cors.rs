//! Cross-origin request handling

use salvo::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Cors, CorsHandler},
    http::Method,
};

/// Allow browser clients on any origin to call the coupon routes.
pub(crate) fn handler() -> CorsHandler {
    Cors::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(vec![Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(AllowHeaders::any())
        .into_handler()
}
