//! HTTP span helpers.

use uuid::Uuid;

/// Route template for a concrete request path, used as the span name and
/// metric label.
///
/// Identifier segments collapse to `{id}` so `/coupon/<uuid>` reports as
/// `/coupon/{id}`.
pub(super) fn route_template(path: &str) -> String {
    let trimmed = path.trim_matches('/');

    if trimmed.is_empty() {
        return "/".to_owned();
    }

    let mut route = String::new();

    for segment in trimmed.split('/') {
        route.push('/');

        if Uuid::parse_str(segment).is_ok() {
            route.push_str("{id}");
        } else {
            route.push_str(segment);
        }
    }

    route
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_collapse_to_placeholder() {
        assert_eq!(
            route_template("/coupon/0190a5b2-7c1e-7d3a-9f1e-2b3c4d5e6f70"),
            "/coupon/{id}"
        );
    }

    #[test]
    fn static_paths_are_kept() {
        assert_eq!(route_template("/coupon"), "/coupon");
        assert_eq!(route_template("/coupon/"), "/coupon");
        assert_eq!(route_template("/"), "/");
    }
}
