//! Cross-origin policy.
//!
//! Every origin, method and header is allowed, with credentials. Wildcards
//! are not valid alongside credentials, so each is mirrored from the request.

use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Permissive CORS with credentials.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
