//! Middleware de CORS
//!
//! La SPA de operaciones consume esta API desde otro origen, así que
//! CORS queda abierto como en el resto del stack de desarrollo.

use tower_http::cors::CorsLayer;

pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}
