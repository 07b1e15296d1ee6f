// ABOUTME: HTTP middleware shared by every route group
// ABOUTME: CORS policy applied in the router builder

/// Cross-origin resource sharing policy
pub mod cors;

pub use cors::setup_cors;
