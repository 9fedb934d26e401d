//! HTTP route handlers.
//!
//! - `generate`: the prompt endpoint (GET /generate?url=...&token=...)
//!
//! The static landing page is served by the fallback handler in `main`.

pub mod generate;

use axum::Router;

pub fn create_router(github_base_url: String) -> Router {
    Router::new().merge(generate::routes(github_base_url))
}
