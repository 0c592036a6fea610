use axum::{Router, http::StatusCode, routing::get};

mod page;
mod proxy;

pub fn routes() -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/ip-proxy", get(proxy::ip_proxy))
        .fallback(|| async { StatusCode::NOT_FOUND })
}
