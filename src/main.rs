#[macro_use]
extern crate tracing;

use axum::middleware;
use axum_extra::middleware::option_layer;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

mod api;
mod config;
mod error;
mod lookup;
mod trace;

pub use config::CONFIG;
pub use error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    launch_info();
    dotenv().ok();
    trace::init();

    let cors = if CONFIG.debug {
        Some(
            CorsLayer::new()
                .allow_headers(Any)
                .allow_methods(Any)
                .allow_origin(Any),
        )
    } else {
        None
    };
    let cors = option_layer(cors);
    let layer = ServiceBuilder::new()
        .layer(middleware::from_fn(trace::log_request))
        .layer(cors);

    let app = api::routes().layer(layer);

    let listener = TcpListener::bind(CONFIG.addr).await.unwrap();
    let local_addr = listener.local_addr().unwrap();
    info!("listening on http://{}", local_addr);
    if let Err(err) = axum::serve(listener, app).await {
        error!("server error: {}", err);
    }
}

fn launch_info() {
    println!();
    println!(
        "=================== Starting Public IP Web {} ===================",
        env!("CARGO_PKG_VERSION")
    );
    println!();
}
