pub mod config;
pub mod controllers;
pub mod dtos;
pub mod extractors;
pub mod resources;
pub mod routes;
pub mod services;
pub mod utils;

use services::listings_client::ListingsClient;
use std::sync::Arc;
use tracing::info;

pub async fn run(listings: ListingsClient) -> std::io::Result<()> {
    let app = routes::app_router(Arc::new(listings));

    let addr = format!("{}:{}", *config::server::APP_HOST, *config::server::APP_PORT);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {addr}");

    axum::serve(listener, app).await
}
