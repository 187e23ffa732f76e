mod search;

use crate::{routes::search::search_router, services::listings_client::ListingsClient};

use axum::Router;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn app_router(listings: Arc<ListingsClient>) -> Router {
    Router::new()
        .nest("/search", search_router().with_state(listings))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
