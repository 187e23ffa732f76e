use crate::controllers::search_controller::search;
use crate::services::listings_client::ListingsClient;
use axum::{routing::post, Router};
use std::sync::Arc;

pub fn search_router() -> Router<Arc<ListingsClient>> {
    Router::new().route("/", post(search))
}
