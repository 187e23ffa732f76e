use crate::dtos::search_dto::SearchDto;
use crate::extractors::json_extractor::JsonBody;
use crate::services::listings_client::{GatewayError, ListingsClient};
use crate::utils::api_response;
use crate::utils::filter_extractor::extract_filters;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;
use tracing::{debug, warn};

pub async fn search(
    State(listings): State<Arc<ListingsClient>>,
    JsonBody(payload): JsonBody<SearchDto>,
) -> impl IntoResponse {
    let filters = extract_filters(&payload.message);
    debug!(?filters, "extracted search filters");

    match listings.search(&filters).await {
        Ok(results) => api_response::success(&filters, results),
        Err(err @ GatewayError::MissingApiKey) => {
            warn!("search rejected: listings API key is not configured");
            api_response::failure(
                Some(&err.to_string()),
                Some(&filters),
                Some(StatusCode::INTERNAL_SERVER_ERROR),
            )
        }
        Err(err) => {
            warn!(error = %err, "listings API call failed");
            let message = err.to_string();
            let status = err.upstream_status();
            api_response::upstream_failure(&message, status, err.into_details(), &filters)
        }
    }
}
