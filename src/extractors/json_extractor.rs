use crate::utils::api_response;
use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::Response,
    Json,
};
use serde::de::DeserializeOwned;
use std::future::Future;
use tracing::debug;

/// `Json<T>` that answers every rejection with the `ok: false` envelope.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(payload)) => Ok(JsonBody(payload)),
                Err(rejection) => {
                    debug!(reason = %rejection.body_text(), "rejected request body");

                    Err(api_response::failure(
                        Some("Expected JSON body"),
                        None,
                        Some(StatusCode::BAD_REQUEST),
                    ))
                }
            }
        }
    }
}
