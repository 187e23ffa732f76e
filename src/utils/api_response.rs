use crate::resources::filter_set::FilterSet;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Serialize)]
pub struct SuccessResponse<'a, T: Serialize> {
    pub ok: bool,
    pub filters: &'a FilterSet,
    pub results: T,
}

#[derive(Serialize)]
pub struct FailureResponse<'a> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<&'a FilterSet>,
}

pub fn success<T: Serialize>(filters: &FilterSet, results: T) -> Response {
    let resp = SuccessResponse {
        ok: true,
        filters,
        results,
    };
    (StatusCode::OK, axum::Json(resp)).into_response()
}

pub fn failure(
    message: Option<&str>,
    filters: Option<&FilterSet>,
    status: Option<StatusCode>,
) -> Response {
    let resp = FailureResponse {
        ok: false,
        status: None,
        error: message.unwrap_or("An error occurred").to_string(),
        details: None,
        filters,
    };
    let status = status.unwrap_or(StatusCode::BAD_REQUEST);
    (status, axum::Json(resp)).into_response()
}

/// 502 carrying whatever the listings API told us.
pub fn upstream_failure(
    message: &str,
    upstream_status: Option<u16>,
    details: Option<String>,
    filters: &FilterSet,
) -> Response {
    let resp = FailureResponse {
        ok: false,
        status: upstream_status,
        error: message.to_string(),
        details,
        filters: Some(filters),
    };
    (StatusCode::BAD_GATEWAY, axum::Json(resp)).into_response()
}
