use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use orderdesk_fulfillment::{ProcessError, StoreError};

pub fn process_error_to_response(err: ProcessError) -> axum::response::Response {
    match err {
        ProcessError::OrderNotFound(id) => json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("Order not found with id : {id}"),
        ),
        ProcessError::ProductNotFound(id) => json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("Product not found with id : {id}"),
        ),
        ProcessError::Domain(e) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", e.to_string())
        }
        ProcessError::Store(e) => store_error_to_response(e),
    }
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::InvalidRecord(e) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invalid_product", e.to_string())
        }
        StoreError::Backend(msg) => {
            tracing::error!(error = %msg, "store backend failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
