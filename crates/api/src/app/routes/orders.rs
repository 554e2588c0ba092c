use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use orderdesk_core::OrderId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/:order_id", get(get_order))
        .route("/:order_id/processOrder", post(process_order))
}

fn parse_order_id(raw: &str) -> Result<OrderId, axum::response::Response> {
    raw.parse()
        .map_err(|_| errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid order id"))
}

pub async fn process_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(order_id): Path<String>,
) -> axum::response::Response {
    let order_id = match parse_order_id(&order_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.process_order(order_id) {
        Ok(outcome) => (
            StatusCode::OK,
            Json(dto::ProcessOrderResponse {
                order_id: outcome.order_id,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(order_id = %order_id, error = %e, "order processing failed");
            errors::process_error_to_response(e)
        }
    }
}

pub async fn get_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(order_id): Path<String>,
) -> axum::response::Response {
    let order_id = match parse_order_id(&order_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.order(order_id) {
        Ok(Some(order)) => (StatusCode::OK, Json(dto::order_to_json(&order))).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "order not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}
