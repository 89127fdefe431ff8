//! Status endpoints.

use axum::Json;
use common::{HelloResponse, RootResponse};

/// GET / — returns the service name and status.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse::now())
}

/// GET /hello — returns the welcome message.
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse::now())
}
