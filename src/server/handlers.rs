//! Request handlers for the standalone gateway.

use actix_web::{web, HttpResponse};
use serde_json::json;

/// Liveness probe; never guarded
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({"status": "ok"}))
}

/// Sample guarded endpoint
pub async fn ping() -> HttpResponse {
    HttpResponse::Ok().json(json!({"message": "pong"}))
}

/// Sample guarded endpoint echoing the request body back
pub async fn echo(body: web::Bytes) -> HttpResponse {
    HttpResponse::Ok().body(body)
}
