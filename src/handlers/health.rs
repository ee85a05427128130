use actix_web::{HttpResponse, Responder, get};

use crate::error::AppError;

#[get("/")]
pub async fn hello() -> impl Responder {
    HttpResponse::Ok().body("Volunteer Shifts API v1.0")
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}

// Fallback for unmatched routes
pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound("Route not found".to_string()))
}
