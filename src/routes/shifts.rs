use actix_web::web;

use crate::error::AppError;
use crate::handlers::shifts;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Malformed query strings get the same JSON error body as handler failures
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into());

    cfg.service(
        web::scope("/shifts")
            .app_data(query_config)
            .route("", web::get().to(shifts::get_shifts)),
    );
}
