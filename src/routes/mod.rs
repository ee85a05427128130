use actix_web::web;

use crate::handlers::health;

pub mod shifts;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health::hello)
        .service(health::health)
        .service(web::scope("/api/v1").configure(shifts::configure))
        .default_service(web::route().to(health::not_found));
}
