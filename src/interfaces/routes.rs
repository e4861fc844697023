use actix_web::web;

use crate::handlers::{home::home, system::health_check};

mod admin;
mod content;
mod json_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home).service(health_check);

    cfg.configure(content::config_public_routes)
        .configure(admin::config_routes)
        .configure(json_error::config_routes);
}
