use actix_web::web;

use crate::{handlers::session, middlewares::session_guard::SessionGuard, routes::content};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .wrap(SessionGuard)
            .service(session::admin_dashboard)
            .service(session::login_page)
            .service(session::login)
            .service(session::logout)
            .configure(content::config_admin_routes),
    );
}
