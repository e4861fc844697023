use actix_web::{get, http::header, post, web, Either, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    constants::{ADMIN_LOGIN_PATH, ADMIN_ROOT},
    entities::session::LoginForm,
    errors::AuthError,
    use_cases::extractors::AdminSession,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct LoginPrompt {
    pub from: Option<String>,
}

#[get("/login")]
pub async fn login_page(query: web::Query<LoginPrompt>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Admin login required",
        "action": ADMIN_LOGIN_PATH,
        "from": query.from,
    }))
}

/// Accepts the login form as JSON or urlencoded.
#[post("/login")]
#[instrument(skip(state, form))]
pub async fn login(
    state: web::Data<AppState>,
    form: Either<web::Json<LoginForm>, web::Form<LoginForm>>,
) -> Result<HttpResponse, AuthError> {
    let form = match form {
        Either::Left(json) => json.into_inner(),
        Either::Right(urlencoded) => urlencoded.into_inner(),
    };

    let token = state.sessions.login(&form)?;

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, ADMIN_ROOT))
        .cookie(state.session_cookie.issue(token))
        .finish())
}

#[post("/logout")]
pub async fn logout(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, ADMIN_LOGIN_PATH))
        .cookie(state.session_cookie.expire())
        .finish()
}

#[get("")]
pub async fn admin_dashboard(session: AdminSession) -> impl Responder {
    let claims = session.0;
    let expires_at = chrono::DateTime::from_timestamp(claims.exp as i64, 0)
        .map(|at| at.to_rfc3339());

    HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Welcome, {}", claims.email),
        "role": claims.role,
        "sessionExpiresAt": expires_at,
    }))
}
