use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    web, Error, HttpMessage, HttpResponse,
};
use futures_util::future::{ok, LocalBoxFuture, Ready};
use std::{rc::Rc, task::{Context, Poll}};

use crate::{
    constants::{ADMIN_LOGIN_PATH, ADMIN_ROOT, LOGIN_RETURN_PARAM},
    entities::session::SessionState,
    AppState,
};

/// What the guard does with an `/admin` request.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    Pass,
    Redirect(String),
    /// Redirect and drop the session cookie.
    ExpireAndRedirect(String),
}

/// Decides what happens to a request that reached the `/admin` scope.
/// `path` is the decoded request path.
pub fn decide(path: &str, state: &SessionState) -> GuardDecision {
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    let on_login = path == ADMIN_LOGIN_PATH;

    match state {
        SessionState::Authenticated(_) if on_login => GuardDecision::Redirect(ADMIN_ROOT.to_string()),
        SessionState::Authenticated(_) => GuardDecision::Pass,
        _ if on_login => GuardDecision::Pass,
        SessionState::Unauthenticated => GuardDecision::Redirect(format!(
            "{}?{}={}",
            ADMIN_LOGIN_PATH,
            LOGIN_RETURN_PARAM,
            urlencoding::encode(path)
        )),
        SessionState::TokenInvalid => GuardDecision::ExpireAndRedirect(ADMIN_LOGIN_PATH.to_string()),
    }
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Gates every request routed into the `/admin` scope on the session cookie.
/// Never fails outward: anything that goes wrong ends in a redirect to the
/// login page.
pub struct SessionGuard;

impl<S> Transform<S, ServiceRequest> for SessionGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionGuardService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(SessionGuardService {
            service: Rc::new(service),
        })
    }
}

pub struct SessionGuardService<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for SessionGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            // The router matched on the decoded path, so decide on that too.
            let path = req.match_info().as_str().to_string();

            let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
                tracing::error!("AppState missing in session guard");
                let decision = decide(&path, &SessionState::Unauthenticated);
                return match decision {
                    GuardDecision::Pass => service.call(req).await,
                    _ => Ok(req.into_response(redirect(ADMIN_LOGIN_PATH))),
                };
            };

            let token = req.cookie(state.session_cookie.name()).map(|c| c.value().to_string());
            let session = state.sessions.session_state(token.as_deref());

            match decide(&path, &session) {
                GuardDecision::Pass => {
                    if let SessionState::Authenticated(claims) = session {
                        req.extensions_mut().insert(claims);
                    }
                    service.call(req).await
                }
                GuardDecision::Redirect(location) => Ok(req.into_response(redirect(&location))),
                GuardDecision::ExpireAndRedirect(location) => {
                    let mut response = redirect(&location);
                    if let Err(e) = response.add_cookie(&state.session_cookie.expire()) {
                        tracing::warn!("Failed to expire session cookie: {}", e);
                    }
                    Ok(req.into_response(response))
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::session::{Claims, Role};

    fn authenticated() -> SessionState {
        SessionState::Authenticated(Claims {
            sub: "admin".into(),
            email: "admin@example.com".into(),
            role: Role::Admin,
            iat: 0,
            exp: 0,
        })
    }

    #[test]
    fn login_page_redirects_authenticated_admin_home() {
        assert_eq!(decide("/admin/login", &authenticated()), GuardDecision::Redirect("/admin".into()));
    }

    #[test]
    fn login_page_is_open_otherwise() {
        assert_eq!(decide("/admin/login", &SessionState::Unauthenticated), GuardDecision::Pass);
        assert_eq!(decide("/admin/login", &SessionState::TokenInvalid), GuardDecision::Pass);
    }

    #[test]
    fn authenticated_requests_pass() {
        assert_eq!(decide("/admin", &authenticated()), GuardDecision::Pass);
        assert_eq!(decide("/admin/content/articles", &authenticated()), GuardDecision::Pass);
    }

    #[test]
    fn anonymous_requests_are_sent_to_login_with_return_path() {
        assert_eq!(
            decide("/admin/content/articles", &SessionState::Unauthenticated),
            GuardDecision::Redirect("/admin/login?from=%2Fadmin%2Fcontent%2Farticles".into())
        );
        assert_eq!(
            decide("/admin", &SessionState::Unauthenticated),
            GuardDecision::Redirect("/admin/login?from=%2Fadmin".into())
        );
    }

    #[test]
    fn invalid_tokens_are_expired() {
        assert_eq!(
            decide("/admin/content/hero", &SessionState::TokenInvalid),
            GuardDecision::ExpireAndRedirect("/admin/login".into())
        );
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(decide("/admin/login/", &SessionState::Unauthenticated), GuardDecision::Pass);
    }
}
