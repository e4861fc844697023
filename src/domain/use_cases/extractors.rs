use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::{entities::session::Claims, errors::AuthError};

/// Claims the session guard attached to an admin request.
/// Usage: add `session: AdminSession` to a handler under `/admin`.
#[derive(Debug)]
pub struct AdminSession(pub Claims);

impl FromRequest for AdminSession {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) => ready(Ok(AdminSession(claims.clone()))),
            None => ready(Err(AuthError::InvalidToken.into())),
        }
    }
}
