use actix_web::cookie::{time::Duration, Cookie, SameSite};

use crate::{constants::SESSION_COOKIE_MAX_AGE_SECS, settings::AppConfig};

/// Builds the admin session cookie with the same attributes on issue and on
/// removal, so browsers match and drop it.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    name: String,
    secure: bool,
}

impl SessionCookie {
    pub fn new(config: &AppConfig) -> Self {
        SessionCookie {
            name: config.auth_cookie_name.clone(),
            secure: config.is_production(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn issue(&self, token: String) -> Cookie<'static> {
        self.build(token, Duration::seconds(SESSION_COOKIE_MAX_AGE_SECS))
    }

    /// Empty value with `Max-Age=-1`: expire immediately.
    pub fn expire(&self) -> Cookie<'static> {
        self.build(String::new(), Duration::seconds(-1))
    }

    fn build(&self, value: String, max_age: Duration) -> Cookie<'static> {
        Cookie::build(self.name.clone(), value)
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .path("/")
            .max_age(max_age)
            .finish()
    }
}
