use crate::{
    entities::session::{LoginForm, SessionState},
    errors::AuthError,
    repositories::token::TokenService,
    settings::{AdminCredentials, AppConfig},
};

/// Checks the login form against the single configured administrator and
/// mints session tokens.
pub struct SessionIssuer<T>
where
    T: TokenService,
{
    pub token_service: T,
    credentials: Option<AdminCredentials>,
    has_secret: bool,
}

impl<T> SessionIssuer<T>
where
    T: TokenService,
{
    pub fn new(config: &AppConfig, token_service: T) -> Self {
        SessionIssuer {
            token_service,
            credentials: config.admin_credentials(),
            has_secret: !config.jwt_secret.is_empty(),
        }
    }

    /// Returns a signed token on a verbatim match of both fields.
    pub fn login(&self, form: &LoginForm) -> Result<String, AuthError> {
        let credentials = match (&self.credentials, self.has_secret) {
            (Some(credentials), true) => credentials,
            _ => {
                tracing::error!("Admin login attempted without admin credentials or signing secret configured");
                return Err(AuthError::Misconfigured);
            }
        };

        if form.email != credentials.email.as_str() || form.password != credentials.password.as_str() {
            tracing::warn!("Rejected admin login attempt");
            return Err(AuthError::WrongCredentials);
        }

        let token = self.token_service.issue(&form.email)?;
        tracing::info!("Admin logged in");
        Ok(token)
    }

    /// Classifies the raw cookie value.
    pub fn session_state(&self, token: Option<&str>) -> SessionState {
        match token.filter(|t| !t.is_empty()) {
            None => SessionState::Unauthenticated,
            Some(token) => match self.token_service.verify(token) {
                Ok(claims) => SessionState::Authenticated(claims),
                Err(e) => {
                    tracing::warn!("Session token rejected: {}", e);
                    SessionState::TokenInvalid
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::session::{Claims, Role};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingTokens {
        issued: AtomicUsize,
    }

    impl TokenService for CountingTokens {
        fn issue(&self, _email: &str) -> Result<String, AuthError> {
            self.issued.fetch_add(1, Ordering::SeqCst);
            Ok("signed".into())
        }

        fn verify(&self, token: &str) -> Result<Claims, AuthError> {
            match token {
                "signed" => Ok(Claims {
                    sub: "admin".into(),
                    email: "admin@example.com".into(),
                    role: Role::Admin,
                    iat: 0,
                    exp: usize::MAX,
                }),
                "stale" => Err(AuthError::TokenExpired),
                _ => Err(AuthError::InvalidToken),
            }
        }
    }

    fn config() -> AppConfig {
        AppConfig {
            jwt_secret: "a-secret-long-enough-for-the-signing-key".into(),
            admin_email: "admin@example.com".into(),
            admin_password: "correct horse".into(),
            ..Default::default()
        }
    }

    fn form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn matching_credentials_issue_a_token() {
        let issuer = SessionIssuer::new(&config(), CountingTokens::default());

        assert_eq!(issuer.login(&form("admin@example.com", "correct horse")).unwrap(), "signed");
    }

    #[test]
    fn either_wrong_field_gives_the_same_error() {
        let issuer = SessionIssuer::new(&config(), CountingTokens::default());

        assert_eq!(issuer.login(&form("admin@example.com", "nope")), Err(AuthError::WrongCredentials));
        assert_eq!(issuer.login(&form("someone@example.com", "correct horse")), Err(AuthError::WrongCredentials));
        assert_eq!(issuer.token_service.issued.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn missing_configuration_fails_before_comparing() {
        let config = AppConfig {
            admin_password: String::new(),
            ..config()
        };
        let issuer = SessionIssuer::new(&config, CountingTokens::default());

        assert_eq!(issuer.login(&form("admin@example.com", "")), Err(AuthError::Misconfigured));

        let config = AppConfig {
            jwt_secret: String::new(),
            ..self::config()
        };
        let issuer = SessionIssuer::new(&config, CountingTokens::default());

        assert_eq!(issuer.login(&form("admin@example.com", "correct horse")), Err(AuthError::Misconfigured));
    }

    #[test]
    fn cookie_values_map_to_session_states() {
        let issuer = SessionIssuer::new(&config(), CountingTokens::default());

        assert_eq!(issuer.session_state(None), SessionState::Unauthenticated);
        assert_eq!(issuer.session_state(Some("")), SessionState::Unauthenticated);
        assert_eq!(issuer.session_state(Some("stale")), SessionState::TokenInvalid);
        assert_eq!(issuer.session_state(Some("forged")), SessionState::TokenInvalid);
        assert!(matches!(issuer.session_state(Some("signed")), SessionState::Authenticated(_)));
    }
}
