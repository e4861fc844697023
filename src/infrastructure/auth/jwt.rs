use jsonwebtoken::{encode, Header, decode, Validation, TokenData, Algorithm};
use chrono::{Utc, Duration};

use crate::constants::ADMIN_SUBJECT;
use crate::entities::session::{Claims, Role};
use crate::repositories::token::TokenService;
use crate::settings::{AppConfig, SessionKeys};
use crate::errors::AuthError;

const JWT_ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Clone)]
pub struct JwtService {
    keys: SessionKeys,
    expiration: Duration,
}

impl JwtService {
    pub fn new(config: &AppConfig) -> Self {
        JwtService {
            keys: SessionKeys::from(config),
            expiration: Duration::hours(config.session_ttl_hours),
        }
    }

    pub fn with_expiration(secret: &str, expiration: Duration) -> Self {
        JwtService {
            keys: SessionKeys::from_secret(secret),
            expiration,
        }
    }

    pub fn create_session_jwt(&self, email: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = (now + self.expiration).timestamp().max(0) as usize;

        let claims = Claims {
            sub: ADMIN_SUBJECT.to_string(),
            email: email.to_string(),
            role: Role::Admin,
            iat: now.timestamp() as usize,
            exp,
        };

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.keys.encoding).map_err(|e| {
            tracing::error!("Failed to sign session token: {}", e);
            AuthError::TokenCreation
        })
    }

    pub fn decode_session_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.validate_exp = true;
        validation.sub = Some(ADMIN_SUBJECT.to_string());

        decode::<Claims>(
            token,
            &self.keys.decoding,
            &validation
        )
        .map_err(AuthError::from)
    }
}

impl TokenService for JwtService {
    fn issue(&self, email: &str) -> Result<String, AuthError> {
        self.create_session_jwt(email)
    }

    fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        self.decode_session_jwt(token).map(|data| data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret-that-is-long-enough-123";

    #[test]
    fn issued_token_verifies_and_expires_in_a_day() {
        let service = JwtService::with_expiration(SECRET, Duration::hours(24));
        let token = service.issue("admin@example.com").unwrap();

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.email, "admin@example.com");

        let ttl = claims.exp as i64 - Utc::now().timestamp();
        assert!((ttl - 24 * 3600).abs() <= 5, "unexpected ttl {ttl}");
    }

    #[test]
    fn expired_token_is_rejected() {
        let service = JwtService::with_expiration(SECRET, Duration::hours(-1));
        let token = service.issue("admin@example.com").unwrap();

        assert_eq!(service.verify(&token), Err(AuthError::TokenExpired));
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let issuer = JwtService::with_expiration("another-secret-that-is-also-long-enough", Duration::hours(1));
        let verifier = JwtService::with_expiration(SECRET, Duration::hours(1));
        let token = issuer.issue("admin@example.com").unwrap();

        assert_eq!(verifier.verify(&token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn garbage_is_rejected() {
        let service = JwtService::with_expiration(SECRET, Duration::hours(1));
        assert_eq!(service.verify("not.a.jwt"), Err(AuthError::InvalidToken));
    }
}
