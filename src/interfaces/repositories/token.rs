use crate::{entities::session::Claims, errors::AuthError};

/// Mints and checks admin session tokens.
pub trait TokenService: Send + Sync {
    fn issue(&self, email: &str) -> Result<String, AuthError>;

    fn verify(&self, token: &str) -> Result<Claims, AuthError>;
}
