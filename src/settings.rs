use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use jsonwebtoken::{DecodingKey, EncodingKey};
use std::{env, fmt, str::FromStr};
use zeroize::Zeroizing;

use crate::constants::{DEFAULT_AUTH_COOKIE_NAME, DEFAULT_SESSION_TTL_HOURS, MIN_JWT_SECRET_LENGTH};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    #[serde(default)]
    pub database_url: String,

    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,

    #[serde(default)]
    pub jwt_secret: String,

    #[serde(default = "default_session_ttl")]
    pub session_ttl_hours: i64,

    #[serde(default = "default_cookie_name")]
    pub auth_cookie_name: String,

    #[serde(default)]
    pub admin_email: String,

    #[serde(default)]
    pub admin_password: String,

    #[serde(default = "default_author")]
    pub default_author: String,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Portfolio-Site".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_max_connections() -> u32 {
    20
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}
fn default_session_ttl() -> i64 {
    DEFAULT_SESSION_TTL_HOURS
}
fn default_cookie_name() -> String {
    DEFAULT_AUTH_COOKIE_NAME.to_string()
}
fn default_author() -> String {
    "Site Owner".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            env: default_env(),
            name: default_name(),
            port: default_port(),
            host: default_host(),
            worker_count: default_worker_count(),
            database_url: String::new(),
            database_max_connections: default_max_connections(),
            cors_allowed_origins: default_cors_origins(),
            jwt_secret: String::new(),
            session_ttl_hours: default_session_ttl(),
            auth_cookie_name: default_cookie_name(),
            admin_email: String::new(),
            admin_password: String::new(),
            default_author: default_author(),
        }
    }
}

impl AppConfig {
    /// Loads `config/default`, then `config/<APP_ENV>`, then `APP_*` variables.
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors_allowed_origins"),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.env = env_name;

        config.validate()?;
        Ok(config)
    }

    /// Collects every configuration problem into a single error so startup
    /// reports them all at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.database_url.trim().is_empty() {
            errors.push("DATABASE_URL cannot be empty");
        }
        if self.jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            errors.push("JWT_SECRET must be at least 32 characters");
        }
        if self.admin_email.trim().is_empty() {
            errors.push("ADMIN_EMAIL must be set");
        }
        if self.admin_password.is_empty() {
            errors.push("ADMIN_PASSWORD must be set");
        }
        if self.session_ttl_hours <= 0 {
            errors.push("SESSION_TTL_HOURS must be positive");
        }
        if self.auth_cookie_name.trim().is_empty() {
            errors.push("AUTH_COOKIE_NAME cannot be empty");
        }
        if self.is_production() && self.cors_origins().iter().any(|o| o == "*") {
            errors.push("Wildcard CORS (*) is not allowed in production");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .iter()
            .flat_map(|origin| origin.split(','))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// `None` when either half of the credential pair is missing.
    pub fn admin_credentials(&self) -> Option<AdminCredentials> {
        if self.admin_email.trim().is_empty() || self.admin_password.is_empty() {
            return None;
        }

        Some(AdminCredentials {
            email: Zeroizing::new(self.admin_email.clone()),
            password: Zeroizing::new(self.admin_password.clone()),
        })
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

trait Redact {
    fn redact(&self) -> &str;
}

impl Redact for str {
    fn redact(&self) -> &str {
        if self.is_empty() {
            "[MISSING]"
        } else if self.len() < MIN_JWT_SECRET_LENGTH {
            "[TOO_SHORT]"
        } else {
            "[REDACTED]"
        }
    }
}

impl Redact for String {
    fn redact(&self) -> &str {
        self.as_str().redact()
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("worker_count", &self.worker_count)
            .field("database_url", &self.database_url.redact())
            .field("database_max_connections", &self.database_max_connections)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("jwt_secret", &self.jwt_secret.redact())
            .field("session_ttl_hours", &self.session_ttl_hours)
            .field("auth_cookie_name", &self.auth_cookie_name)
            .field("admin_email", &self.admin_email)
            .field("admin_password", &if self.admin_password.is_empty() { "[MISSING]" } else { "[REDACTED]" })
            .field("default_author", &self.default_author)
            .finish()
    }
}

/// The single administrator credential pair the login form is checked against.
#[derive(Clone)]
pub struct AdminCredentials {
    pub email: Zeroizing<String>,
    pub password: Zeroizing<String>,
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email.as_str())
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Clone)]
pub struct SessionKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
}

impl SessionKeys {
    pub fn from_secret(secret: &str) -> Self {
        let secret = Zeroizing::new(secret.to_owned());

        SessionKeys {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

impl From<&AppConfig> for SessionKeys {
    fn from(config: &AppConfig) -> Self {
        SessionKeys::from_secret(&config.jwt_secret)
    }
}

impl fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionKeys")
            .field("encoding", &"[REDACTED]")
            .field("decoding", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AppConfig {
        AppConfig {
            database_url: "postgres://localhost/portfolio".into(),
            jwt_secret: "a-very-long-secret-used-only-for-unit-tests".into(),
            admin_email: "admin@example.com".into(),
            admin_password: "hunter2".into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn missing_admin_credentials_fail_fast() {
        let config = AppConfig {
            admin_email: String::new(),
            admin_password: String::new(),
            ..valid_config()
        };

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("ADMIN_EMAIL"));
        assert!(err.contains("ADMIN_PASSWORD"));
        assert!(config.admin_credentials().is_none());
    }

    #[test]
    fn short_secret_is_rejected() {
        let config = AppConfig {
            jwt_secret: "short".into(),
            ..valid_config()
        };

        assert!(config.validate().unwrap_err().to_string().contains("JWT_SECRET"));
    }

    #[test]
    fn wildcard_cors_rejected_in_production() {
        let config = AppConfig {
            env: AppEnvironment::Production,
            ..valid_config()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let rendered = format!("{:?}", valid_config());
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("a-very-long-secret"));
    }

    #[test]
    fn defaults_match_session_contract() {
        let config = AppConfig::default();
        assert_eq!(config.auth_cookie_name, "admin-auth-token");
        assert_eq!(config.session_ttl_hours, 24);
    }
}
