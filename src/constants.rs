use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const ADMIN_ROOT: &str = "/admin";
pub const ADMIN_LOGIN_PATH: &str = "/admin/login";
pub const LOGIN_RETURN_PARAM: &str = "from";

pub const DEFAULT_AUTH_COOKIE_NAME: &str = "admin-auth-token";
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;
/// Cookie lifetime on issuance, independent of the token's own `exp`.
pub const SESSION_COOKIE_MAX_AGE_SECS: i64 = 60 * 60 * 24;
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

pub const ADMIN_SUBJECT: &str = "admin";

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_ARTICLES_PER_PAGE: i64 = 6;

pub const DEFAULT_ARTICLE_IMAGE_URL: &str = "https://placehold.co/600x400.png";
pub const DEFAULT_ARTICLE_IMAGE_HINT: &str = "default article image";
pub const DEFAULT_AVATAR_URL: &str = "https://placehold.co/80x80.png";
pub const DEFAULT_AVATAR_HINT: &str = "person avatar";
pub const DEFAULT_TECHNOLOGY_COLOR: &str = "#FFFFFF";

pub const SINGLETON_ROW_ID: i32 = 1;
