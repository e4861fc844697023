use std::borrow::Cow;

use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::errors::AppError;

/// A list-shaped content kind addressed by a store-assigned id.
pub trait CollectionEntity: Serialize + Clone + Send + Sync + Unpin + 'static {
    /// Request body accepted by create and update.
    type Input: Validate + DeserializeOwned + Send + Sync + 'static;

    /// Normalized write with every default resolved.
    type Draft: Send + Sync + 'static;

    /// Human name used in error messages, e.g. "Service".
    const LABEL: &'static str;

    fn draft(input: Self::Input) -> Result<Self::Draft, AppError>;

    fn id(&self) -> Uuid;

    /// Fresh record with a new id and timestamps.
    fn new_record(draft: &Self::Draft) -> Self;

    /// Same record rewritten from `draft`; keeps id and creation time.
    fn revise(&self, draft: &Self::Draft) -> Self;
}

/// A content kind with exactly one logical row. A missing row reads as
/// `Default::default()`, which holds the documented defaults.
pub trait SingletonEntity: Serialize + Default + Clone + Send + Sync + Unpin + 'static {
    type Input: Validate + DeserializeOwned + Send + Sync + 'static;

    const LABEL: &'static str;

    /// Overlays a request on the current content; absent optional fields keep
    /// their current values.
    fn apply(self, input: Self::Input) -> Self;
}

// ───── Validation Helpers ───────────────────────────────────────────

pub fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Blank is accepted (treated as absent); anything else must be http(s).
pub fn optional_http_url(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }

    match url::Url::parse(value.trim()) {
        Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => Ok(()),
        Ok(_) => Err(new_validation_error("invalid_url_scheme", "URL must start with http:// or https://")),
        Err(_) => Err(new_validation_error("invalid_url", "Invalid URL format")),
    }
}

pub fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}

/// `Some(trimmed)` when the value carries text, `None` for absent or blank.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
