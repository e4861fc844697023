use uuid::Uuid;

use crate::errors::AppError;

/// An id that cannot be a UUID cannot name a stored record.
pub fn valid_uuid(id: &str, label: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id.trim()).map_err(|_| AppError::NotFound(format!("{} not found", label)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_id_reads_as_not_found() {
        assert!(matches!(valid_uuid("nope", "Service"), Err(AppError::NotFound(msg)) if msg == "Service not found"));
    }

    #[test]
    fn parses_hyphenated_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(valid_uuid(&id.to_string(), "Service").unwrap(), id);
    }
}
