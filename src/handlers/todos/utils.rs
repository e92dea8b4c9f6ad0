use uuid::Uuid;

use crate::error::ApiError;

/// Parse an id path segment into the store's native identifier.
///
/// A malformed id maps to 404, never 400: an id that cannot exist and an id
/// that does not exist are the same "unknown resource" to the caller.
pub fn parse_todo_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::not_found("Todo not found"))
}

/// Trim and validate todo text; empty-after-trim is a validation error.
pub fn validate_text(text: &str) -> Result<String, ApiError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation("Todo text cannot be empty"));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn malformed_id_is_not_found() {
        let err = parse_todo_id("123").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn well_formed_id_parses() {
        let id = Uuid::new_v4();
        assert_eq!(parse_todo_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn text_is_trimmed() {
        assert_eq!(validate_text("  buy milk  ").unwrap(), "buy milk");
    }

    #[test]
    fn blank_text_is_rejected() {
        for text in ["", "   ", "\t\n"] {
            let err = validate_text(text).unwrap_err();
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        }
    }
}
