//! Input validation for free-text fields.

use crate::error::CatalogError;

/// Trims `value` and rejects it if nothing is left.
///
/// # Examples
///
/// ```rust
/// use moviweb_core::utils::validation::require_text;
///
/// assert_eq!(require_text("  Ada ", "name").unwrap(), "Ada");
/// assert!(require_text("   ", "name").is_err());
/// ```
pub fn require_text<'a>(value: &'a str, field: &str) -> Result<&'a str, CatalogError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::Validation(format!(
            "{field} must not be empty"
        )));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_rejects_blank() {
        for input in ["", " ", "\t\n"] {
            let err = require_text(input, "title").unwrap_err();
            assert_eq!(err.to_string(), "title must not be empty");
        }
    }

    #[test]
    fn test_require_text_trims() {
        assert_eq!(require_text("  The Matrix  ", "title").unwrap(), "The Matrix");
    }
}
