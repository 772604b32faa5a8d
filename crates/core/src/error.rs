#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// `key` is the primary id, or a composite key such as `home/hero-title`.
    #[error("Entity not found: {entity} with key {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`] keyed by any displayable id.
    pub fn not_found(entity: &'static str, key: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_formats_numeric_key() {
        let err = CoreError::not_found("PortfolioItem", 42);
        assert_eq!(
            err.to_string(),
            "Entity not found: PortfolioItem with key 42"
        );
    }

    #[test]
    fn not_found_formats_composite_key() {
        let err = CoreError::not_found("PageContent", "home/hero-title");
        assert!(err.to_string().ends_with("home/hero-title"));
    }
}
