use thiserror::Error;

/// Domain-level errors raised while assembling a dataset
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Empty {0} name")]
    EmptyName(&'static str),

    #[error("Duplicate customer: {0}")]
    DuplicateCustomer(String),

    #[error("Unknown customer: {0}")]
    UnknownCustomer(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(DomainError::EmptyName("item").to_string(), "Empty item name");
        assert_eq!(
            DomainError::DuplicateCustomer("Joe".to_string()).to_string(),
            "Duplicate customer: Joe"
        );
        assert_eq!(
            DomainError::UnknownCustomer("Zed".to_string()).to_string(),
            "Unknown customer: Zed"
        );
    }

    #[test]
    fn error_comparison_works() {
        assert_eq!(DomainError::EmptyName("shop"), DomainError::EmptyName("shop"));
        assert_ne!(
            DomainError::EmptyName("shop"),
            DomainError::UnknownCustomer("shop".to_string())
        );
    }
}
