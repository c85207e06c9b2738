//! Domain error types.
//!
//! These errors represent values that cannot form a valid route. They are
//! distinct from store/IO errors.

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// An edge attribute is below zero
    #[error("{attribute} must not be negative (got {value})")]
    NegativeAttribute { attribute: &'static str, value: f64 },

    /// An edge attribute is NaN or infinite
    #[error("{attribute} must be a finite number (got {value})")]
    NonFiniteAttribute { attribute: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::NegativeAttribute {
            attribute: "cost",
            value: -5.0,
        };
        assert_eq!(err.to_string(), "cost must not be negative (got -5)");

        let err = DomainError::NonFiniteAttribute {
            attribute: "time",
            value: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "time must be a finite number (got inf)");
    }
}
