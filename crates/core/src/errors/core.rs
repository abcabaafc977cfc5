use thiserror::Error;

/// Core error type for the armature resolution core
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Construction strategy {strategy} does not produce type {requested}: declared return type {declared} cannot be reduced to a raw type")]
    UnresolvableReturnType {
        strategy: String,
        requested: String,
        declared: String,
    },

    #[error("Construction strategy {strategy} does not produce type {requested}: effective return type is {found}")]
    InvalidBinding {
        strategy: String,
        requested: String,
        found: String,
    },
}

impl CoreError {
    /// Create a new configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a new unresolvable-return-type error
    pub fn unresolvable_return_type(
        strategy: impl Into<String>,
        requested: impl Into<String>,
        declared: impl Into<String>,
    ) -> Self {
        Self::UnresolvableReturnType {
            strategy: strategy.into(),
            requested: requested.into(),
            declared: declared.into(),
        }
    }

    /// Create a new invalid binding error
    pub fn invalid_binding(
        strategy: impl Into<String>,
        requested: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::InvalidBinding {
            strategy: strategy.into(),
            requested: requested.into(),
            found: found.into(),
        }
    }

    /// Whether this error signals an invalid construction binding
    pub fn is_binding_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidBinding { .. } | Self::UnresolvableReturnType { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_binding_message_names_both_types() {
        let err = CoreError::invalid_binding("Widget::new(constructor)", "Gadget", "Widget");
        let message = err.to_string();
        assert!(message.contains("Widget::new(constructor)"));
        assert!(message.contains("Gadget"));
        assert!(message.contains("Widget"));
    }

    #[test]
    fn test_binding_error_classification() {
        assert!(CoreError::invalid_binding("s", "a", "b").is_binding_error());
        assert!(CoreError::unresolvable_return_type("s", "a", "T").is_binding_error());
        assert!(!CoreError::configuration("bad wiring").is_binding_error());
    }
}
