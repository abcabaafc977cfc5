use std::fmt;

use crate::resolution::token::{TypeKey, TypeToken};

/// Kind of construction strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Constructor,
    FactoryMethod,
}

impl StrategyKind {
    fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Constructor => "constructor",
            StrategyKind::FactoryMethod => "factory",
        }
    }
}

/// Reified handle to a constructor or factory method
///
/// Carries the declaring type, the formal parameter list and the declared
/// return type. The declared return type may still be parameterized; the
/// validator reduces it to its raw form before checking it against a
/// target.
#[derive(Debug, Clone)]
pub struct ConstructionStrategy {
    declaring_type: TypeKey,
    name: String,
    kind: StrategyKind,
    parameters: Vec<TypeToken>,
    return_type: TypeToken,
}

impl ConstructionStrategy {
    /// Create a constructor strategy for a type
    ///
    /// A constructor's declared return type is the declaring type itself.
    pub fn constructor<T: 'static>(parameters: Vec<TypeToken>) -> Self {
        Self {
            declaring_type: TypeKey::of::<T>(),
            name: "new".to_string(),
            kind: StrategyKind::Constructor,
            parameters,
            return_type: TypeToken::simple::<T>(),
        }
    }

    /// Create a factory-method strategy declared on a type
    pub fn factory<T: 'static + ?Sized>(
        name: impl Into<String>,
        parameters: Vec<TypeToken>,
        return_type: TypeToken,
    ) -> Self {
        Self {
            declaring_type: TypeKey::of::<T>(),
            name: name.into(),
            kind: StrategyKind::FactoryMethod,
            parameters,
            return_type,
        }
    }

    /// Get the type declaring this strategy
    pub fn declaring_type(&self) -> &TypeKey {
        &self.declaring_type
    }

    /// Get the strategy name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the strategy kind
    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    /// Get the formal parameter list
    pub fn parameters(&self) -> &[TypeToken] {
        &self.parameters
    }

    /// Get the declared return type
    pub fn return_type(&self) -> &TypeToken {
        &self.return_type
    }
}

impl fmt::Display for ConstructionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}::{}({})",
            self.declaring_type.type_name(),
            self.name,
            self.kind.as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget;
    struct WidgetFactory;

    #[test]
    fn test_constructor_returns_declaring_type() {
        let strategy = ConstructionStrategy::constructor::<Widget>(vec![]);

        assert_eq!(strategy.kind(), StrategyKind::Constructor);
        assert_eq!(strategy.name(), "new");
        assert!(strategy.declaring_type().is::<Widget>());
        assert!(strategy.return_type().unwrap_to_raw().unwrap().is::<Widget>());
    }

    #[test]
    fn test_factory_carries_declared_return_type() {
        let strategy = ConstructionStrategy::factory::<WidgetFactory>(
            "make_widget",
            vec![TypeToken::simple::<u32>()],
            TypeToken::simple::<Widget>(),
        );

        assert_eq!(strategy.kind(), StrategyKind::FactoryMethod);
        assert_eq!(strategy.parameters().len(), 1);
        assert!(strategy.declaring_type().is::<WidgetFactory>());
        assert!(strategy.return_type().unwrap_to_raw().unwrap().is::<Widget>());
    }

    #[test]
    fn test_display_names_strategy() {
        let strategy = ConstructionStrategy::factory::<WidgetFactory>(
            "make_widget",
            vec![],
            TypeToken::simple::<Widget>(),
        );
        let rendered = strategy.to_string();
        assert!(rendered.contains("WidgetFactory"));
        assert!(rendered.contains("make_widget"));
        assert!(rendered.contains("factory"));
    }
}
