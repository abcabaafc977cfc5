//! Fail-fast validation of construction strategies
//!
//! An [`Instantiator`] binds one target type to one construction strategy.
//! The binding is checked when it is created: the strategy's declared
//! return type is unwrapped to its raw form and must be assignable to the
//! target. A binding that fails the check never exists as a value, so a
//! successfully constructed instantiator is valid for its whole lifetime.
//!
//! Known limitation: only the unwrapped raw return type participates in
//! the assignability check. Type arguments are ignored, so a strategy
//! declared to return `Provider<Gadget>` passes validation against any
//! target that raw `Provider` is assignable to. Erasure-based containers
//! behave the same way.

use crate::errors::CoreError;
use crate::resolution::relations::TypeRelations;
use crate::resolution::strategy::ConstructionStrategy;
use crate::resolution::token::TypeKey;

/// A construction strategy validated against a target type
#[derive(Debug)]
pub struct Instantiator {
    target: TypeKey,
    strategy: ConstructionStrategy,
    effective_return: TypeKey,
}

impl Instantiator {
    /// Validate a strategy against a target type and bind them
    ///
    /// This is the only way to obtain an `Instantiator`. Fails with a
    /// configuration error when the declared return type has no raw form
    /// or when the unwrapped return type is not assignable to the target.
    /// The error is fatal wiring feedback and must not be retried.
    pub fn bind(
        target: TypeKey,
        strategy: ConstructionStrategy,
        relations: &TypeRelations,
    ) -> Result<Self, CoreError> {
        let effective_return = strategy
            .return_type()
            .unwrap_to_raw()
            .copied()
            .ok_or_else(|| {
                CoreError::unresolvable_return_type(
                    strategy.to_string(),
                    target.type_name(),
                    strategy.return_type().to_string(),
                )
            })?;

        if !relations.is_assignable(&effective_return, &target) {
            return Err(CoreError::invalid_binding(
                strategy.to_string(),
                target.type_name(),
                effective_return.type_name(),
            ));
        }

        tracing::debug!(
            strategy = %strategy,
            target = target.type_name(),
            effective = effective_return.type_name(),
            "validated construction binding"
        );

        Ok(Self {
            target,
            strategy,
            effective_return,
        })
    }

    /// Get the bound target type
    pub fn target(&self) -> &TypeKey {
        &self.target
    }

    /// Get the validated strategy
    pub fn strategy(&self) -> &ConstructionStrategy {
        &self.strategy
    }

    /// Get the effective (unwrapped) return type
    pub fn effective_return_type(&self) -> &TypeKey {
        &self.effective_return
    }
}

/// Validate a registry's stream of (target, strategy) pairs, fail-fast
///
/// The first invalid binding aborts the sweep; container setup must not
/// proceed past a configuration error.
pub fn validate_bindings(
    relations: &TypeRelations,
    pairs: impl IntoIterator<Item = (TypeKey, ConstructionStrategy)>,
) -> Result<Vec<Instantiator>, CoreError> {
    pairs
        .into_iter()
        .map(|(target, strategy)| Instantiator::bind(target, strategy, relations))
        .collect()
}
