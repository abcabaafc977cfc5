pub mod errors;
pub mod resolution;

// Re-export key types for convenience
pub use errors::CoreError;
pub use resolution::{
    resolver_fn, ConcreteType, ConstructionStrategy, DependencyDescriptor, DependencyResolver,
    FnResolver, Instantiator, ResolverChain, StrategyKind, TableResolver, TypeKey, TypeRelations,
    TypeToken,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get crate version
pub fn version() -> &'static str {
    VERSION
}
