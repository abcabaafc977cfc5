pub mod descriptor;
pub mod instantiator;
pub mod integration_test;
pub mod relations;
pub mod resolver;
pub mod strategy;
pub mod token;

pub use descriptor::{ConcreteType, DependencyDescriptor};
pub use instantiator::{validate_bindings, Instantiator};
pub use relations::TypeRelations;
pub use resolver::{resolver_fn, DependencyResolver, FnResolver, ResolverChain, TableResolver};
pub use strategy::{ConstructionStrategy, StrategyKind};
pub use token::{TypeKey, TypeToken};
