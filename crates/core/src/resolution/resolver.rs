//! Dependency resolution strategies
//!
//! A resolver answers "which concrete type satisfies this descriptor?"
//! without constructing anything. Declining is the normal negative
//! outcome, which is what lets a chain try the next resolver in order.

use std::collections::HashMap;

use crate::resolution::descriptor::{ConcreteType, DependencyDescriptor};

/// Strategy mapping a dependency descriptor to a concrete implementing type
///
/// Implementations must be pure: no instantiation, no mutation of shared
/// state, and the same descriptor always yields the same answer against an
/// unchanged implementation. An unrecognized descriptor is `None`, never
/// an error.
pub trait DependencyResolver {
    /// Resolve a descriptor to a concrete type, or decline with `None`
    fn resolve(&self, descriptor: &DependencyDescriptor) -> Option<ConcreteType>;
}

/// Adapter exposing a plain function or closure as a resolver
pub struct FnResolver<F>(F);

/// Wrap a closure as a [`DependencyResolver`]
pub fn resolver_fn<F>(f: F) -> FnResolver<F>
where
    F: Fn(&DependencyDescriptor) -> Option<ConcreteType>,
{
    FnResolver(f)
}

impl<F> DependencyResolver for FnResolver<F>
where
    F: Fn(&DependencyDescriptor) -> Option<ConcreteType>,
{
    fn resolve(&self, descriptor: &DependencyDescriptor) -> Option<ConcreteType> {
        (self.0)(descriptor)
    }
}

/// Lookup-table-backed resolver
///
/// Bindings are registered up front with the builder-style `bind` methods;
/// resolution is a plain map lookup afterwards.
#[derive(Debug, Default)]
pub struct TableResolver {
    bindings: HashMap<DependencyDescriptor, ConcreteType>,
}

impl TableResolver {
    /// Create an empty table resolver
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a target type to an implementation
    pub fn bind<Target: 'static + ?Sized, Impl: 'static>(mut self) -> Self {
        self.bindings.insert(
            DependencyDescriptor::of::<Target>(),
            ConcreteType::of::<Impl>(),
        );
        self
    }

    /// Bind a qualified target type to an implementation
    pub fn bind_qualified<Target: 'static + ?Sized, Impl: 'static>(
        mut self,
        qualifier: impl Into<String>,
    ) -> Self {
        self.bindings.insert(
            DependencyDescriptor::qualified::<Target>(qualifier),
            ConcreteType::of::<Impl>(),
        );
        self
    }

    /// Check if a descriptor has a binding
    pub fn contains(&self, descriptor: &DependencyDescriptor) -> bool {
        self.bindings.contains_key(descriptor)
    }

    /// Number of registered bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if no bindings are registered
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl DependencyResolver for TableResolver {
    fn resolve(&self, descriptor: &DependencyDescriptor) -> Option<ConcreteType> {
        self.bindings.get(descriptor).copied()
    }
}

/// Ordered chain of resolvers, queried first-hit-wins
///
/// The chain itself is a resolver, so chains can nest inside other chains.
#[derive(Default)]
pub struct ResolverChain {
    resolvers: Vec<Box<dyn DependencyResolver + Send + Sync>>,
}

impl ResolverChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resolver to the chain
    pub fn push(&mut self, resolver: Box<dyn DependencyResolver + Send + Sync>) {
        self.resolvers.push(resolver);
    }

    /// Append a resolver, builder-style
    pub fn with(mut self, resolver: impl DependencyResolver + Send + Sync + 'static) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    /// Number of resolvers in the chain
    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    /// Check if the chain is empty
    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

impl DependencyResolver for ResolverChain {
    fn resolve(&self, descriptor: &DependencyDescriptor) -> Option<ConcreteType> {
        for (index, resolver) in self.resolvers.iter().enumerate() {
            tracing::trace!(%descriptor, index, "probing resolver");
            if let Some(concrete) = resolver.resolve(descriptor) {
                tracing::debug!(%descriptor, concrete = %concrete, "resolved dependency");
                return Some(concrete);
            }
        }
        None
    }
}

impl std::fmt::Debug for ResolverChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverChain")
            .field("resolvers", &self.resolvers.len())
            .finish()
    }
}
