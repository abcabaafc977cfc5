use std::fmt;

use crate::resolution::token::TypeKey;

/// Dependency request identifying a target type and optional qualifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyDescriptor {
    pub target: TypeKey,
    pub qualifier: Option<String>,
}

impl DependencyDescriptor {
    /// Create a descriptor for a type
    pub fn of<T: 'static + ?Sized>() -> Self {
        Self {
            target: TypeKey::of::<T>(),
            qualifier: None,
        }
    }

    /// Create a qualified descriptor for a type
    pub fn qualified<T: 'static + ?Sized>(qualifier: impl Into<String>) -> Self {
        Self {
            target: TypeKey::of::<T>(),
            qualifier: Some(qualifier.into()),
        }
    }

    /// Get the requested target type
    pub fn target(&self) -> &TypeKey {
        &self.target
    }

    /// Get the qualifier, if any
    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }

    /// Check if this descriptor requests a type under a qualifier without allocating
    pub fn matches_qualified<T: 'static + ?Sized>(&self, qualifier: &str) -> bool {
        self.target.is::<T>() && self.qualifier.as_deref() == Some(qualifier)
    }
}

impl fmt::Display for DependencyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.qualifier {
            Some(q) => write!(f, "{}({})", self.target.type_name(), q),
            None => write!(f, "{}(default)", self.target.type_name()),
        }
    }
}

/// Resolved implementation type for some requested target
///
/// Produced by a resolver; the wrapped key is expected to identify a type
/// assignable to the descriptor's target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConcreteType {
    key: TypeKey,
}

impl ConcreteType {
    /// Create a concrete type token
    pub fn of<T: 'static>() -> Self {
        Self {
            key: TypeKey::of::<T>(),
        }
    }

    /// Wrap an existing key
    pub fn from_key(key: TypeKey) -> Self {
        Self { key }
    }

    /// Get the underlying type key
    pub fn key(&self) -> &TypeKey {
        &self.key
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        self.key.type_name()
    }
}

impl fmt::Display for ConcreteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key.type_name())
    }
}
