//! Reified type tokens
//!
//! Generic parameters are erased at runtime, so every type a binding talks
//! about is carried explicitly as a token: [`TypeKey`] identifies a raw
//! (erased) type, and [`TypeToken`] models a declared type that may still
//! be a generic application over other tokens.

use std::any::TypeId;
use std::fmt;

/// Identity of a raw (erased) type: its `TypeId` plus a readable name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeKey {
    pub type_id: TypeId,
    pub type_name: &'static str,
}

impl TypeKey {
    /// Create a key for a type
    pub fn of<T: 'static + ?Sized>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Create a key directly from a type ID and name
    pub fn by_ids(type_id: TypeId, type_name: &'static str) -> Self {
        Self { type_id, type_name }
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Check if this key identifies the given type
    pub fn is<T: 'static + ?Sized>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name)
    }
}

/// Declared type of a value, possibly generic
///
/// Mirrors the shapes a declared return type can take: a raw type, a
/// generic type applied to arguments, an unresolved type variable, or a
/// wildcard with no raw form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeToken {
    /// A raw type, directly usable
    Simple(TypeKey),
    /// A generic type applied to an ordered list of type arguments
    Parameterized {
        raw: Box<TypeToken>,
        args: Vec<TypeToken>,
    },
    /// An unresolved type variable (e.g. a bare `T`)
    Variable { name: String },
    /// An unknown/wildcard type
    Wildcard,
}

impl TypeToken {
    /// Create a simple token for a type
    pub fn simple<T: 'static + ?Sized>() -> Self {
        Self::Simple(TypeKey::of::<T>())
    }

    /// Create a parameterized token from a base token and its arguments
    pub fn parameterized(raw: TypeToken, args: Vec<TypeToken>) -> Self {
        Self::Parameterized {
            raw: Box::new(raw),
            args,
        }
    }

    /// Create a token for an unresolved type variable
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    /// Reduce this token to its raw type key, if it has one
    ///
    /// A simple token is its own raw form. A parameterized token unwraps
    /// recursively through its base, so any nesting depth reduces to the
    /// innermost raw type. Variables and wildcards have no raw form and
    /// yield `None`; callers must treat that as a configuration error, not
    /// a silent fallback.
    pub fn unwrap_to_raw(&self) -> Option<&TypeKey> {
        match self {
            TypeToken::Simple(key) => Some(key),
            TypeToken::Parameterized { raw, .. } => raw.unwrap_to_raw(),
            TypeToken::Variable { .. } | TypeToken::Wildcard => None,
        }
    }

    /// Check if this token is already a raw type
    pub fn is_simple(&self) -> bool {
        matches!(self, TypeToken::Simple(_))
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeToken::Simple(key) => write!(f, "{}", key),
            TypeToken::Parameterized { raw, args } => {
                write!(f, "{}<", raw)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(">")
            }
            TypeToken::Variable { name } => f.write_str(name),
            TypeToken::Wildcard => f.write_str("_"),
        }
    }
}
