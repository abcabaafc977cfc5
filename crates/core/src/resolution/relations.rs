//! Assignability facts between erased types
//!
//! The runtime keeps no subtype information for erased types, so the
//! wiring code records the "is-a" facts it knows about and the validator
//! consults them. Equality always counts as assignable; everything else
//! must be recorded.

use std::any::TypeId;
use std::collections::{HashMap, HashSet};

use crate::resolution::token::TypeKey;

/// Registry of subtype relationships between type keys
#[derive(Debug, Default)]
pub struct TypeRelations {
    // direct supertypes per type; assignability closes over these transitively
    supertypes: HashMap<TypeId, HashSet<TypeId>>,
}

impl TypeRelations {
    /// Create an empty relations registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `Sub` is assignable to `Super`
    pub fn record<Sub: 'static + ?Sized, Super: 'static + ?Sized>(&mut self) -> &mut Self {
        self.record_keys(TypeKey::of::<Sub>(), TypeKey::of::<Super>())
    }

    /// Record a subtype fact between two existing keys
    pub fn record_keys(&mut self, sub: TypeKey, sup: TypeKey) -> &mut Self {
        self.supertypes
            .entry(sub.type_id)
            .or_default()
            .insert(sup.type_id);
        self
    }

    /// Check whether `source` is assignable to `target`
    ///
    /// True when the keys are equal or when a recorded supertype chain
    /// leads from `source` to `target`.
    pub fn is_assignable(&self, source: &TypeKey, target: &TypeKey) -> bool {
        if source.type_id == target.type_id {
            return true;
        }

        // walk recorded supertype edges; visited set guards against cycles
        let mut visited: HashSet<TypeId> = HashSet::new();
        let mut frontier: Vec<TypeId> = vec![source.type_id];

        while let Some(current) = frontier.pop() {
            if !visited.insert(current) {
                continue;
            }
            if let Some(supers) = self.supertypes.get(&current) {
                if supers.contains(&target.type_id) {
                    return true;
                }
                frontier.extend(supers.iter().copied());
            }
        }

        false
    }

    /// Number of types with at least one recorded supertype
    pub fn len(&self) -> usize {
        self.supertypes.len()
    }

    /// Check if no facts have been recorded
    pub fn is_empty(&self) -> bool {
        self.supertypes.is_empty()
    }
}
