// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The write-once collection of loaded creatures.

use crate::creature::{Creature, CreatureId};
use std::collections::HashSet;
use std::fmt;

/// The immutable list of creatures for one session.
///
/// The `EntityStore` is built exactly once from the records handed over by
/// the loader and never mutated afterwards. Insertion order is preserved and
/// is the order every derived view is expressed in.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    creatures: Vec<Creature>,
}

impl EntityStore {
    /// Builds a store from fully-resolved records, rejecting duplicate ids.
    pub fn new(creatures: Vec<Creature>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(creatures.len());
        for creature in &creatures {
            if !seen.insert(creature.id()) {
                return Err(StoreError::DuplicateId(creature.id()));
            }
        }
        log::debug!("EntityStore built with {} creatures.", creatures.len());
        Ok(Self { creatures })
    }

    /// Returns the number of stored creatures.
    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    /// Returns `true` if the store holds no creature.
    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// Returns all creatures in insertion order.
    pub fn as_slice(&self) -> &[Creature] {
        &self.creatures
    }

    /// Returns an iterator over all creatures in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Creature> {
        self.creatures.iter()
    }

    /// Looks a creature up by its identifier.
    pub fn get(&self, id: CreatureId) -> Option<&Creature> {
        self.creatures.iter().find(|c| c.id() == id)
    }
}

impl<'a> IntoIterator for &'a EntityStore {
    type Item = &'a Creature;
    type IntoIter = std::slice::Iter<'a, Creature>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An error raised while building an [`EntityStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Two records share the same identifier.
    DuplicateId(CreatureId),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DuplicateId(id) => write!(f, "Duplicate creature identifier {id}"),
        }
    }
}

impl std::error::Error for StoreError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::creature;

    #[test]
    fn preserves_insertion_order() {
        let store = EntityStore::new(vec![
            creature(4, "charmander", &["fire"]),
            creature(1, "bulbasaur", &["grass", "poison"]),
        ])
        .unwrap();

        let names: Vec<_> = store.iter().map(Creature::name).collect();
        assert_eq!(names, ["charmander", "bulbasaur"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = EntityStore::new(vec![
            creature(4, "charmander", &["fire"]),
            creature(4, "charmeleon", &["fire"]),
        ]);
        assert_eq!(
            result.unwrap_err(),
            StoreError::DuplicateId(CreatureId::new(4).unwrap())
        );
    }

    #[test]
    fn empty_store_is_valid() {
        let store = EntityStore::new(Vec::new()).unwrap();
        assert!(store.is_empty());
        assert!(store.get(CreatureId::new(1).unwrap()).is_none());
    }
}
