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

//! The distinct categories present in a store.

use crate::creature::{CategoryCode, Creature};
use std::collections::BTreeSet;

/// The sorted, deduplicated list of category codes found across a store.
///
/// Codes are ordered lexicographically so the category selector is stable
/// from one run to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetIndex {
    codes: Vec<CategoryCode>,
}

impl FacetIndex {
    /// Builds the index by flattening every creature's categories.
    pub fn build<'a>(creatures: impl IntoIterator<Item = &'a Creature>) -> Self {
        let codes: BTreeSet<&CategoryCode> = creatures
            .into_iter()
            .flat_map(|c| c.categories())
            .collect();
        Self {
            codes: codes.into_iter().cloned().collect(),
        }
    }

    /// The codes in ascending order.
    pub fn codes(&self) -> &[CategoryCode] {
        &self.codes
    }

    /// Number of distinct codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns `true` when no code is indexed.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Returns `true` if `code` is one of the indexed codes.
    pub fn contains(&self, code: &str) -> bool {
        self.codes
            .binary_search_by(|probe| probe.as_str().cmp(code))
            .is_ok()
    }
}
