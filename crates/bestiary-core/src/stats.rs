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

//! Summary counts shown above the catalog.

use crate::facets::FacetIndex;
use crate::store::EntityStore;
use serde::Serialize;

/// The summary triple for the current query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    /// Number of creatures in the store.
    pub total: usize,
    /// Number of creatures passing the current filter.
    pub visible: usize,
    /// Number of distinct categories in the store.
    pub facet_count: usize,
}

/// Computes the summary counts.
pub fn stats<T>(store: &EntityStore, filtered: &[T], facets: &FacetIndex) -> CatalogStats {
    CatalogStats {
        total: store.len(),
        visible: filtered.len(),
        facet_count: facets.len(),
    }
}
