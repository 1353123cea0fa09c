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

//! # Bestiary Core
//!
//! The in-memory query-and-pagination engine behind the bestiary catalog.
//!
//! Given a write-once [`EntityStore`] and a [`QueryState`], everything else
//! (filtered subset, page window, facets, stats) is a pure recomputation.
//! [`CatalogSession`] owns both and is the single entry point used by
//! front-ends.

#![warn(missing_docs)]

pub mod creature;
pub mod facets;
pub mod filter;
pub mod labels;
pub mod paginate;
pub mod query;
pub mod session;
pub mod stats;
pub mod store;

pub use creature::{CategoryCode, Creature, CreatureId, DisplayMetrics, EntityError};
pub use facets::FacetIndex;
pub use filter::filter;
pub use labels::{CategoryLabels, LabelSet};
pub use paginate::{paginate, total_pages, PageButton, PageControls, PageWindow, PAGE_SIZE};
pub use query::{CategorySelector, QueryError, QueryState};
pub use session::{CatalogSession, CatalogView, LoadState, LoadStatus};
pub use stats::{stats, CatalogStats};
pub use store::{EntityStore, StoreError};

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::creature::{CategoryCode, Creature, CreatureId, DisplayMetrics};

    pub(crate) fn creature(id: u32, name: &str, categories: &[&str]) -> Creature {
        Creature::new(
            CreatureId::new(id).unwrap(),
            name,
            categories.iter().copied().map(CategoryCode::from),
            DisplayMetrics {
                height: 7,
                weight: 69,
            },
            None,
        )
        .unwrap()
    }

    /// `count` creatures named `creature-<n>`, cycling through three categories.
    pub(crate) fn numbered(count: u32) -> Vec<Creature> {
        const CYCLE: [&str; 3] = ["fire", "water", "grass"];
        (1..=count)
            .map(|n| creature(n, &format!("creature-{n}"), &[CYCLE[(n as usize) % 3]]))
            .collect()
    }
}
