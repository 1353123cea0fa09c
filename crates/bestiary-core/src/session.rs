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

//! The catalog session: owner of the loaded store and of the query state.
//!
//! Every mutation entry point recomputes the whole derived view (filtered
//! subset, page window, page count, stats, facets and controls) and returns
//! it in one piece, so callers never observe a half-updated state.

use crate::creature::{CategoryCode, Creature};
use crate::facets::FacetIndex;
use crate::filter::filter;
use crate::paginate::{paginate, total_pages, PageControls, PAGE_SIZE};
use crate::query::{CategorySelector, QueryError, QueryState};
use crate::stats::{stats, CatalogStats};
use crate::store::EntityStore;
use serde::Serialize;
use std::fmt::Display;

/// Where the session is in its one-shot load lifecycle.
#[derive(Debug, Clone)]
pub enum LoadState {
    /// The loader has not delivered anything yet.
    Loading,
    /// The store is populated and its facets computed.
    Ready {
        /// The loaded creatures.
        store: EntityStore,
        /// Distinct categories of `store`.
        facets: FacetIndex,
    },
    /// The load failed; the catalog stays empty for the rest of the session.
    Unavailable {
        /// Human-readable failure description.
        reason: String,
    },
}

/// Serializable summary of a [`LoadState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadStatus {
    /// Still waiting for the loader.
    Loading,
    /// The catalog is browsable.
    Ready,
    /// The load failed.
    Unavailable {
        /// Why the load failed.
        reason: String,
    },
}

/// Everything the presentation layer needs after a state change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogView {
    /// Load lifecycle status.
    pub status: LoadStatus,
    /// The query the view was computed for.
    pub query: QueryState,
    /// The creatures on the current page.
    pub window: Vec<Creature>,
    /// The current 1-based page.
    pub page: usize,
    /// Number of pages of the filtered subset (at least one).
    pub total_pages: usize,
    /// Summary counts.
    pub stats: CatalogStats,
    /// Sorted distinct categories, for the category selector.
    pub facets: Vec<CategoryCode>,
    /// Previous / numbered / next controls.
    pub controls: PageControls,
}

impl CatalogView {
    /// Returns `true` when the current page has nothing to show.
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}

/// Owns the session state and exposes the user-facing entry points.
#[derive(Debug, Clone)]
pub struct CatalogSession {
    load: LoadState,
    query: QueryState,
}

impl Default for CatalogSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSession {
    /// Creates a session waiting for its load to complete.
    pub fn new() -> Self {
        Self {
            load: LoadState::Loading,
            query: QueryState::default(),
        }
    }

    /// Creates a session that is already populated with `store`.
    pub fn with_store(store: EntityStore) -> Self {
        let facets = FacetIndex::build(&store);
        Self {
            load: LoadState::Ready { store, facets },
            query: QueryState::default(),
        }
    }

    /// The current load state.
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// The current query.
    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Hands the loader's result over to the session.
    ///
    /// The store is written once: a delivery after the session has left
    /// [`LoadState::Loading`] is ignored. A successful delivery whose records
    /// cannot form a store (duplicate ids) marks the catalog unavailable.
    pub fn finish_load<E: Display>(&mut self, result: Result<Vec<Creature>, E>) -> CatalogView {
        if !matches!(self.load, LoadState::Loading) {
            log::warn!("Ignoring a second catalog delivery; the store is write-once.");
            return self.view();
        }

        self.load = match result.map_err(|e| e.to_string()).and_then(|creatures| {
            EntityStore::new(creatures).map_err(|e| e.to_string())
        }) {
            Ok(store) => {
                let facets = FacetIndex::build(&store);
                log::info!(
                    "Catalog ready: {} creatures across {} categories.",
                    store.len(),
                    facets.len()
                );
                LoadState::Ready { store, facets }
            }
            Err(reason) => {
                log::error!("Catalog unavailable: {reason}");
                LoadState::Unavailable { reason }
            }
        };
        self.view()
    }

    /// Sets the search term and goes back to page 1.
    pub fn set_term(&mut self, term: impl Into<String>) -> CatalogView {
        self.query.set_term(term);
        self.view()
    }

    /// Sets the category filter and goes back to page 1.
    ///
    /// A code that is not part of the catalog's facets is rejected and the
    /// state is left as it was.
    pub fn set_category(&mut self, category: CategorySelector) -> Result<CatalogView, QueryError> {
        if let CategorySelector::Only(code) = &category {
            let known = self
                .facets()
                .is_some_and(|facets| facets.contains(code.as_str()));
            if !known {
                log::warn!("Rejected unknown category '{code}'.");
                return Err(QueryError::UnknownCategory(code.clone()));
            }
        }
        self.query.set_category(category);
        Ok(self.view())
    }

    /// Moves to `page`; requests outside `1..=total_pages` are ignored.
    pub fn set_page(&mut self, page: usize) -> CatalogView {
        let total = total_pages(self.filtered().len(), PAGE_SIZE);
        if let Err(e) = self.query.set_page(page, total) {
            log::debug!("Ignored page request: {e}");
        }
        self.view()
    }

    /// Moves one page forward, if there is one.
    pub fn next_page(&mut self) -> CatalogView {
        self.set_page(self.query.page().saturating_add(1))
    }

    /// Moves one page back, if there is one.
    pub fn previous_page(&mut self) -> CatalogView {
        self.set_page(self.query.page().saturating_sub(1))
    }

    /// Empties the term, selects every category and goes back to page 1.
    pub fn clear(&mut self) -> CatalogView {
        self.query.clear();
        self.view()
    }

    /// Recomputes the derived view for the current state.
    pub fn view(&self) -> CatalogView {
        let subset = self.filtered();
        let window = paginate(&subset, PAGE_SIZE, self.query.page());
        let page = self.query.page();

        let (catalog_stats, facets) = match &self.load {
            LoadState::Ready { store, facets } => {
                (stats(store, &subset, facets), facets.codes().to_vec())
            }
            _ => (CatalogStats::default(), Vec::new()),
        };

        CatalogView {
            status: self.status(),
            query: self.query.clone(),
            window: window.items.iter().map(|c| (*c).clone()).collect(),
            page,
            total_pages: window.total_pages,
            stats: catalog_stats,
            facets,
            controls: PageControls::new(page, window.total_pages),
        }
    }

    fn status(&self) -> LoadStatus {
        match &self.load {
            LoadState::Loading => LoadStatus::Loading,
            LoadState::Ready { .. } => LoadStatus::Ready,
            LoadState::Unavailable { reason } => LoadStatus::Unavailable {
                reason: reason.clone(),
            },
        }
    }

    fn facets(&self) -> Option<&FacetIndex> {
        match &self.load {
            LoadState::Ready { facets, .. } => Some(facets),
            _ => None,
        }
    }

    fn filtered(&self) -> Vec<&Creature> {
        match &self.load {
            LoadState::Ready { store, .. } => filter(
                store.as_slice(),
                self.query.term(),
                self.query.category(),
            ),
            _ => Vec::new(),
        }
    }
}
