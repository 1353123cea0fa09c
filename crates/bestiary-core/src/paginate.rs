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

//! Fixed-size page windows over a filtered subset, and the control model
//! used to navigate between them.

use serde::Serialize;

/// Number of creatures shown per page for the lifetime of a session.
pub const PAGE_SIZE: usize = 12;

/// Number of pages needed for `len` items; never less than one.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    debug_assert!(page_size > 0, "page size must be positive");
    len.div_ceil(page_size.max(1)).max(1)
}

/// A borrowed page of a subset.
#[derive(Debug, PartialEq)]
pub struct PageWindow<'a, T> {
    /// The items on the page; the last page may be short.
    pub items: &'a [T],
    /// Total number of pages for the subset.
    pub total_pages: usize,
}

/// Cuts `subset[(page - 1) * page_size .. page * page_size]` out of `subset`.
///
/// The paginator does not clamp: keeping `page` inside `1..=total_pages` is
/// the caller's job. A page past the end (or page 0) yields an empty window.
pub fn paginate<T>(subset: &[T], page_size: usize, page: usize) -> PageWindow<'_, T> {
    let total_pages = total_pages(subset.len(), page_size);
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(subset.len());
    let end = if page == 0 {
        start
    } else {
        start.saturating_add(page_size).min(subset.len())
    };

    PageWindow {
        items: &subset[start..end],
        total_pages,
    }
}

/// One numbered page button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageButton {
    /// The 1-based page number.
    pub page: usize,
    /// Whether this is the page currently displayed.
    pub active: bool,
}

/// Navigation controls for the current page.
///
/// Previous/next are disabled at the boundaries instead of wrapping. The
/// whole control strip is hidden when there is a single page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageControls {
    /// Whether the control strip should be shown at all.
    pub visible: bool,
    /// Whether "previous" can be used.
    pub previous_enabled: bool,
    /// Whether "next" can be used.
    pub next_enabled: bool,
    /// One button per page, in order.
    pub pages: Vec<PageButton>,
}

impl PageControls {
    /// Builds the controls for `page` out of `total_pages`.
    pub fn new(page: usize, total_pages: usize) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            visible: total_pages > 1,
            previous_enabled: page > 1,
            next_enabled: page < total_pages,
            pages: (1..=total_pages)
                .map(|p| PageButton {
                    page: p,
                    active: p == page,
                })
                .collect(),
        }
    }
}
