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

//! User-controlled query parameters and their transition rules.

use crate::creature::CategoryCode;
use serde::Serialize;
use std::fmt;

/// The category filter: every category, or exactly one code.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategorySelector {
    /// No category filter.
    #[default]
    All,
    /// Only creatures that belong to this category.
    Only(CategoryCode),
}

impl CategorySelector {
    /// Parses user input, treating `"all"` (any case) and the empty string as [`CategorySelector::All`].
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            CategorySelector::All
        } else {
            CategorySelector::Only(CategoryCode::from(trimmed))
        }
    }

    /// Returns `true` if a creature with these categories passes the filter.
    pub fn admits(&self, categories: &[CategoryCode]) -> bool {
        match self {
            CategorySelector::All => true,
            CategorySelector::Only(code) => categories.contains(code),
        }
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelector::All => f.write_str("all"),
            CategorySelector::Only(code) => write!(f, "{code}"),
        }
    }
}

/// The current search term, category filter and page.
///
/// Changing the term or the category always sends the query back to page 1;
/// the page itself only moves through [`QueryState::set_page`], which checks
/// the requested page against the current page count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryState {
    term: String,
    category: CategorySelector,
    page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            term: String::new(),
            category: CategorySelector::All,
            page: 1,
        }
    }
}

impl QueryState {
    /// The raw search term, exactly as typed.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The active category filter.
    pub fn category(&self) -> &CategorySelector {
        &self.category
    }

    /// The 1-based current page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Replaces the search term and resets to page 1.
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.page = 1;
    }

    /// Replaces the category filter and resets to page 1.
    pub fn set_category(&mut self, category: CategorySelector) {
        self.category = category;
        self.page = 1;
    }

    /// Moves to `page` if it lies in `1..=total_pages`.
    ///
    /// Out-of-range requests leave the state untouched.
    pub fn set_page(&mut self, page: usize, total_pages: usize) -> Result<(), QueryError> {
        if page == 0 || page > total_pages.max(1) {
            return Err(QueryError::PageOutOfRange {
                requested: page,
                total_pages,
            });
        }
        self.page = page;
        Ok(())
    }

    /// Empties the term and selects every category.
    pub fn clear(&mut self) {
        self.set_term(String::new());
        self.set_category(CategorySelector::All);
    }
}

/// An error raised by a rejected query transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The requested page lies outside `1..=total_pages`.
    PageOutOfRange {
        /// The page that was asked for.
        requested: usize,
        /// The page count at the time of the request.
        total_pages: usize,
    },
    /// The category is not present in the loaded catalog.
    UnknownCategory(CategoryCode),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::PageOutOfRange {
                requested,
                total_pages,
            } => write!(
                f,
                "Page {requested} is outside the valid range 1..={total_pages}"
            ),
            QueryError::UnknownCategory(code) => {
                write!(f, "Category '{code}' is not present in the catalog")
            }
        }
    }
}

impl std::error::Error for QueryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unfiltered_on_first_page() {
        let query = QueryState::default();
        assert_eq!(query.term(), "");
        assert_eq!(query.category(), &CategorySelector::All);
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn term_and_category_changes_reset_the_page() {
        let mut query = QueryState::default();
        query.set_page(3, 5).unwrap();
        query.set_term("char");
        assert_eq!(query.page(), 1);

        query.set_page(2, 5).unwrap();
        query.set_category(CategorySelector::Only("fire".into()));
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn page_changes_keep_term_and_category() {
        let mut query = QueryState::default();
        query.set_term("a");
        query.set_category(CategorySelector::Only("water".into()));
        query.set_page(2, 2).unwrap();

        assert_eq!(query.term(), "a");
        assert_eq!(query.category(), &CategorySelector::Only("water".into()));
        assert_eq!(query.page(), 2);
    }

    #[test]
    fn out_of_range_pages_are_rejected() {
        let mut query = QueryState::default();
        assert_eq!(
            query.set_page(0, 3),
            Err(QueryError::PageOutOfRange {
                requested: 0,
                total_pages: 3
            })
        );
        assert!(query.set_page(4, 3).is_err());
        assert_eq!(query.page(), 1);

        // A catalog with nothing visible still has one page.
        assert!(query.set_page(1, 0).is_ok());
    }

    #[test]
    fn clear_resets_everything() {
        let mut query = QueryState::default();
        query.set_term("pika");
        query.set_category(CategorySelector::Only("electric".into()));
        query.set_page(2, 2).unwrap();

        query.clear();
        assert_eq!(query, QueryState::default());
    }

    #[test]
    fn selector_parsing() {
        assert_eq!(CategorySelector::parse("ALL"), CategorySelector::All);
        assert_eq!(CategorySelector::parse("  "), CategorySelector::All);
        assert_eq!(
            CategorySelector::parse(" water "),
            CategorySelector::Only("water".into())
        );
    }

    #[test]
    fn selector_admission() {
        let categories = [CategoryCode::from("fire"), CategoryCode::from("flying")];
        assert!(CategorySelector::All.admits(&categories));
        assert!(CategorySelector::Only("flying".into()).admits(&categories));
        assert!(!CategorySelector::Only("water".into()).admits(&categories));
    }
}
