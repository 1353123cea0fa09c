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

//! Selects the creatures matching a search term and a category filter.

use crate::creature::Creature;
use crate::query::CategorySelector;

/// Returns the creatures matching both the term and the category, in input order.
///
/// # Matching
///
/// * The term is lower-cased (never trimmed) and must be a substring of the
///   lower-cased name. An empty term matches every name.
/// * The category must be [`CategorySelector::All`] or one of the creature's
///   categories.
///
/// The result is a subsequence of `creatures`; an empty input gives an empty
/// result.
pub fn filter<'a>(
    creatures: &'a [Creature],
    term: &str,
    category: &CategorySelector,
) -> Vec<&'a Creature> {
    let needle = term.to_lowercase();
    creatures
        .iter()
        .filter(|c| c.search_key().contains(needle.as_str()))
        .filter(|c| category.admits(c.categories()))
        .collect()
}
