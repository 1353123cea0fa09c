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

//! Defines the creature record and the small value types it is made of.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Divisor applied to the raw display magnitudes before they are shown
/// (decimetres to metres, hectograms to kilograms).
pub const DISPLAY_SCALE: f64 = 10.0;

/// The unique, positive identifier of a creature within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CreatureId(u32);

impl CreatureId {
    /// Creates an identifier, rejecting zero.
    pub fn new(raw: u32) -> Result<Self, EntityError> {
        if raw == 0 {
            return Err(EntityError::ZeroId);
        }
        Ok(Self(raw))
    }

    /// Returns the raw numeric value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A category code as it appears in the source data (e.g. `"water"`).
///
/// Codes are compared byte-wise; their ordering is the lexicographic order
/// used by the facet index.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryCode(String);

impl CategoryCode {
    /// Wraps a raw code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for CategoryCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl Borrow<str> for CategoryCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw magnitudes used only for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayMetrics {
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
}

impl DisplayMetrics {
    /// Height in metres.
    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / DISPLAY_SCALE
    }

    /// Weight in kilograms.
    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / DISPLAY_SCALE
    }
}

/// A single catalog record.
///
/// Creatures are immutable once built: every field is private and the only
/// constructor validates the record invariants (non-empty name, at least one
/// category).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Creature {
    id: CreatureId,
    name: String,
    /// Lower-cased copy of `name`, computed once for matching.
    #[serde(skip)]
    search_key: String,
    categories: Vec<CategoryCode>,
    metrics: DisplayMetrics,
    image: Option<String>,
}

impl Creature {
    /// Builds a validated creature record.
    ///
    /// Duplicate categories are collapsed, keeping the first occurrence so the
    /// source ordering survives for display.
    pub fn new(
        id: CreatureId,
        name: impl Into<String>,
        categories: impl IntoIterator<Item = CategoryCode>,
        metrics: DisplayMetrics,
        image: Option<String>,
    ) -> Result<Self, EntityError> {
        let name = name.into();
        if name.is_empty() {
            return Err(EntityError::EmptyName { id });
        }

        let mut unique: Vec<CategoryCode> = Vec::new();
        for code in categories {
            if !unique.contains(&code) {
                unique.push(code);
            }
        }
        if unique.is_empty() {
            return Err(EntityError::NoCategories { id });
        }

        Ok(Self {
            id,
            search_key: name.to_lowercase(),
            name,
            categories: unique,
            metrics,
            image,
        })
    }

    /// The creature's identifier.
    pub fn id(&self) -> CreatureId {
        self.id
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The lower-cased name used for case-insensitive matching.
    pub fn search_key(&self) -> &str {
        &self.search_key
    }

    /// The creature's categories, in source order.
    pub fn categories(&self) -> &[CategoryCode] {
        &self.categories
    }

    /// Returns `true` if the creature belongs to `code`.
    pub fn has_category(&self, code: &str) -> bool {
        self.categories.iter().any(|c| c.as_str() == code)
    }

    /// Presentation-only magnitudes.
    pub fn metrics(&self) -> DisplayMetrics {
        self.metrics
    }

    /// Reference to the display artwork, if the source provided one.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

/// An error raised when a creature record violates its invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityError {
    /// Identifiers must be strictly positive.
    ZeroId,
    /// The record has an empty name.
    EmptyName {
        /// The offending record.
        id: CreatureId,
    },
    /// The record lists no category.
    NoCategories {
        /// The offending record.
        id: CreatureId,
    },
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityError::ZeroId => write!(f, "Creature identifiers must be positive"),
            EntityError::EmptyName { id } => write!(f, "Creature {id} has an empty name"),
            EntityError::NoCategories { id } => {
                write!(f, "Creature {id} does not belong to any category")
            }
        }
    }
}

impl std::error::Error for EntityError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u32) -> CreatureId {
        CreatureId::new(raw).unwrap()
    }

    #[test]
    fn zero_id_is_rejected() {
        assert_eq!(CreatureId::new(0), Err(EntityError::ZeroId));
        assert_eq!(CreatureId::new(25).unwrap().get(), 25);
    }

    #[test]
    fn new_rejects_empty_name() {
        let result = Creature::new(
            id(1),
            "",
            [CategoryCode::from("grass")],
            DisplayMetrics::default(),
            None,
        );
        assert_eq!(result, Err(EntityError::EmptyName { id: id(1) }));
    }

    #[test]
    fn new_rejects_missing_categories() {
        let result = Creature::new(
            id(7),
            "squirtle",
            Vec::<CategoryCode>::new(),
            DisplayMetrics::default(),
            None,
        );
        assert_eq!(result, Err(EntityError::NoCategories { id: id(7) }));
    }

    #[test]
    fn duplicate_categories_are_collapsed_in_source_order() {
        let creature = Creature::new(
            id(1),
            "Bulbasaur",
            ["grass", "poison", "grass"].map(CategoryCode::from),
            DisplayMetrics::default(),
            None,
        )
        .unwrap();

        assert_eq!(
            creature.categories(),
            &[CategoryCode::from("grass"), CategoryCode::from("poison")]
        );
        assert!(creature.has_category("poison"));
        assert!(!creature.has_category("fire"));
        assert_eq!(creature.search_key(), "bulbasaur");
    }

    #[test]
    fn metrics_are_scaled_for_display() {
        let metrics = DisplayMetrics {
            height: 17,
            weight: 905,
        };
        assert!((metrics.height_m() - 1.7).abs() < f64::EPSILON);
        assert!((metrics.weight_kg() - 90.5).abs() < 1e-9);
    }
}
