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

//! Category code to display label lookup.
//!
//! The query engine never reads labels; they are injected into whatever
//! renders the catalog.

use serde::Deserialize;
use std::collections::HashMap;

const SPANISH: [(&str, &str); 18] = [
    ("normal", "Normal"),
    ("fire", "Fuego"),
    ("water", "Agua"),
    ("electric", "Eléctrico"),
    ("grass", "Planta"),
    ("ice", "Hielo"),
    ("fighting", "Lucha"),
    ("poison", "Veneno"),
    ("ground", "Tierra"),
    ("flying", "Volador"),
    ("psychic", "Psíquico"),
    ("bug", "Bicho"),
    ("rock", "Roca"),
    ("ghost", "Fantasma"),
    ("dragon", "Dragón"),
    ("dark", "Siniestro"),
    ("steel", "Acero"),
    ("fairy", "Hada"),
];

/// Which built-in label table to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelSet {
    /// Spanish names for the standard categories.
    #[default]
    Es,
    /// The raw category codes.
    Raw,
}

/// Read-only mapping from category code to a human-readable label.
///
/// Unknown codes fall back to the code itself.
#[derive(Debug, Clone, Default)]
pub struct CategoryLabels {
    labels: HashMap<String, String>,
}

impl CategoryLabels {
    /// Builds the table for a built-in label set.
    pub fn for_set(set: LabelSet) -> Self {
        match set {
            LabelSet::Es => Self::spanish(),
            LabelSet::Raw => Self::raw(),
        }
    }

    /// The Spanish table for the eighteen standard categories.
    pub fn spanish() -> Self {
        Self::from_pairs(SPANISH)
    }

    /// An empty table: every code is displayed as-is.
    pub fn raw() -> Self {
        Self::default()
    }

    /// Builds a table from arbitrary `(code, label)` pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            labels: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the label for `code`, or `code` itself when unmapped.
    pub fn label<'a>(&'a self, code: &'a str) -> &'a str {
        self.labels.get(code).map_or(code, String::as_str)
    }
}
