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

//! JSON shapes returned by the remote collection endpoint.
//!
//! Only the fields the catalog uses are declared; everything else in the
//! payload is ignored by serde.

use bestiary_core::{CategoryCode, Creature, CreatureId, DisplayMetrics, EntityError};
use serde::Deserialize;

/// The collection listing: a page of references to detail records.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceList {
    /// Total number of records on the server, if reported.
    #[serde(default)]
    pub count: Option<u32>,
    /// The references, in listing order.
    pub results: Vec<ResourceRef>,
}

/// A named reference to a detail record.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceRef {
    /// Short name of the referenced record.
    pub name: String,
    /// Absolute URL of the detail record.
    pub url: String,
}

/// A full creature record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatureRecord {
    /// Numeric identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Height in decimetres.
    #[serde(default)]
    pub height: u32,
    /// Weight in hectograms.
    #[serde(default)]
    pub weight: u32,
    /// Category memberships.
    pub types: Vec<TypeSlot>,
    /// Artwork references.
    #[serde(default)]
    pub sprites: Sprites,
}

/// One category membership with its display slot.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    /// 1-based display position.
    pub slot: u32,
    /// The category.
    #[serde(rename = "type")]
    pub kind: NamedRef,
}

/// A `{ name, url }` reference where only the name matters.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedRef {
    /// Referenced name.
    pub name: String,
}

/// Artwork section of a record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    /// Default front sprite.
    #[serde(default)]
    pub front_default: Option<String>,
    /// Alternative artwork sets.
    #[serde(default)]
    pub other: OtherSprites,
}

/// Alternative artwork sets.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    /// The official artwork set.
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

/// A single artwork set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Artwork {
    /// Front-facing image URL.
    #[serde(default)]
    pub front_default: Option<String>,
}

impl CreatureRecord {
    /// The official artwork if present, else the default sprite.
    pub fn image(&self) -> Option<&str> {
        self.sprites
            .other
            .official_artwork
            .as_ref()
            .and_then(|art| art.front_default.as_deref())
            .or(self.sprites.front_default.as_deref())
    }

    /// Validates the record into a catalog creature.
    ///
    /// Categories are taken in slot order.
    pub fn into_creature(self) -> Result<Creature, EntityError> {
        let id = CreatureId::new(self.id)?;
        let image = self.image().map(str::to_owned);

        let mut types = self.types;
        types.sort_by_key(|t| t.slot);

        Creature::new(
            id,
            self.name,
            types.into_iter().map(|t| CategoryCode::from(t.kind.name)),
            DisplayMetrics {
                height: self.height,
                weight: self.weight,
            },
            image,
        )
    }
}
