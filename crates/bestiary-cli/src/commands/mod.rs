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


pub mod browse;
pub mod catalog;

use crate::render::{Renderer, Style};
use anyhow::Result;
use bestiary_core::{CatalogView, CategoryLabels, LoadStatus};
use std::io::Write;

/// How command results are written.
pub struct Output {
    labels: CategoryLabels,
    style: Style,
    json: bool,
}

impl Output {
    pub fn new(labels: CategoryLabels, style: Style, json: bool) -> Self {
        Self {
            labels,
            style,
            json,
        }
    }

    pub fn renderer(&self) -> Renderer<'_> {
        Renderer {
            labels: &self.labels,
            style: self.style,
        }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Writes a view either as text or as one line of JSON.
    pub fn view<W: Write>(&self, view: &CatalogView, mut w: W) -> Result<()> {
        if self.json {
            writeln!(w, "{}", serde_json::to_string(view)?)?;
        } else {
            write!(w, "{}", self.renderer().view(view))?;
        }
        Ok(())
    }
}

/// Fails when the catalog could not be loaded. There is no retry.
pub fn ensure_ready(view: &CatalogView) -> Result<()> {
    match &view.status {
        LoadStatus::Ready => Ok(()),
        LoadStatus::Unavailable { reason } => anyhow::bail!("Catalog unavailable: {reason}"),
        LoadStatus::Loading => anyhow::bail!("Catalog is still loading"),
    }
}
