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

//! Text rendering of a [`CatalogView`].

use bestiary_core::{
    CatalogStats, CatalogView, CategoryCode, CategoryLabels, Creature, LoadStatus, PageControls,
};
use std::fmt::Write;

// ANSI color codes
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Whether output carries ANSI escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
}

impl Style {
    pub const PLAIN: Style = Style { color: false };

    fn paint(&self, codes: &str, text: &str) -> String {
        if self.color {
            format!("{codes}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

/// Everything the renderer needs besides the view itself.
pub struct Renderer<'a> {
    pub labels: &'a CategoryLabels,
    pub style: Style,
}

impl Renderer<'_> {
    /// Renders the whole screen for a view.
    pub fn view(&self, view: &CatalogView) -> String {
        match &view.status {
            LoadStatus::Loading => self.style.paint(YELLOW, "Cargando catálogo..."),
            LoadStatus::Unavailable { reason } => self.unavailable(reason),
            LoadStatus::Ready => {
                let mut out = String::new();
                let _ = writeln!(out, "{}", self.stats(&view.stats));
                let _ = writeln!(out, "{}", self.filters(view));
                let _ = writeln!(out, "{}", self.category_line(&view.facets));
                out.push('\n');
                if view.window.is_empty() {
                    let _ = writeln!(out, "{}", self.style.paint(DIM, "Sin resultados"));
                } else {
                    for creature in &view.window {
                        out.push_str(&self.card(creature));
                    }
                }
                let controls = self.controls(&view.controls);
                if !controls.is_empty() {
                    out.push('\n');
                    let _ = writeln!(out, "{controls}");
                }
                out
            }
        }
    }

    /// The stats triple shown above the cards.
    pub fn stats(&self, stats: &CatalogStats) -> String {
        format!(
            "{} {}  {} {}  {} {}",
            self.style.paint(BOLD, "Criaturas:"),
            stats.total,
            self.style.paint(BOLD, "Mostradas:"),
            stats.visible,
            self.style.paint(BOLD, "Tipos:"),
            stats.facet_count
        )
    }

    fn filters(&self, view: &CatalogView) -> String {
        let term = view.query.term();
        let term = if term.is_empty() { "-" } else { term };
        let category = view.query.category().to_string();
        format!(
            "Búsqueda: {term}  Tipo: {}  Página {}/{}",
            self.labels.label(&category),
            view.page,
            view.total_pages
        )
    }

    fn category_line(&self, codes: &[CategoryCode]) -> String {
        let labels: Vec<&str> = codes
            .iter()
            .map(|code| self.labels.label(code.as_str()))
            .collect();
        format!("{} {}", self.style.paint(DIM, "Categorías:"), labels.join(", "))
    }

    /// One creature card.
    pub fn card(&self, creature: &Creature) -> String {
        let labels: Vec<&str> = creature
            .categories()
            .iter()
            .map(|code| self.labels.label(code.as_str()))
            .collect();
        let metrics = creature.metrics();

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {}",
            self.style.paint(DIM, &creature.id().to_string()),
            self.style.paint(&format!("{BOLD}{CYAN}"), creature.name())
        );
        let _ = writeln!(out, "    {}", labels.join(" / "));
        let _ = writeln!(
            out,
            "    Altura: {:.1} m  Peso: {:.1} kg",
            metrics.height_m(),
            metrics.weight_kg()
        );
        out
    }

    /// The pagination bar; empty when there is a single page.
    pub fn controls(&self, controls: &PageControls) -> String {
        if !controls.visible {
            return String::new();
        }

        let mut parts = Vec::with_capacity(controls.pages.len() + 2);
        if controls.previous_enabled {
            parts.push("« Anterior".to_string());
        }
        for button in &controls.pages {
            parts.push(if button.active {
                self.style
                    .paint(&format!("{BOLD}{GREEN}"), &format!("[{}]", button.page))
            } else {
                button.page.to_string()
            });
        }
        if controls.next_enabled {
            parts.push("Siguiente »".to_string());
        }
        parts.join(" ")
    }

    /// The facet list, one `code  label` line each.
    pub fn facets(&self, codes: &[CategoryCode]) -> String {
        let width = codes.iter().map(|c| c.as_str().len()).max().unwrap_or(0);
        let mut out = String::new();
        for code in codes {
            let _ = writeln!(
                out,
                "  {:<width$}  {}",
                code.as_str(),
                self.labels.label(code.as_str())
            );
        }
        out
    }

    /// The message shown when the catalog could not be loaded.
    pub fn unavailable(&self, reason: &str) -> String {
        format!(
            "{} {reason}",
            self.style.paint(&format!("{BOLD}{RED}"), "Catálogo no disponible:")
        )
    }
}
