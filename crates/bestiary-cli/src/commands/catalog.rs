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


//! One-shot commands: `list`, `types` and `stats`.

use super::Output;
use anyhow::{Context, Result};
use bestiary_core::{CatalogSession, CategorySelector};
use serde::Serialize;
use std::io::Write;

/// Query given to `bestiary list`.
#[derive(Debug, Default, Clone)]
pub struct ListQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub page: Option<usize>,
}

/// Applies `query` to the session and prints the resulting page.
pub fn list<W: Write>(
    session: &mut CatalogSession,
    output: &Output,
    query: ListQuery,
    out: W,
) -> Result<()> {
    if let Some(term) = query.search {
        session.set_term(term);
    }
    if let Some(category) = query.category {
        session
            .set_category(CategorySelector::parse(&category))
            .context("Run `bestiary types` to see the available categories")?;
    }
    let view = match query.page {
        Some(page) => {
            let view = session.set_page(page);
            if view.page != page {
                log::warn!(
                    "Page {page} does not exist; showing page {} of {}.",
                    view.page,
                    view.total_pages
                );
            }
            view
        }
        None => session.view(),
    };
    output.view(&view, out)
}

#[derive(Serialize)]
struct FacetEntry<'a> {
    code: &'a str,
    label: &'a str,
}

/// Prints the categories present in the catalog.
pub fn types<W: Write>(session: &CatalogSession, output: &Output, mut out: W) -> Result<()> {
    let view = session.view();
    if output.is_json() {
        let renderer = output.renderer();
        let entries: Vec<FacetEntry<'_>> = view
            .facets
            .iter()
            .map(|code| FacetEntry {
                code: code.as_str(),
                label: renderer.labels.label(code.as_str()),
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string(&entries)?)?;
    } else {
        write!(out, "{}", output.renderer().facets(&view.facets))?;
    }
    Ok(())
}

/// Prints the stats triple for the unfiltered catalog.
pub fn stats<W: Write>(session: &CatalogSession, output: &Output, mut out: W) -> Result<()> {
    let stats = session.view().stats;
    if output.is_json() {
        writeln!(out, "{}", serde_json::to_string(&stats)?)?;
    } else {
        writeln!(out, "{}", output.renderer().stats(&stats))?;
    }
    Ok(())
}
