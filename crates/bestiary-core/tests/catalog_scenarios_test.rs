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

use bestiary_core::{
    CatalogSession, CategoryCode, CategorySelector, Creature, CreatureId, DisplayMetrics,
    EntityStore, FacetIndex, LoadStatus, PAGE_SIZE,
};

// --- Test Setup ---

fn creature(id: u32, name: &str, categories: &[&str]) -> Creature {
    Creature::new(
        CreatureId::new(id).unwrap(),
        name,
        categories.iter().copied().map(CategoryCode::from),
        DisplayMetrics {
            height: 10,
            weight: 100,
        },
        Some(format!("https://img.example/{id}.png")),
    )
    .unwrap()
}

/// 150 creatures, categories cycling through a fixed list.
fn first_generation() -> Vec<Creature> {
    const CATEGORIES: [&[&str]; 5] = [
        &["grass", "poison"],
        &["fire"],
        &["water"],
        &["electric"],
        &["normal", "flying"],
    ];
    (1..=150)
        .map(|n| creature(n, &format!("mon-{n:03}"), CATEGORIES[(n as usize) % 5]))
        .collect()
}

fn loaded(creatures: Vec<Creature>) -> CatalogSession {
    let mut session = CatalogSession::new();
    let view = session.finish_load(Ok::<_, String>(creatures));
    assert_eq!(view.status, LoadStatus::Ready);
    session
}

// --- Scenarios ---

#[test]
fn full_store_paginates_into_thirteen_pages() {
    let mut session = loaded(first_generation());

    let first = session.view();
    assert_eq!(first.total_pages, 13);
    assert_eq!(first.window.len(), PAGE_SIZE);
    assert_eq!(first.stats.total, 150);
    assert_eq!(first.stats.visible, 150);

    let last = session.set_page(13);
    assert_eq!(last.page, 13);
    assert_eq!(last.window.len(), 6);
    assert_eq!(last.window[0].id().get(), 145);
    assert!(!last.controls.next_enabled);
}

#[test]
fn term_search_keeps_source_order() {
    let mut session = loaded(vec![
        creature(4, "charmander", &["fire"]),
        creature(7, "squirtle", &["water"]),
        creature(6, "charizard", &["fire", "flying"]),
    ]);

    let view = session.set_term("char");
    let names: Vec<_> = view.window.iter().map(Creature::name).collect();
    assert_eq!(names, ["charmander", "charizard"]);
    assert_eq!(view.stats.visible, 2);
    assert_eq!(view.stats.total, 3);
}

#[test]
fn no_match_after_category_gives_single_empty_page() {
    let mut session = loaded(vec![
        creature(7, "squirtle", &["water"]),
        creature(8, "wartortle", &["water"]),
        creature(4, "charmander", &["fire"]),
    ]);

    let view = session
        .set_category(CategorySelector::Only("water".into()))
        .unwrap();
    assert_eq!(view.stats.visible, 2);

    let view = session.set_term("xyz");
    assert_eq!(view.stats.visible, 0);
    assert_eq!(view.total_pages, 1);
    assert!(view.window.is_empty());
    assert_eq!(view.page, 1);
    assert!(!view.controls.visible);
}

#[test]
fn clear_restores_the_full_catalog() {
    let mut creatures = first_generation();
    creatures.extend((151..=175).map(|n| creature(n, &format!("pikachu-{n}"), &["electric"])));
    let mut session = loaded(creatures);

    session.set_term("pika");
    session
        .set_category(CategorySelector::Only("electric".into()))
        .unwrap();
    let filtered = session.set_page(2);
    assert_eq!(filtered.page, 2);
    assert_eq!(filtered.stats.visible, 25);

    let view = session.clear();
    assert_eq!(view.query.term(), "");
    assert_eq!(view.query.category(), &CategorySelector::All);
    assert_eq!(view.page, 1);
    assert_eq!(view.stats.visible, 175);
    assert_eq!(view.stats.visible, view.stats.total);
}

// --- Properties ---

#[test]
fn every_term_or_category_change_lands_on_page_one() {
    let mut session = loaded(first_generation());
    let facets: Vec<CategoryCode> = session.view().facets;

    for code in &facets {
        session.set_page(2);
        let view = session
            .set_category(CategorySelector::Only(code.clone()))
            .unwrap();
        assert_eq!(view.page, 1, "category {code}");

        session.set_page(2);
        assert_eq!(session.set_term("mon").page, 1);
    }

    // Repeating the current value still resets.
    session.set_term("");
    session.set_page(3);
    assert_eq!(session.set_term("").page, 1);
}

#[test]
fn windows_cover_the_filtered_subset_exactly_once() {
    let mut session = loaded(first_generation());
    let view = session
        .set_category(CategorySelector::Only("fire".into()))
        .unwrap();
    let expected: Vec<u32> = first_generation()
        .iter()
        .filter(|c| c.has_category("fire"))
        .map(|c| c.id().get())
        .collect();
    assert_eq!(view.total_pages, expected.len().div_ceil(PAGE_SIZE).max(1));

    let mut seen = Vec::new();
    for page in 1..=view.total_pages {
        let window = session.set_page(page).window;
        seen.extend(window.iter().map(|c| c.id().get()));
    }
    assert_eq!(seen, expected);
}

#[test]
fn facets_are_sorted_and_stable() {
    let store = EntityStore::new(first_generation()).unwrap();
    let facets = FacetIndex::build(&store);
    let codes: Vec<_> = facets.codes().iter().map(CategoryCode::as_str).collect();
    assert_eq!(
        codes,
        ["electric", "fire", "flying", "grass", "normal", "poison", "water"]
    );
    assert_eq!(facets, FacetIndex::build(&store));

    let session = CatalogSession::with_store(store);
    assert_eq!(session.view().stats.facet_count, 7);
}
