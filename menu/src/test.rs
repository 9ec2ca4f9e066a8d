// Copyright 2026 Jeremy Wall
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
use crate::*;

fn margherita() -> PizzaRecord {
    PizzaRecord::new("Margherita", "tomato, mozzarella", 8.0, "pizzas/margherita.jpg")
}

fn small_catalog() -> Vec<PizzaRecord> {
    vec![
        margherita(),
        PizzaRecord::new("Funghi", "Tomato, mozzarella, mushrooms", 12.0, "pizzas/funghi.jpg"),
        PizzaRecord::new("Salamino", "Tomato, mozzarella, pepperoni", 15.0, "pizzas/salamino.jpg")
            .with_sold_out(true),
    ]
}

fn names(pizzas: &[PizzaRecord]) -> Vec<&str> {
    pizzas.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn test_empty_search_matches_everything() {
    let state = MenuState::new(small_catalog());
    assert_eq!(state.filtered(), small_catalog());
}

#[test]
fn test_search_without_matches_is_empty() {
    let state = MenuState::new(small_catalog()).set_search_query("anchovies");
    assert!(state.filtered().is_empty());
}

#[test]
fn test_search_matches_ingredients_case_insensitively() {
    let state = MenuState::new(small_catalog()).set_search_query("MUSHROOM");
    assert_eq!(names(&state.filtered()), vec!["Funghi"]);
    let state = state.set_search_query("pepperoni");
    assert_eq!(names(&state.filtered()), vec!["Salamino"]);
}

#[test]
fn test_search_matches_name_and_keeps_order() {
    let state = MenuState::new(small_catalog()).set_search_query("mozzarella");
    assert_eq!(names(&state.filtered()), vec!["Margherita", "Funghi", "Salamino"]);
    let state = state.set_search_query("gHeR");
    assert_eq!(names(&state.filtered()), vec!["Margherita"]);
}

#[test]
fn test_search_query_is_kept_verbatim() {
    let state = MenuState::new(small_catalog()).set_search_query("  Tomato ");
    assert_eq!(state.search_query, "  Tomato ");
    assert!(state.filtered().is_empty());
    let state = state.set_search_query("");
    assert_eq!(state.search_query, "");
    assert_eq!(state.filtered().len(), 3);
}

#[test]
fn test_toggle_favorite_twice_restores_state() {
    let original = MenuState::new(small_catalog());
    let once = original.clone().toggle_favorite("Funghi");
    assert!(once.pizzas[1].is_favorite);
    assert_eq!(once.pizzas[0], original.pizzas[0]);
    assert_eq!(once.pizzas[2], original.pizzas[2]);
    let twice = once.toggle_favorite("Funghi");
    assert_eq!(twice, original);
}

#[test]
fn test_toggle_unknown_favorite_is_noop() {
    let original = MenuState::new(small_catalog());
    let toggled = original.clone().apply(Message::ToggleFavorite("Nonexistent".to_owned()));
    assert_eq!(toggled, original);
}

#[test]
fn test_sold_out_pizzas_can_be_favorites() {
    let state = MenuState::new(small_catalog())
        .toggle_favorite("Salamino")
        .toggle_show_favorites();
    assert_eq!(names(&state.filtered()), vec!["Salamino"]);
    assert!(state.filtered()[0].sold_out);
}

#[test]
fn test_show_favorites_without_favorites_is_empty() {
    let mut state = MenuState::new(small_catalog()).toggle_show_favorites();
    assert!(state.show_favorites);
    for query in ["", "tomato", "Funghi", "nothing here"] {
        state = state.set_search_query(query);
        assert!(state.filtered().is_empty(), "query {:?} was not empty", query);
    }
    let state = state.toggle_show_favorites();
    assert!(!state.show_favorites);
}

#[test]
fn test_margherita_scenario() {
    let state = MenuState::new(vec![margherita()])
        .apply(Message::SetSearchQuery("tomato".to_owned()));
    assert_eq!(state.filtered(), vec![margherita()]);

    let state = state.apply(Message::ToggleFavorite("Margherita".to_owned()));
    assert!(state.pizzas[0].is_favorite);

    let state = state
        .apply(Message::ToggleShowFavorites)
        .apply(Message::SetSearchQuery(String::new()));
    assert_eq!(names(&state.filtered()), vec!["Margherita"]);
}

#[test]
fn test_filter_pizzas_combines_search_and_favorites() {
    let pizzas = vec![
        margherita().with_favorite(true),
        PizzaRecord::new("Funghi", "tomato, mushrooms", 12.0, "f.jpg").with_favorite(true),
        PizzaRecord::new("Bianca", "ricotta", 11.0, "b.jpg").with_favorite(true),
        PizzaRecord::new("Marinara", "tomato, garlic", 7.0, "m.jpg"),
    ];
    assert_eq!(names(&filter_pizzas(&pizzas, "tomato", true)), vec!["Margherita", "Funghi"]);
    assert_eq!(
        names(&filter_pizzas(&pizzas, "tomato", false)),
        vec!["Margherita", "Funghi", "Marinara"]
    );
    assert!(filter_pizzas(&[], "", false).is_empty());
}

#[test]
fn test_display_price_and_glyph() {
    let pizza = margherita();
    assert_eq!(pizza.display_price("$"), "$8");
    assert_eq!(pizza.favorite_glyph(), "♡");
    let pizza = PizzaRecord::new("Half", "", 12.5, "").with_favorite(true);
    assert_eq!(pizza.display_price("€"), "€12.5");
    assert_eq!(pizza.favorite_glyph(), "♥");
}

#[test]
fn test_opening_hours_boundaries() {
    let hours = OpeningHours::default();
    assert!(hours.is_open(&FixedClock::at_hour(10)));
    assert!(hours.is_open(&FixedClock::at_hour(21)));
    assert!(!hours.is_open(&FixedClock::at_hour(9)));
    assert!(!hours.is_open(&FixedClock::at_hour(22)));
    assert!(!hours.is_open(&FixedClock::at_hour(0)));
}

#[test]
fn test_local_clock_hour_in_range() {
    assert!(LocalClock.current_hour() < 24);
}

#[test]
fn test_as_catalog() {
    let json = r#"[
        {"name": "Margherita", "ingredients": "tomato, mozzarella", "price": 8, "photoName": "m.jpg", "soldOut": false},
        {"name": "Salamino", "ingredients": "pepperoni", "price": 15.5, "photoName": "s.jpg", "soldOut": true, "isFavorite": true}
    ]"#;
    let pizzas = parse::as_catalog(json).expect("Failed to parse catalog");
    assert_eq!(pizzas.len(), 2);
    assert_eq!(
        pizzas[0],
        PizzaRecord::new("Margherita", "tomato, mozzarella", 8.0, "m.jpg")
    );
    assert_eq!(pizzas[1].price, 15.5);
    assert!(pizzas[1].sold_out);
    assert!(!pizzas[1].is_favorite);
}

#[test]
fn test_as_catalog_rejects_bad_data() {
    assert!(parse::as_catalog("not json").is_err());
    assert!(parse::as_catalog(r#"[{"name": "No Price"}]"#).is_err());
    let negative =
        r#"[{"name": "A", "ingredients": "", "price": -1, "photoName": "", "soldOut": false}]"#;
    assert!(parse::as_catalog(negative).is_err());
    let duplicate = r#"[
        {"name": "A", "ingredients": "", "price": 1, "photoName": "", "soldOut": false},
        {"name": "A", "ingredients": "", "price": 2, "photoName": "", "soldOut": false}
    ]"#;
    let err = parse::as_catalog(duplicate).unwrap_err();
    assert!(err.contains("Duplicate"), "{}", err);
    assert_eq!(parse::as_catalog("[]"), Ok(Vec::new()));
}

#[test]
fn test_default_catalog() {
    let pizzas = catalog::default_catalog().expect("Failed to parse the default catalog");
    assert_eq!(pizzas.len(), 6);
    assert_eq!(pizzas[0].name, "Focaccia");
    assert!(pizzas.iter().all(|p| !p.is_favorite));
    assert_eq!(pizzas.iter().filter(|p| p.sold_out).count(), 1);
}

#[test]
fn test_site_config_default() {
    let config = SiteConfig::default();
    assert_eq!(config.business_name, "Andy's Pizza Co.");
    assert_eq!(config.hours, OpeningHours::new(10, 22));
    let labels: Vec<&str> = config.nav_links.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec!["Home", "Menu", "About Us", "Contact"]);
}
