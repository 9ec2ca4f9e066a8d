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
pub mod catalog;
pub mod clock;
pub mod config;
pub mod parse;

use serde::{Deserialize, Serialize};

pub use clock::{Clock, FixedClock, LocalClock, OpeningHours};
pub use config::{NavLink, SiteConfig};

/// A single item on the menu. The name is the identity of the record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PizzaRecord {
    pub name: String,
    pub ingredients: String,
    pub price: f64,
    pub photo_name: String,
    pub sold_out: bool,
    #[serde(default)]
    pub is_favorite: bool,
}

impl PizzaRecord {
    pub fn new<NS: Into<String>, IS: Into<String>, PS: Into<String>>(
        name: NS,
        ingredients: IS,
        price: f64,
        photo_name: PS,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into(),
            price,
            photo_name: photo_name.into(),
            sold_out: false,
            is_favorite: false,
        }
    }

    pub fn with_sold_out(mut self, sold_out: bool) -> Self {
        self.sold_out = sold_out;
        self
    }

    pub fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    /// Case insensitive match against the name or the ingredients.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.ingredients.to_lowercase().contains(&query)
    }

    /// The price prefixed with the currency symbol. Whole prices are
    /// printed without a fractional part.
    pub fn display_price(&self, currency: &str) -> String {
        format!("{}{}", currency, self.price)
    }

    pub fn favorite_glyph(&self) -> &'static str {
        if self.is_favorite {
            "♥"
        } else {
            "♡"
        }
    }
}

/// Requests that can change a `MenuState`.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    ToggleFavorite(String),
    SetSearchQuery(String),
    ToggleShowFavorites,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuState {
    pub pizzas: Vec<PizzaRecord>,
    pub search_query: String,
    pub show_favorites: bool,
}

impl MenuState {
    pub fn new(pizzas: Vec<PizzaRecord>) -> Self {
        Self {
            pizzas,
            search_query: String::new(),
            show_favorites: false,
        }
    }

    pub fn apply(self, msg: Message) -> Self {
        match msg {
            Message::ToggleFavorite(name) => self.toggle_favorite(&name),
            Message::SetSearchQuery(text) => self.set_search_query(text),
            Message::ToggleShowFavorites => self.toggle_show_favorites(),
        }
    }

    /// Flips the favorite flag on the record named `name`. Unknown names
    /// leave the state untouched.
    pub fn toggle_favorite(mut self, name: &str) -> Self {
        if let Some(pizza) = self.pizzas.iter_mut().find(|p| p.name == name) {
            pizza.is_favorite = !pizza.is_favorite;
        }
        self
    }

    pub fn set_search_query<S: Into<String>>(mut self, text: S) -> Self {
        self.search_query = text.into();
        self
    }

    pub fn toggle_show_favorites(mut self) -> Self {
        self.show_favorites = !self.show_favorites;
        self
    }

    pub fn filtered(&self) -> Vec<PizzaRecord> {
        filter_pizzas(&self.pizzas, &self.search_query, self.show_favorites)
    }
}

/// The subsequence of `pizzas` matching `query` and, when `favorites_only`
/// is set, marked as a favorite.
pub fn filter_pizzas(
    pizzas: &[PizzaRecord],
    query: &str,
    favorites_only: bool,
) -> Vec<PizzaRecord> {
    pizzas
        .iter()
        .filter(|p| p.matches(query))
        .filter(|p| !favorites_only || p.is_favorite)
        .cloned()
        .collect()
}

#[cfg(test)]
mod test;
