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
use serde_json::from_str;

use crate::PizzaRecord;

/// Decode a JSON catalog. Names must be unique and prices must be finite
/// and non-negative. Every record starts out as a non favorite.
pub fn as_catalog(i: &str) -> std::result::Result<Vec<PizzaRecord>, String> {
    let mut pizzas: Vec<PizzaRecord> =
        from_str(i).map_err(|e| format!("Parse Failure: {}", e))?;
    for (idx, pizza) in pizzas.iter().enumerate() {
        if !pizza.price.is_finite() || pizza.price < 0.0 {
            return Err(format!(
                "Invalid price {} for {}",
                pizza.price, pizza.name
            ));
        }
        if pizzas[..idx].iter().any(|p| p.name == pizza.name) {
            return Err(format!("Duplicate pizza name {}", pizza.name));
        }
    }
    for pizza in pizzas.iter_mut() {
        pizza.is_favorite = false;
    }
    Ok(pizzas)
}
