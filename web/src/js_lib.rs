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
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys::window;

pub fn get_element_by_id<E>(id: &str) -> anyhow::Result<Option<E>>
where
    E: JsCast,
{
    let document = window()
        .ok_or_else(|| anyhow!("No window present"))?
        .document()
        .ok_or_else(|| anyhow!("No document in window"))?;
    match document.get_element_by_id(id) {
        Some(e) => e
            .dyn_into::<E>()
            .map(|e| Some(e))
            .map_err(|_| anyhow!("Element {} is not of the expected type", id)),
        None => Ok(None),
    }
}
