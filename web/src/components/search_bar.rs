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
use menu::Message;
use sycamore::prelude::*;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement};

use crate::app_state::StateHandler;

#[derive(Prop)]
pub struct SearchBarProps<'ctx> {
    pub sh: StateHandler<'ctx>,
    pub show_favorites: &'ctx ReadSignal<bool>,
}

fn input_value(evt: &Event) -> String {
    evt.target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .map(|el| el.value())
        .unwrap_or_default()
}

#[component]
pub fn SearchBar<'ctx, G: Html>(cx: Scope<'ctx>, props: SearchBarProps<'ctx>) -> View<G> {
    let SearchBarProps { sh, show_favorites } = props;
    let toggle_label = create_memo(cx, move || {
        if *show_favorites.get() {
            "Show All"
        } else {
            "Show Favorites"
        }
    });
    view! {cx,
        div(class="text-center my-4") {
            input(
                type="text",
                placeholder="Search pizzas...",
                class="form-control w-50 mx-auto",
                on:input=move |evt: Event| {
                    let query = input_value(&evt);
                    debug!(%query, "search updated");
                    sh.dispatch(cx, Message::SetSearchQuery(query));
                }
            )
            button(class="btn btn-secondary mt-2", on:click=move |_| {
                sh.dispatch(cx, Message::ToggleShowFavorites)
            }) { (*toggle_label.get()) }
        }
    }
}
