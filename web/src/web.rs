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
use std::rc::Rc;

use menu::{Clock, MenuState, PizzaRecord, SiteConfig};
use sycamore::prelude::*;
use tracing::{info, instrument};

use crate::{app_state::get_state_handler, components::*};

#[derive(Prop)]
pub struct UIProps {
    pub catalog: Vec<PizzaRecord>,
    pub clock: Rc<dyn Clock>,
    pub config: SiteConfig,
}

#[instrument(skip_all)]
#[component]
pub fn UI<G: Html>(cx: Scope, props: UIProps) -> View<G> {
    let UIProps {
        catalog,
        clock,
        config,
    } = props;
    info!(pizzas = catalog.len(), "Starting UI");
    let hours = config.hours;
    provide_context(cx, config);
    let sh = get_state_handler(cx, MenuState::new(catalog));
    // Tracks the whole state so the hours are checked again on every change.
    let is_open = sh.get_selector(cx, move |state| {
        state.track();
        hours.is_open(clock.as_ref())
    });
    let filtered = sh.get_selector(cx, |state| state.get().filtered());
    let show_favorites = sh.get_selector(cx, |state| state.get().show_favorites);
    view! {cx,
        div(class="container") {
            Navbar()
            Header(is_open=is_open)
            SearchBar(sh=sh, show_favorites=show_favorites)
            MenuList(sh=sh, pizzas=filtered)
            Footer(is_open=is_open)
        }
    }
}
