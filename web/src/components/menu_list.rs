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
use menu::PizzaRecord;
use sycamore::prelude::*;
use tracing::instrument;

use crate::{app_state::StateHandler, components::Pizza};

#[derive(Prop)]
pub struct MenuListProps<'ctx> {
    pub sh: StateHandler<'ctx>,
    pub pizzas: &'ctx ReadSignal<Vec<PizzaRecord>>,
}

#[instrument(skip_all)]
#[component]
pub fn MenuList<'ctx, G: Html>(cx: Scope<'ctx>, props: MenuListProps<'ctx>) -> View<G> {
    let MenuListProps { sh, pizzas } = props;
    view! {cx,
        div(id="menu", class="menu text-center") {
            h2(class="my-4") { "Our Menu" }
            div(class="d-flex flex-wrap justify-content-center") {
                Indexed(
                    iterable=pizzas,
                    view=move |cx, pizza| view! {cx,
                        Pizza(sh=sh, pizza=pizza)
                    }
                )
            }
        }
    }
}
