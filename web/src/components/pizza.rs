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
use menu::{Message, PizzaRecord, SiteConfig};
use sycamore::prelude::*;
use tracing::{debug, instrument};

use crate::app_state::StateHandler;

#[derive(Prop)]
pub struct PizzaProps<'ctx> {
    pub sh: StateHandler<'ctx>,
    pub pizza: PizzaRecord,
}

#[instrument(skip_all, fields(name=%props.pizza.name))]
#[component]
pub fn Pizza<'ctx, G: Html>(cx: Scope<'ctx>, props: PizzaProps<'ctx>) -> View<G> {
    let PizzaProps { sh, pizza } = props;
    let config = use_context::<SiteConfig>(cx);
    let price = pizza.display_price(&config.currency);
    let favorite_label = format!("{} Favorite", pizza.favorite_glyph());
    let sold_out = if pizza.sold_out {
        view! {cx, p(class="text-danger") { "Sold Out" } }
    } else {
        View::empty()
    };
    let PizzaRecord {
        name,
        ingredients,
        photo_name,
        ..
    } = pizza;
    let alt = name.clone();
    let title = name.clone();
    view! {cx,
        div(class="pizza-item card m-2", style="width: 18rem;") {
            img(src=photo_name, alt=alt, class="card-img-top")
            div(class="card-body") {
                h3(class="card-title") { (title) }
                p(class="card-text") { (ingredients) }
                p(class="card-text") { (price) }
                (sold_out)
                button(class="btn btn-outline-danger", on:click=move |_| {
                    debug!(%name, "toggling favorite");
                    sh.dispatch(cx, Message::ToggleFavorite(name.clone()))
                }) { (favorite_label) }
            }
        }
    }
}
