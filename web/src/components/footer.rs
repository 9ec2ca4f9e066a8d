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

use sycamore::prelude::*;
use tracing::info;

#[derive(Prop)]
pub struct FooterProps<'ctx> {
    pub is_open: &'ctx ReadSignal<bool>,
}

#[component]
pub fn Footer<'ctx, G: Html>(cx: Scope<'ctx>, props: FooterProps<'ctx>) -> View<G> {
    let FooterProps { is_open } = props;
    let message = create_memo(cx, move || {
        if *is_open.get() {
            "We're currently open"
        } else {
            "Sorry, we're closed"
        }
    });
    view! {cx,
        footer(class="bg-dark text-white text-center py-3") {
            p { (*message.get()) }
            (if *is_open.get() {
                view! {cx,
                    div(class="text-center mt-3") {
                        // Ordering isn't wired up to anything yet.
                        button(class="btn btn-primary", on:click=|_| info!("Order requested")) { "Order Now" }
                    }
                }
            } else {
                View::empty()
            })
        }
    }
}
