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

use menu::{NavLink, SiteConfig};
use sycamore::prelude::*;

#[component]
pub fn Navbar<G: Html>(cx: Scope) -> View<G> {
    let config = use_context::<SiteConfig>(cx);
    let links = create_signal(cx, config.nav_links.clone());
    let logo = config.logo_url.clone();
    let name = config.business_name.clone();
    view! {cx,
        nav(class="navbar navbar-expand-lg navbar-dark bg-dark") {
            a(class="navbar-brand d-flex align-items-center", href="#") {
                img(src=logo, alt="Logo", width="40", class="mr-2")
                (name)
            }
            div(class="navbar-nav ml-auto") {
                Indexed(
                    iterable=links,
                    view=|cx, link| {
                        let NavLink { href, label } = link;
                        view! {cx,
                            a(class="nav-item nav-link", href=href) { (label) }
                        }
                    }
                )
            }
        }
    }
}
