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

use menu::SiteConfig;
use sycamore::prelude::*;

#[derive(Prop)]
pub struct HeaderProps<'ctx> {
    pub is_open: &'ctx ReadSignal<bool>,
}

#[component]
pub fn Header<'ctx, G: Html>(cx: Scope<'ctx>, props: HeaderProps<'ctx>) -> View<G> {
    let HeaderProps { is_open } = props;
    let config = use_context::<SiteConfig>(cx);
    let name = config.business_name.clone();
    let tagline = config.tagline.clone();
    view! {cx,
        header(class="text-center py-4 bg-warning") {
            h1(style="font-size: 48px; text-transform: uppercase;") { (name) }
            (if *is_open.get() {
                let tagline = tagline.clone();
                view! {cx, p(class="mt-2") { (tagline) } }
            } else {
                View::empty()
            })
        }
    }
}
