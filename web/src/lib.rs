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
mod app_state;
mod components;
mod js_lib;
mod web;

use std::rc::Rc;

use menu::{catalog, Clock, LocalClock, SiteConfig};
use sycamore::prelude::*;
use tracing::{error, info, warn};
use tracing_subscriber::fmt::format::Pretty;
use tracing_subscriber::{filter::LevelFilter, prelude::*};
use tracing_web::{performance_layer, MakeWebConsoleWriter};
use wasm_bindgen::prelude::wasm_bindgen;

use web::UI;

const MOUNT_POINT: &'static str = "root";

fn configure_tracing() {
    let max_level = if cfg!(feature = "debug_logs") {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(max_level);
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(perf_layer)
        .init();
}

fn mount_point() -> anyhow::Result<Option<web_sys::HtmlElement>> {
    js_lib::get_element_by_id::<web_sys::HtmlElement>(MOUNT_POINT)
}

#[wasm_bindgen(start)]
pub fn main() {
    if cfg!(feature = "web") {
        console_error_panic_hook::set_once();
        configure_tracing();
    }
    let pizzas = catalog::default_catalog().unwrap_or_else(|err| {
        error!(?err, "Unable to load the catalog");
        Vec::new()
    });
    let clock: Rc<dyn Clock> = Rc::new(LocalClock);
    let root = match mount_point() {
        Ok(root) => root,
        Err(err) => {
            error!(?err, "Unable to locate the mount point");
            None
        }
    };
    let app = move |cx: Scope| {
        view! {cx,
            UI(catalog=pizzas, clock=clock, config=SiteConfig::default())
        }
    };
    match root {
        Some(root) => {
            info!(id = MOUNT_POINT, "Mounting UI");
            sycamore::render_to(app, &root);
        }
        None => {
            warn!(id = MOUNT_POINT, "No mount point found. Mounting to body");
            sycamore::render(app);
        }
    }
}
