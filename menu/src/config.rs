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
use serde::{Deserialize, Serialize};

use crate::OpeningHours;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

impl NavLink {
    pub fn new<HS: Into<String>, LS: Into<String>>(href: HS, label: LS) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

/// Everything about the site that isn't part of the menu itself.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub business_name: String,
    pub tagline: String,
    pub logo_url: String,
    pub currency: String,
    pub hours: OpeningHours,
    pub nav_links: Vec<NavLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            business_name: "Andy's Pizza Co.".to_owned(),
            tagline: "Authentic Italian Cuisine".to_owned(),
            logo_url: "https://image.similarpng.com/very-thumbnail/2020/05/Pizza-logo-design-template-Vector-PNG.png".to_owned(),
            currency: "$".to_owned(),
            hours: OpeningHours::default(),
            nav_links: vec![
                NavLink::new("#home", "Home"),
                NavLink::new("#menu", "Menu"),
                NavLink::new("#aboutus", "About Us"),
                NavLink::new("#contact", "Contact"),
            ],
        }
    }
}
