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
pub mod footer;
pub mod header;
pub mod menu_list;
pub mod navbar;
pub mod pizza;
pub mod search_bar;

pub use footer::*;
pub use header::*;
pub use menu_list::*;
pub use navbar::*;
pub use pizza::*;
pub use search_bar::*;
