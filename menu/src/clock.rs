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
use chrono::Timelike;
use serde::{Deserialize, Serialize};

/// Source of the local wall-clock hour.
pub trait Clock {
    /// The current hour in the range 0..=23.
    fn current_hour(&self) -> u32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn current_hour(&self) -> u32 {
        chrono::Local::now().hour()
    }
}

/// A clock stuck at one hour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock(u32);

impl FixedClock {
    pub fn at_hour(hour: u32) -> Self {
        Self(hour)
    }
}

impl Clock for FixedClock {
    fn current_hour(&self) -> u32 {
        self.0
    }
}

/// Opening hours as a half open range `opens..closes` of hours.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct OpeningHours {
    pub opens: u32,
    pub closes: u32,
}

impl OpeningHours {
    pub fn new(opens: u32, closes: u32) -> Self {
        Self { opens, closes }
    }

    pub fn is_open(&self, clock: &dyn Clock) -> bool {
        let hour = clock.current_hour();
        self.opens <= hour && hour < self.closes
    }
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self::new(10, 22)
    }
}
