// Copyright 2020 Zachary Stewart
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
use std::time::{Duration, Instant};

/// Default time a ship must wait after rotating before it may rotate again.
pub const DEFAULT_ROTATION_COOLDOWN: Duration = Duration::from_millis(250);

/// Debounce for repeated rotation triggers, compared against each ship's last rotation
/// timestamp.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RotationCooldown {
    period: Duration,
}

impl RotationCooldown {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left before a ship that last rotated at `last` may rotate again. `None` means
    /// the ship is ready. A `now` earlier than `last` counts as no time elapsed.
    pub fn remaining(&self, last: Option<Instant>, now: Instant) -> Option<Duration> {
        let elapsed = now.saturating_duration_since(last?);
        if elapsed < self.period {
            Some(self.period - elapsed)
        } else {
            None
        }
    }
}

impl Default for RotationCooldown {
    fn default() -> Self {
        Self::new(DEFAULT_ROTATION_COOLDOWN)
    }
}
