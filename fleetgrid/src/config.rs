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

//! Process-wide editor settings.
use std::time::Duration;

use crate::board::{
    DimensionsError, GridDimensions, RotationCooldown, DEFAULT_CELL_SIZE, DEFAULT_GRID_SIZE,
    DEFAULT_ROTATION_COOLDOWN,
};

/// Settings used to build a [`Board`][crate::board::Board].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct EditorConfig {
    /// Number of cells along each side of the grid.
    pub grid_size: u32,
    /// Size of one cell in pixels.
    pub cell_size: u32,
    /// Minimum time between two rotations of the same ship.
    pub rotation_cooldown: Duration,
}

impl EditorConfig {
    /// Validate the grid settings.
    pub fn dimensions(&self) -> Result<GridDimensions, DimensionsError> {
        GridDimensions::try_new(self.grid_size, self.cell_size)
    }

    pub fn cooldown(&self) -> RotationCooldown {
        RotationCooldown::new(self.rotation_cooldown)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
            rotation_cooldown: DEFAULT_ROTATION_COOLDOWN,
        }
    }
}
