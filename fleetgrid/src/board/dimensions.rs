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

//! Square grid dimensions measured in cells, with a pixel size per cell.
use std::convert::TryFrom;

use crate::{
    board::DimensionsError,
    geometry::{Extent, Position, Rect},
};

/// Default number of cells along each side of the grid.
pub const DEFAULT_GRID_SIZE: u32 = 10;

/// Default size of a single cell, in pixels.
pub const DEFAULT_CELL_SIZE: u32 = 35;

/// Dimensions of a square grid. `grid_size` cells on each side, each `cell_size` pixels
/// square.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GridDimensions {
    /// Number of cells along each axis.
    grid_size: u32,
    /// Size of one cell in pixels.
    cell_size: u32,
}

impl GridDimensions {
    /// Create new [`GridDimensions`] with the given grid and cell size.
    /// Panics if either is 0 or the total pixel span does not fit in an `i64`.
    pub fn new(grid_size: u32, cell_size: u32) -> Self {
        match Self::try_new(grid_size, cell_size) {
            Ok(dim) => dim,
            Err(err) => panic!("invalid grid dimensions {}x{}: {}", grid_size, cell_size, err),
        }
    }

    /// Create new [`GridDimensions`] with the given grid and cell size.
    /// Returns an error if either is 0 or the total pixel span does not fit in an `i64`.
    pub fn try_new(grid_size: u32, cell_size: u32) -> Result<Self, DimensionsError> {
        if grid_size == 0 || cell_size == 0 {
            return Err(DimensionsError::Empty);
        }
        u64::from(grid_size)
            .checked_mul(u64::from(cell_size))
            .and_then(|span| i64::try_from(span).ok())
            .map(|_| Self {
                grid_size,
                cell_size,
            })
            .ok_or(DimensionsError::Overflow)
    }

    /// Number of cells along each side.
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// Size of one cell in pixels.
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Get these dimensions with a different cell size.
    pub fn with_cell_size(&self, cell_size: u32) -> Result<Self, DimensionsError> {
        Self::try_new(self.grid_size, cell_size)
    }

    /// Total size of the grid along one axis, in pixels.
    pub fn pixel_span(&self) -> i64 {
        i64::from(self.grid_size) * i64::from(self.cell_size)
    }

    /// Pixel rectangle covered by a ship at `position` with the given `extent`.
    pub fn rect(&self, position: Position, extent: Extent) -> Rect {
        Rect::from_cells(position, extent, self.cell_size)
    }

    /// Whether `rect` lies entirely within the grid. Equivalent to
    /// `0 <= x <= (grid_size - width_in_cells) * cell_size` along each axis.
    pub fn contains(&self, rect: &Rect) -> bool {
        let span = self.pixel_span();
        rect.x >= 0 && rect.y >= 0 && rect.right() <= span && rect.bottom() <= span
    }

    /// Iterate the rows of this grid. Each row is an iterator over the `(col, row)` pairs
    /// in that row.
    pub fn iter_cells(&self) -> impl Iterator<Item = impl Iterator<Item = (u32, u32)>> {
        let size = self.grid_size;
        (0..size).map(move |row| (0..size).map(move |col| (col, row)))
    }
}

impl Default for GridDimensions {
    /// The standard 10x10 grid with 35 pixel cells.
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty() {
        assert_eq!(GridDimensions::try_new(0, 35), Err(DimensionsError::Empty));
        assert_eq!(GridDimensions::try_new(10, 0), Err(DimensionsError::Empty));
    }

    #[test]
    fn rejects_overflow() {
        assert_eq!(
            GridDimensions::try_new(u32::max_value(), u32::max_value()),
            Err(DimensionsError::Overflow)
        );
    }

    #[test]
    fn contains_edges() {
        let dim = GridDimensions::default();
        assert_eq!(dim.pixel_span(), 350);
        assert!(dim.contains(&dim.rect(Position::new(315, 210), Extent::new(1, 4))));
        assert!(!dim.contains(&dim.rect(Position::new(315, 245), Extent::new(1, 4))));
        assert!(!dim.contains(&dim.rect(Position::new(-35, 0), Extent::new(1, 1))));
    }
}
