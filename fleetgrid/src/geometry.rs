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

//! Pixel and cell geometry shared by the board, the validator, and the scene.

use std::fmt;

/// Raw pointer position reported by the interaction layer, in pixels. May be fractional,
/// negative, or anywhere off the board.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    /// Construct a [`PixelPoint`] from the given `x` and `y`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Round this point to the nearest grid cell origin for the given cell size. Halves
    /// round up, as the pointer layer does. Returns `None` if either coordinate is not
    /// finite or `cell_size` is 0.
    pub fn snap(self, cell_size: u32) -> Option<Position> {
        if cell_size == 0 || !self.x.is_finite() || !self.y.is_finite() {
            return None;
        }
        let cell = f64::from(cell_size);
        let snap_axis = |v: f64| ((v / cell + 0.5).floor() * cell) as i64;
        Some(Position::new(snap_axis(self.x), snap_axis(self.y)))
    }
}

impl From<Position> for PixelPoint {
    fn from(pos: Position) -> Self {
        Self::new(pos.x as f64, pos.y as f64)
    }
}

/// Top-left corner of a ship, in pixels.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    /// Construct a [`Position`] from the given `x` and `y`.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Pixel origin of the cell at (`col`, `row`).
    pub fn from_cell(col: i64, row: i64, cell_size: u32) -> Self {
        let cell = i64::from(cell_size);
        Self::new(col.saturating_mul(cell), row.saturating_mul(cell))
    }

    /// Cell that this position falls in, as `(col, row)`. Positions that are not on a cell
    /// boundary are floored.
    pub fn to_cell(self, cell_size: u32) -> (i64, i64) {
        let cell = i64::from(cell_size.max(1));
        (self.x.div_euclid(cell), self.y.div_euclid(cell))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Position {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

/// Size of a ship in grid cells.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Extent {
    /// Number of cells along `x`.
    pub width: u32,
    /// Number of cells along `y`.
    pub height: u32,
}

impl Extent {
    /// Construct an [`Extent`] of `width` by `height` cells.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The extent after a 90 degree rotation.
    pub fn rotated(self) -> Self {
        Self::new(self.height, self.width)
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Axis-aligned rectangle in pixels.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    /// Rectangle covered by a ship at `position` with `extent` cells of `cell_size` pixels.
    pub fn from_cells(position: Position, extent: Extent, cell_size: u32) -> Self {
        let cell = i64::from(cell_size);
        Self {
            x: position.x,
            y: position.y,
            width: i64::from(extent.width) * cell,
            height: i64::from(extent.height) * cell,
        }
    }

    pub fn right(&self) -> i64 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i64 {
        self.y.saturating_add(self.height)
    }

    /// True if the two rectangles share positive area. Rectangles that only touch along an
    /// edge or at a corner do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}
