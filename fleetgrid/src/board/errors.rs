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

//! Errors used by the [`Board`][crate::board::Board] and its validator.

use std::time::Duration;

use thiserror::Error;

use crate::ships::ShipId;

/// Reason why a ship could not be placed with a given rectangle.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// Some part of the rectangle falls outside the grid.
    #[error("the requested position is outside the grid")]
    OutOfBounds,
    /// The rectangle shares area with another ship.
    #[error("the requested position overlaps ship {0}")]
    Overlaps(ShipId),
}

/// Error returned by operations that name a ship which is not on the board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("no ship with id {0}")]
pub struct UnknownShip(pub ShipId);

/// Reason a rotation was not applied.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum RotateError {
    /// No ship with the given ID exists.
    #[error(transparent)]
    UnknownShip(#[from] UnknownShip),

    /// The ship rotated too recently. The trigger is ignored.
    #[error("ship is cooling down for another {remaining:?}")]
    CoolingDown { remaining: Duration },

    /// The rotated ship would not fit where it is.
    #[error("rotation blocked: {0}")]
    Blocked(#[source] CannotPlaceReason),
}

/// Error caused by invalid grid dimensions.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum DimensionsError {
    /// The grid size or cell size was 0.
    #[error("grid and cell size must be nonzero")]
    Empty,

    /// The grid's pixel span does not fit in an `i64`.
    #[error("grid is too large")]
    Overflow,

    /// The grid cannot hold the starting fleet layout.
    #[error("a {grid_size}x{grid_size} grid cannot hold the fleet, which needs {columns} columns and {rows} rows")]
    TooSmallForFleet {
        grid_size: u32,
        columns: u32,
        rows: u32,
    },
}
