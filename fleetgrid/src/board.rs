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

//! The editor board: the owned collection of ships and the gestures that move them.
use std::time::Instant;

use tracing::{debug, info, trace};

use crate::{
    config::EditorConfig,
    geometry::{Extent, PixelPoint, Position, Rect},
    scene::Frame,
    ships::{standard_fleet, Ship, ShipFlag, ShipId},
};

pub use self::{
    cooldown::{RotationCooldown, DEFAULT_ROTATION_COOLDOWN},
    dimensions::{GridDimensions, DEFAULT_CELL_SIZE, DEFAULT_GRID_SIZE},
    errors::{CannotPlaceReason, DimensionsError, RotateError, UnknownShip},
    placement::{can_place, check_placement},
};

mod cooldown;
mod dimensions;
mod errors;
pub mod placement;

/// Result of releasing a dragged ship.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DragOutcome {
    /// The drop was valid and the ship now sits at the given snapped position.
    Committed(Position),
    /// The drop was rejected. The ship keeps its previous position, which the caller
    /// should move it back to.
    SnappedBack {
        restore: Position,
        reason: CannotPlaceReason,
    },
}

impl DragOutcome {
    /// The position the ship should be drawn at after the drag.
    pub fn position(&self) -> Position {
        match *self {
            DragOutcome::Committed(pos) => pos,
            DragOutcome::SnappedBack { restore, .. } => restore,
        }
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, DragOutcome::Committed(_))
    }
}

/// The ship placement board. Owns every ship and is the only thing that mutates them.
///
/// After any operation every ship lies within the grid and no two ships share area.
#[derive(Debug, Clone)]
pub struct Board {
    /// Grid and cell size.
    dim: GridDimensions,

    /// Debounce applied to rotations.
    cooldown: RotationCooldown,

    /// All ships, in ID order.
    ships: Vec<Ship>,
}

impl Board {
    /// Build a board with the standard fleet from the given config.
    pub fn new(config: &EditorConfig) -> Result<Self, DimensionsError> {
        Self::with_dimensions(config.dimensions()?, config.cooldown())
    }

    /// Build a board with the standard fleet on a grid of the given dimensions.
    pub fn with_dimensions(
        dim: GridDimensions,
        cooldown: RotationCooldown,
    ) -> Result<Self, DimensionsError> {
        let ships = standard_fleet(&dim)?;
        info!(
            grid_size = dim.grid_size(),
            cell_size = dim.cell_size(),
            ships = ships.len(),
            "board created"
        );
        Ok(Self {
            dim,
            cooldown,
            ships,
        })
    }

    /// Get the [`GridDimensions`] of this board.
    pub fn dimensions(&self) -> &GridDimensions {
        &self.dim
    }

    pub fn cooldown(&self) -> &RotationCooldown {
        &self.cooldown
    }

    /// All ships on the board, in ID order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Get the ship with the specified ID if it exists.
    pub fn get_ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.iter().find(|ship| ship.id() == id)
    }

    /// Pixel rectangle currently covered by the given ship.
    pub fn rect(&self, ship: &Ship) -> Rect {
        self.dim.rect(ship.position(), ship.extent())
    }

    /// Rectangles of every ship except `id`.
    pub fn rects_except(&self, id: ShipId) -> Vec<Rect> {
        self.others(id).map(|(_, rect)| rect).collect()
    }

    /// The ship covering the cell at (`col`, `row`), if any.
    pub fn ship_at(&self, col: u32, row: u32) -> Option<ShipId> {
        let cell = self.dim.rect(
            Position::from_cell(i64::from(col), i64::from(row), self.dim.cell_size()),
            Extent::new(1, 1),
        );
        self.ships
            .iter()
            .find(|ship| self.rect(ship).overlaps(&cell))
            .map(Ship::id)
    }

    /// Get an iterator over the rows of the grid, where each row is an iterator over the
    /// ship occupying each cell, if any.
    pub fn iter_board(&self) -> impl '_ + Iterator<Item = impl '_ + Iterator<Item = Option<ShipId>>> {
        self.dim
            .iter_cells()
            .map(move |cells| cells.map(move |(col, row)| self.ship_at(col, row)))
    }

    /// Mark the ship as being dragged.
    pub fn begin_drag(&mut self, id: ShipId) -> Result<(), UnknownShip> {
        self.ship_mut(id)?.set_flag(ShipFlag::Dragging, true);
        trace!(ship = %id, "drag started");
        Ok(())
    }

    /// Release a dragged ship at the raw pointer position `drop`. The position is snapped
    /// to the nearest cell and validated against the grid and every other ship. A valid
    /// drop is committed, an invalid one leaves the ship where it was. The dragging flag is
    /// cleared either way.
    pub fn end_drag(&mut self, id: ShipId, drop: PixelPoint) -> Result<DragOutcome, UnknownShip> {
        let idx = self.index(id)?;
        let extent = self.ships[idx].extent();
        let restore = self.ships[idx].position();

        let checked = match drop.snap(self.dim.cell_size()) {
            None => Err(CannotPlaceReason::OutOfBounds),
            Some(pos) => {
                check_placement(&self.dim.rect(pos, extent), self.others(id), &self.dim)
                    .map(|()| pos)
            }
        };

        let ship = &mut self.ships[idx];
        ship.set_flag(ShipFlag::Dragging, false);
        Ok(match checked {
            Ok(pos) => {
                ship.set_position(pos);
                debug!(ship = %id, x = pos.x, y = pos.y, "drag committed");
                DragOutcome::Committed(pos)
            }
            Err(reason) => {
                trace!(ship = %id, x = drop.x, y = drop.y, %reason, "drag rejected");
                DragOutcome::SnappedBack { restore, reason }
            }
        })
    }

    /// Rotate the ship 90 degrees in place by swapping its extents. Triggers within the
    /// cooldown of the ship's last rotation are ignored. The swap is only committed if the
    /// rotated ship fits at its current position.
    pub fn rotate(&mut self, id: ShipId, now: Instant) -> Result<Extent, RotateError> {
        let idx = self.index(id)?;
        let ship = &self.ships[idx];

        if let Some(remaining) = self.cooldown.remaining(ship.last_rotation(), now) {
            trace!(ship = %id, ?remaining, "rotation ignored during cooldown");
            return Err(RotateError::CoolingDown { remaining });
        }

        let rotated = ship.extent().rotated();
        let candidate = self.dim.rect(ship.position(), rotated);
        if let Err(reason) = check_placement(&candidate, self.others(id), &self.dim) {
            trace!(ship = %id, %reason, "rotation rejected");
            return Err(RotateError::Blocked(reason));
        }

        self.ships[idx].commit_rotation(rotated, now);
        debug!(ship = %id, extent = %rotated, "rotation committed");
        Ok(rotated)
    }

    /// Make `id` the only selected ship.
    pub fn select(&mut self, id: ShipId) -> Result<(), UnknownShip> {
        self.index(id)?;
        for ship in &mut self.ships {
            let selected = ship.id() == id;
            ship.set_flag(ShipFlag::Selected, selected);
        }
        Ok(())
    }

    /// Clear the selection flag on every ship.
    pub fn clear_selection(&mut self) {
        for ship in &mut self.ships {
            ship.set_flag(ShipFlag::Selected, false);
        }
    }

    pub fn set_destroyed(&mut self, id: ShipId, destroyed: bool) -> Result<(), UnknownShip> {
        self.ship_mut(id)?.set_flag(ShipFlag::Destroyed, destroyed);
        Ok(())
    }

    /// Change the cell size. Every ship keeps its cell coordinates, so its pixel position
    /// is scaled to the new size.
    pub fn set_cell_size(&mut self, cell_size: u32) -> Result<(), DimensionsError> {
        let dim = self.dim.with_cell_size(cell_size)?;
        let old = self.dim.cell_size();
        for ship in &mut self.ships {
            let (col, row) = ship.position().to_cell(old);
            ship.set_position(Position::from_cell(col, row, cell_size));
        }
        self.dim = dim;
        info!(cell_size, "cell size changed");
        Ok(())
    }

    /// Build the render directives for the current state.
    pub fn frame(&self) -> Frame {
        Frame::build(self)
    }

    fn index(&self, id: ShipId) -> Result<usize, UnknownShip> {
        self.ships
            .iter()
            .position(|ship| ship.id() == id)
            .ok_or(UnknownShip(id))
    }

    fn ship_mut(&mut self, id: ShipId) -> Result<&mut Ship, UnknownShip> {
        self.ships
            .iter_mut()
            .find(|ship| ship.id() == id)
            .ok_or(UnknownShip(id))
    }

    /// IDs and rectangles of every ship except `id`.
    fn others(&self, id: ShipId) -> impl '_ + Iterator<Item = (ShipId, Rect)> {
        self.ships
            .iter()
            .filter(move |ship| ship.id() != id)
            .map(move |ship| (ship.id(), self.rect(ship)))
    }
}
