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

//! Ship records and the flags that track their interaction state.
use std::{fmt, str::FromStr, time::Instant};

use enumflags2::BitFlags;

use crate::geometry::{Extent, Position};

pub use self::fleet::{standard_fleet, MAX_SHIP_LEN};

mod fleet;

/// Stable identifier of a ship. IDs are assigned sequentially from 0 when the fleet is
/// generated.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ShipId(pub u32);

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ShipId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(ShipId)
    }
}

/// Transient interaction state of a ship. Never persisted.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum ShipFlag {
    /// The ship is being dragged.
    Dragging = 0b001,
    /// The ship is the current selection.
    Selected = 0b010,
    /// The ship has been marked destroyed.
    Destroyed = 0b100,
}

/// A ship on the board: a rectangle of whole cells with a committed pixel position.
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    id: ShipId,
    position: Position,
    extent: Extent,
    flags: BitFlags<ShipFlag>,
    /// When the ship last committed a rotation, for the cooldown.
    last_rotation: Option<Instant>,
}

impl Ship {
    pub(crate) fn new(id: ShipId, position: Position, extent: Extent) -> Self {
        Self {
            id,
            position,
            extent,
            flags: BitFlags::empty(),
            last_rotation: None,
        }
    }

    /// Get the ID of the ship.
    pub fn id(&self) -> ShipId {
        self.id
    }

    /// Last committed top-left position, in pixels.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Size of the ship in cells.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// All interaction flags currently set.
    pub fn flags(&self) -> BitFlags<ShipFlag> {
        self.flags
    }

    pub fn is_dragging(&self) -> bool {
        self.flags.contains(ShipFlag::Dragging)
    }

    pub fn is_selected(&self) -> bool {
        self.flags.contains(ShipFlag::Selected)
    }

    pub fn is_destroyed(&self) -> bool {
        self.flags.contains(ShipFlag::Destroyed)
    }

    pub(crate) fn last_rotation(&self) -> Option<Instant> {
        self.last_rotation
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub(crate) fn commit_rotation(&mut self, extent: Extent, now: Instant) {
        self.extent = extent;
        self.last_rotation = Some(now);
    }

    pub(crate) fn set_flag(&mut self, flag: ShipFlag, on: bool) {
        if on {
            self.flags.insert(flag);
        } else {
            self.flags.remove(flag);
        }
    }
}
