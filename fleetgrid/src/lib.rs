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

//! State core for a Battleship ship-placement editor.
//!
//! Ships are rectangles of whole cells on a square grid. The user drags them around and
//! double-clicks them to rotate, and the [`Board`][board::Board] decides whether each move
//! is legal: every ship must stay inside the grid and no two ships may share area. Illegal
//! moves are never errors to the user, the ship just snaps back to where it was.
//!
//! [`board::placement`] holds the validator, [`scene`] turns the board into render
//! directives for whatever draws it.

pub mod board;
pub mod config;
pub mod geometry;
pub mod scene;
pub mod ships;

pub use crate::{
    board::{Board, DragOutcome},
    config::EditorConfig,
    geometry::{Extent, PixelPoint, Position, Rect},
    ships::{Ship, ShipFlag, ShipId},
};
