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

//! Render directives handed to the drawing layer each frame. Nothing here draws; it only
//! describes what should be drawn.

use enumflags2::BitFlags;

use crate::{
    board::{Board, GridDimensions},
    geometry::Position,
    ships::{ShipFlag, ShipId},
};

/// Width of the scene the stage is laid out for, in pixels.
pub const SCENE_BASE_WIDTH: f64 = 800.0;

/// Stroke width of the grid lines.
pub const GRID_STROKE_WIDTH: u32 = 1;

/// Stroke colour of the grid lines.
pub const GRID_STROKE: &str = "black";

/// Scale to apply to the stage so the base scene fills a viewport `viewport_width`
/// pixels wide.
pub fn stage_scale(viewport_width: f64) -> f64 {
    viewport_width / SCENE_BASE_WIDTH
}

/// Direction a grid line runs in.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LineAxis {
    Vertical,
    Horizontal,
}

/// A single grid line from `start` to `end`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GridLine {
    pub axis: LineAxis,
    pub start: Position,
    pub end: Position,
    pub stroke_width: u32,
    pub stroke: &'static str,
}

/// Build the grid lines for the given dimensions: one line on each cell boundary along
/// each axis, including both outer edges.
pub fn grid_lines(dim: &GridDimensions) -> Vec<GridLine> {
    let span = dim.pixel_span();
    let cell = i64::from(dim.cell_size());
    let boundaries = 0..=i64::from(dim.grid_size());
    let line = |axis, start, end| GridLine {
        axis,
        start,
        end,
        stroke_width: GRID_STROKE_WIDTH,
        stroke: GRID_STROKE,
    };

    let vertical = boundaries.clone().map(|i| {
        line(
            LineAxis::Vertical,
            Position::new(cell * i, 0),
            Position::new(cell * i, span),
        )
    });
    let horizontal = boundaries.map(|i| {
        line(
            LineAxis::Horizontal,
            Position::new(0, cell * i),
            Position::new(span, cell * i),
        )
    });
    vertical.chain(horizontal).collect()
}

/// Visual feedback for a ship. Derived entirely from its flags.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Appearance {
    pub scale: f64,
    pub shadow_color: &'static str,
    pub shadow_blur: f64,
    pub shadow_opacity: f64,
    /// Applied to both `x` and `y`.
    pub shadow_offset: f64,
    pub opacity: f64,
}

impl Appearance {
    pub fn for_flags(flags: BitFlags<ShipFlag>) -> Self {
        let dragging = flags.contains(ShipFlag::Dragging);
        let selected = flags.contains(ShipFlag::Selected);
        let destroyed = flags.contains(ShipFlag::Destroyed);
        Self {
            scale: if dragging { 1.05 } else { 1.0 },
            shadow_color: if selected { "tomato" } else { "black" },
            shadow_blur: if selected { 3.0 } else { 10.0 },
            shadow_opacity: if selected { 0.9 } else { 0.6 },
            shadow_offset: if dragging { 10.0 } else { 5.0 },
            opacity: if destroyed { 1.0 } else { 0.5 },
        }
    }
}

/// Everything needed to draw one ship.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShipSprite {
    pub id: ShipId,
    pub position: Position,
    /// Width in pixels.
    pub width: i64,
    /// Height in pixels.
    pub height: i64,
    pub appearance: Appearance,
}

/// Render directives for the whole board.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub lines: Vec<GridLine>,
    pub sprites: Vec<ShipSprite>,
}

impl Frame {
    pub(crate) fn build(board: &Board) -> Self {
        let sprites = board
            .ships()
            .iter()
            .map(|ship| {
                let rect = board.rect(ship);
                ShipSprite {
                    id: ship.id(),
                    position: ship.position(),
                    width: rect.width,
                    height: rect.height,
                    appearance: Appearance::for_flags(ship.flags()),
                }
            })
            .collect();
        Self {
            lines: grid_lines(board.dimensions()),
            sprites,
        }
    }
}
