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
use crate::{
    board::{DimensionsError, GridDimensions},
    geometry::{Extent, Position},
    ships::{Ship, ShipId},
};

/// Length of the longest ship in the fleet.
pub const MAX_SHIP_LEN: u32 = 4;

/// Generate the starting fleet: `MAX_SHIP_LEN - len + 1` vertical ships of each length
/// from 1 to `MAX_SHIP_LEN`, standing side by side along the second row of the grid.
pub fn standard_fleet(dim: &GridDimensions) -> Result<Vec<Ship>, DimensionsError> {
    let lengths: Vec<u32> = (1..=MAX_SHIP_LEN)
        .flat_map(|len| (len..=MAX_SHIP_LEN).map(move |_| len))
        .collect();

    let columns = lengths.len() as u32;
    let rows = 1 + MAX_SHIP_LEN;
    if dim.grid_size() < columns || dim.grid_size() < rows {
        return Err(DimensionsError::TooSmallForFleet {
            grid_size: dim.grid_size(),
            columns,
            rows,
        });
    }

    Ok(lengths
        .into_iter()
        .zip(0..)
        .map(|(len, id)| {
            Ship::new(
                ShipId(id),
                Position::from_cell(i64::from(id), 1, dim.cell_size()),
                Extent::new(1, len),
            )
        })
        .collect())
}
