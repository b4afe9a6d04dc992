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

//! Placement validation: bounds and overlap checks for a candidate rectangle.
//!
//! These are pure functions. They never touch the board, so the caller decides whether to
//! commit the candidate or snap back to the last committed position.

use crate::{
    board::{CannotPlaceReason, GridDimensions},
    geometry::Rect,
    ships::ShipId,
};

/// Returns true if `candidate` lies within the grid and shares no area with any rectangle
/// in `others`. `others` must not contain the candidate ship itself.
pub fn can_place(candidate: &Rect, others: &[Rect], dim: &GridDimensions) -> bool {
    dim.contains(candidate) && !others.iter().any(|other| candidate.overlaps(other))
}

/// Like [`can_place`], but reports why the placement failed. Bounds are checked first, so a
/// candidate that is both off the grid and overlapping reports
/// [`CannotPlaceReason::OutOfBounds`]. Otherwise the first overlapping ship is reported.
pub fn check_placement<I>(
    candidate: &Rect,
    others: I,
    dim: &GridDimensions,
) -> Result<(), CannotPlaceReason>
where
    I: IntoIterator<Item = (ShipId, Rect)>,
{
    if !dim.contains(candidate) {
        return Err(CannotPlaceReason::OutOfBounds);
    }
    match others
        .into_iter()
        .find(|(_, other)| candidate.overlaps(other))
    {
        Some((id, _)) => Err(CannotPlaceReason::Overlaps(id)),
        None => Ok(()),
    }
}
