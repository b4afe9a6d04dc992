use fleetgrid::{
    board::{can_place, check_placement, CannotPlaceReason, GridDimensions},
    Extent, Position, Rect, ShipId,
};
use proptest::prelude::*;

fn rect(x: i64, y: i64, w: u32, h: u32) -> Rect {
    Rect::from_cells(Position::new(x, y), Extent::new(w, h), 35)
}

#[test]
fn overlapping_single_cells() {
    let dim = GridDimensions::default();
    let a = rect(0, 35, 1, 1);
    assert!(!can_place(&rect(0, 35, 1, 1), &[a], &dim));
    assert!(can_place(&rect(35, 35, 1, 1), &[a], &dim));
}

#[test]
fn long_ship_off_bottom_edge() {
    let dim = GridDimensions::default();
    assert!(!can_place(&rect(0, 315, 1, 4), &[], &dim));
    assert_eq!(
        check_placement(&rect(0, 315, 1, 4), vec![], &dim),
        Err(CannotPlaceReason::OutOfBounds)
    );
    assert!(can_place(&rect(0, 210, 1, 4), &[], &dim));
}

#[test]
fn edge_touching_is_legal() {
    let dim = GridDimensions::default();
    let a = rect(0, 0, 1, 1);
    assert!(can_place(&rect(35, 0, 1, 1), &[a], &dim));
    assert!(can_place(&rect(0, 35, 1, 1), &[a], &dim));
}

#[test]
fn reports_first_overlapping_ship() {
    let dim = GridDimensions::default();
    let others = vec![
        (ShipId(3), rect(0, 0, 1, 1)),
        (ShipId(7), rect(70, 0, 1, 3)),
        (ShipId(8), rect(105, 35, 1, 1)),
    ];
    assert_eq!(
        check_placement(&rect(35, 35, 3, 1), others, &dim),
        Err(CannotPlaceReason::Overlaps(ShipId(7)))
    );
}

#[test]
fn bounds_checked_before_overlap() {
    let dim = GridDimensions::default();
    let others = vec![(ShipId(0), rect(315, 0, 1, 1))];
    assert_eq!(
        check_placement(&rect(315, 0, 2, 1), others, &dim),
        Err(CannotPlaceReason::OutOfBounds)
    );
}

proptest! {
    #[test]
    fn inside_and_clear_is_placeable(
        w in 1u32..=4,
        h in 1u32..=4,
        col in 0i64..10,
        row in 0i64..10,
    ) {
        let dim = GridDimensions::default();
        prop_assume!(col + i64::from(w) <= 10 && row + i64::from(h) <= 10);
        let candidate = rect(col * 35, row * 35, w, h);
        prop_assert!(can_place(&candidate, &[], &dim));
    }

    #[test]
    fn outside_is_never_placeable(
        w in 1u32..=4,
        h in 1u32..=4,
        x in -400i64..400,
        y in -400i64..400,
    ) {
        let dim = GridDimensions::default();
        let candidate = rect(x, y, w, h);
        prop_assume!(x < 0 || y < 0 || candidate.right() > 350 || candidate.bottom() > 350);
        prop_assert!(!can_place(&candidate, &[], &dim));
        prop_assert!(!can_place(&candidate, &[rect(0, 0, 10, 10)], &dim));
    }

    #[test]
    fn overlap_is_symmetric_and_blocks(
        ax in 0i64..10, ay in 0i64..10, aw in 1u32..=4, ah in 1u32..=4,
        bx in 0i64..10, by in 0i64..10, bw in 1u32..=4, bh in 1u32..=4,
    ) {
        let dim = GridDimensions::new(20, 35);
        let a = rect(ax * 35, ay * 35, aw, ah);
        let b = rect(bx * 35, by * 35, bw, bh);
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        if a.overlaps(&b) {
            prop_assert!(!can_place(&a, &[b], &dim));
        } else {
            prop_assert!(can_place(&a, &[b], &dim));
        }
    }
}
