use std::time::{Duration, Instant};

use fleetgrid::{Board, EditorConfig, PixelPoint, ShipId};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Gesture {
    Drag(u32, f64, f64),
    Rotate(u32, u64),
    CellSize(u32),
}

fn gesture() -> impl Strategy<Value = Gesture> {
    prop_oneof![
        4 => (0u32..12, -60.0f64..420.0, -60.0f64..420.0)
            .prop_map(|(id, x, y)| Gesture::Drag(id, x, y)),
        3 => (0u32..12, 0u64..400).prop_map(|(id, ms)| Gesture::Rotate(id, ms)),
        1 => (0u32..60).prop_map(Gesture::CellSize),
    ]
}

/// Every ship inside the grid, on a cell boundary, and clear of every other ship.
fn assert_invariant(board: &Board) -> Result<(), TestCaseError> {
    let dim = board.dimensions();
    let cell = i64::from(dim.cell_size());
    for ship in board.ships() {
        let rect = board.rect(ship);
        prop_assert!(dim.contains(&rect), "{:?} outside grid", ship);
        prop_assert_eq!(ship.position().x % cell, 0);
        prop_assert_eq!(ship.position().y % cell, 0);
        for other in board.ships().iter().filter(|o| o.id() != ship.id()) {
            prop_assert!(!rect.overlaps(&board.rect(other)), "{:?} overlaps {:?}", ship, other);
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn invariant_holds_after_any_gestures(gestures in prop::collection::vec(gesture(), 0..60)) {
        let mut board = Board::new(&EditorConfig::default()).unwrap();
        let start = Instant::now();
        let mut elapsed = 0u64;
        for g in gestures {
            match g {
                Gesture::Drag(id, x, y) => {
                    let _ = board.begin_drag(ShipId(id));
                    let _ = board.end_drag(ShipId(id), PixelPoint::new(x, y));
                }
                Gesture::Rotate(id, ms) => {
                    elapsed += ms;
                    let _ = board.rotate(ShipId(id), start + Duration::from_millis(elapsed));
                }
                Gesture::CellSize(size) => {
                    let _ = board.set_cell_size(size);
                }
            }
            assert_invariant(&board)?;
            prop_assert!(board.ships().iter().all(|s| !s.is_dragging()));
        }
    }

    #[test]
    fn rejected_drag_leaves_board_unchanged(id in 0u32..10, x in -400.0f64..800.0, y in -400.0f64..800.0) {
        let mut board = Board::new(&EditorConfig::default()).unwrap();
        let before = board.ships().to_vec();
        let outcome = board.end_drag(ShipId(id), PixelPoint::new(x, y)).unwrap();
        if !outcome.is_committed() {
            prop_assert_eq!(board.ships(), &before[..]);
        } else {
            prop_assert_eq!(board.get_ship(ShipId(id)).unwrap().position(), outcome.position());
        }
    }

    #[test]
    fn cell_size_round_trip_restores_positions(size in 1u32..100) {
        let mut board = Board::new(&EditorConfig::default()).unwrap();
        board.end_drag(ShipId(9), PixelPoint::new(70.0, 175.0)).unwrap();
        let before = board.ships().to_vec();
        board.set_cell_size(size).unwrap();
        board.set_cell_size(35).unwrap();
        prop_assert_eq!(board.ships(), &before[..]);
    }
}
