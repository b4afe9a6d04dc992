use enumflags2::BitFlags;
use fleetgrid::{
    board::GridDimensions,
    scene::{grid_lines, stage_scale, Appearance, LineAxis},
    Board, EditorConfig, Position, ShipFlag, ShipId,
};

#[test]
fn grid_lines_cover_every_boundary() {
    let lines = grid_lines(&GridDimensions::default());
    assert_eq!(lines.len(), 22);

    let vertical: Vec<_> = lines.iter().filter(|l| l.axis == LineAxis::Vertical).collect();
    assert_eq!(vertical.len(), 11);
    assert_eq!(vertical[3].start, Position::new(105, 0));
    assert_eq!(vertical[3].end, Position::new(105, 350));

    let horizontal: Vec<_> = lines.iter().filter(|l| l.axis == LineAxis::Horizontal).collect();
    assert_eq!(horizontal[10].start, Position::new(0, 350));
    assert_eq!(horizontal[10].end, Position::new(350, 350));
    assert!(lines.iter().all(|l| l.stroke_width == 1 && l.stroke == "black"));
}

#[test]
fn grid_lines_follow_cell_size() {
    let lines = grid_lines(&GridDimensions::new(10, 50));
    assert_eq!(lines.last().unwrap().start, Position::new(0, 500));
}

#[test]
fn idle_appearance() {
    let look = Appearance::for_flags(BitFlags::empty());
    assert_eq!(look.scale, 1.0);
    assert_eq!(look.shadow_color, "black");
    assert_eq!(look.shadow_blur, 10.0);
    assert_eq!(look.shadow_opacity, 0.6);
    assert_eq!(look.shadow_offset, 5.0);
    assert_eq!(look.opacity, 0.5);
}

#[test]
fn dragging_selected_destroyed_appearance() {
    let look = Appearance::for_flags(ShipFlag::Dragging | ShipFlag::Selected | ShipFlag::Destroyed);
    assert_eq!(look.scale, 1.05);
    assert_eq!(look.shadow_color, "tomato");
    assert_eq!(look.shadow_blur, 3.0);
    assert_eq!(look.shadow_opacity, 0.9);
    assert_eq!(look.shadow_offset, 10.0);
    assert_eq!(look.opacity, 1.0);
}

#[test]
fn frame_reflects_board() {
    let mut board = Board::new(&EditorConfig::default()).unwrap();
    board.begin_drag(ShipId(9)).unwrap();
    let frame = board.frame();

    assert_eq!(frame.lines.len(), 22);
    assert_eq!(frame.sprites.len(), 10);
    let sprite = frame.sprites[9];
    assert_eq!(sprite.id, ShipId(9));
    assert_eq!(sprite.position, Position::new(315, 35));
    assert_eq!((sprite.width, sprite.height), (35, 140));
    assert_eq!(sprite.appearance.scale, 1.05);
    assert_eq!(frame.sprites[0].appearance.scale, 1.0);
}

#[test]
fn stage_scales_to_viewport() {
    assert_eq!(stage_scale(800.0), 1.0);
    assert_eq!(stage_scale(400.0), 0.5);
}
