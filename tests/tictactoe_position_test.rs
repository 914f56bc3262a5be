//! Tests for tic-tac-toe positions and move locations.

use strictly_timeline::{Board, Location, Mark, MoveRecord, Position};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let board = Board::new()
        .with_mark(Position::TopLeft, Mark::X)
        .with_mark(Position::Center, Mark::O);

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}

#[test]
fn test_locations_for_all_indices() {
    let expected = [
        (1, 1), (2, 1), (3, 1),
        (1, 2), (2, 2), (3, 2),
        (1, 3), (2, 3), (3, 3),
    ];
    for (pos, (column, row)) in Position::ALL.into_iter().zip(expected) {
        let record = MoveRecord::after(&Board::new(), pos, Mark::X);
        assert_eq!(record.location(), &Some(Location::new(column, row)));
    }
}
