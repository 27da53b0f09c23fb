use seabattle::{Coordinate, Orientation, Vessel};

#[test]
fn test_horizontal_cells_run_along_x() {
    let vessel = Vessel::new(3, Coordinate::new(1, 4), Orientation::Horizontal);
    let cells: Vec<_> = vessel.cells().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(1, 4),
            Coordinate::new(2, 4),
            Coordinate::new(3, 4)
        ]
    );
}

#[test]
fn test_vertical_cells_run_along_y() {
    let vessel = Vessel::new(2, Coordinate::new(5, 0), Orientation::Vertical);
    let cells: Vec<_> = vessel.cells().collect();
    assert_eq!(cells, vec![Coordinate::new(5, 0), Coordinate::new(5, 1)]);
    assert!(vessel.contains(Coordinate::new(5, 1)));
    assert!(!vessel.contains(Coordinate::new(5, 2)));
}

#[test]
fn test_new_vessel_is_undamaged() {
    let vessel = Vessel::new(3, Coordinate::new(0, 0), Orientation::Vertical);
    assert_eq!(vessel.hits_remaining(), 3);
    assert!(!vessel.is_sunk());
    assert_eq!(vessel.bow(), Coordinate::new(0, 0));
    assert_eq!(vessel.orientation(), Orientation::Vertical);
}

#[test]
fn test_cells_may_leave_the_board() {
    // Geometry is computed without bounds; placement rejects it.
    let vessel = Vessel::new(3, Coordinate::new(5, 5), Orientation::Horizontal);
    let last = vessel.cells().last().unwrap();
    assert_eq!(last, Coordinate::new(7, 5));
}

#[test]
fn test_coordinate_display_is_one_based_row_then_column() {
    assert_eq!(Coordinate::new(2, 0).to_string(), "1 3");
}
