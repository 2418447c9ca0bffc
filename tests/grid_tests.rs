use aoc_paths::grid::{Coordinate, Direction, Grid, Step};
use aoc_paths::Error;

#[test]
fn test_rotations() {
    assert_eq!(Direction::RIGHT.rotated_clockwise(), Direction::DOWN);
    assert_eq!(Direction::DOWN.rotated_clockwise(), Direction::LEFT);
    assert_eq!(Direction::RIGHT.rotated_counter_clockwise(), Direction::UP);
    assert_eq!(Direction::UP.flipped(), Direction::DOWN);
    assert_eq!(-Direction::LEFT, Direction::RIGHT);

    let mut facing = Direction::UP;
    for _ in 0..4 {
        facing = facing.rotated_clockwise();
    }
    assert_eq!(facing, Direction::UP);
}

#[test]
fn test_coordinate_arithmetic() {
    let mut position = Coordinate::new(2, 3);
    position += Direction::RIGHT * 3;
    assert_eq!(position, Coordinate::new(5, 3));
    position -= Coordinate::new(1, 1);
    assert_eq!(position, Coordinate::new(4, 2));
    assert_eq!(position - Coordinate::new(4, 2), Coordinate::default());

    assert_eq!(Coordinate::new(0, 0).manhattan_distance(Coordinate::new(-3, 4)), 7);
    assert_eq!(Coordinate::new(6, 1).to_string(), "6,1");

    let neighbors = Coordinate::new(1, 1).orthogonal_neighbors();
    assert!(neighbors.contains(&Coordinate::new(1, 0)));
    assert!(neighbors.contains(&Coordinate::new(2, 1)));
    assert!(neighbors.contains(&Coordinate::new(1, 2)));
    assert!(neighbors.contains(&Coordinate::new(0, 1)));
}

#[test]
fn test_step_moves() {
    let step = Step::new(Coordinate::new(1, 1), Direction::RIGHT);
    assert_eq!(step.next(), Coordinate::new(2, 1));
    assert_eq!(step.forward(), Step::new(Coordinate::new(2, 1), Direction::RIGHT));
    assert_eq!(step.turned_clockwise().direction, Direction::DOWN);
    assert_eq!(step.turned_counter_clockwise().direction, Direction::UP);
    assert_eq!(step.turned_clockwise().position, step.position);
    assert_eq!(Step::facings(step.position).len(), 4);
}

#[test]
fn test_grid_parse_and_lookup() {
    let grid = Grid::parse("#S.\r\n..E\r\n\r\n").unwrap();
    assert_eq!((grid.width(), grid.height()), (3, 2));
    assert_eq!(grid.find(&'S'), Some(Coordinate::new(1, 0)));
    assert_eq!(grid.find(&'E'), Some(Coordinate::new(2, 1)));
    assert_eq!(grid.find(&'x'), None);
    assert_eq!(grid.find_all(&'.').count(), 3);

    assert_eq!(grid.get(Coordinate::new(0, 0)), Some(&'#'));
    assert_eq!(grid.get(Coordinate::new(3, 0)), None);
    assert_eq!(grid.get(Coordinate::new(0, -1)), None);
    assert_eq!(grid.get_or(Coordinate::new(-1, 0), '#'), '#');
    assert!(grid.in_bounds(Coordinate::new(2, 1)));
    assert!(!grid.in_bounds(Coordinate::new(2, 2)));

    let coordinates: Vec<_> = grid.coordinates().collect();
    assert_eq!(coordinates.len(), 6);
    assert_eq!(coordinates[3], Coordinate::new(0, 1));
}

#[test]
fn test_grid_parse_errors() {
    assert!(matches!(Grid::parse(""), Err(Error::Parse { line: 1, .. })));
    assert!(matches!(
        Grid::parse("...\n..\n..."),
        Err(Error::Parse { line: 2, .. })
    ));
}

#[test]
fn test_grid_set_and_clear() {
    let mut grid: Grid<bool> = Grid::new(2, 2);
    grid.set(Coordinate::new(1, 0), true).unwrap();
    assert_eq!(grid.get(Coordinate::new(1, 0)), Some(&true));

    assert!(matches!(
        grid.set(Coordinate::new(2, 0), true),
        Err(Error::OutOfBounds { x: 2, y: 0 })
    ));

    grid.clear();
    assert_eq!(grid.find(&true), None);
}
