use solo_battleship::{BitBoardError, BoardError, Coord, Orientation, Ship};

#[test]
fn test_new_and_cells() -> Result<(), BoardError> {
    const N: usize = 5;
    let ship = Ship::<u32, N>::new(3, Orientation::Horizontal, Coord::new(2, 1))?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![Coord::new(2, 1), Coord::new(2, 2), Coord::new(2, 3)]);
    for c in cells {
        assert!(ship.contains(c));
        assert!(ship.mask().contains(c));
    }
    assert!(!ship.contains(Coord::new(2, 4)));
    assert_eq!(ship.mask().count_ones(), 3);
    Ok(())
}

#[test]
fn test_vertical_cells() -> Result<(), BoardError> {
    let ship = Ship::<u32, 5>::new(4, Orientation::Vertical, Coord::new(0, 0))?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0), Coord::new(3, 0)]
    );
    assert_eq!(ship.origin(), Coord::new(0, 0));
    assert_eq!(ship.orientation(), Orientation::Vertical);
    Ok(())
}

#[test]
fn test_bounds_and_length() {
    assert_eq!(
        Ship::<u32, 5>::new(3, Orientation::Horizontal, Coord::new(0, 3)).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        Ship::<u32, 5>::new(2, Orientation::Vertical, Coord::new(4, 0)).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        Ship::<u32, 5>::new(0, Orientation::Vertical, Coord::new(0, 0)).unwrap_err(),
        BoardError::InvalidConfiguration
    );
    assert_eq!(
        Ship::<u32, 5>::new(6, Orientation::Vertical, Coord::new(0, 0)).unwrap_err(),
        BoardError::InvalidConfiguration
    );
}

#[test]
fn test_register_hit_and_sunk() -> Result<(), BoardError> {
    let mut ship = Ship::<u16, 4>::new(2, Orientation::Horizontal, Coord::new(1, 1))?;
    assert!(!ship.is_sunk());
    assert!(ship.register_hit(Coord::new(1, 1)));
    assert!(!ship.is_sunk());
    // repeated hit does not count twice
    assert!(ship.register_hit(Coord::new(1, 1)));
    assert!(!ship.is_sunk());
    assert!(ship.register_hit(Coord::new(1, 2)));
    assert!(ship.is_sunk());
    assert!(!ship.register_hit(Coord::new(0, 0)));
    assert!(ship.is_sunk());
    Ok(())
}

#[test]
fn test_backing_type_too_narrow() {
    // a 4x4 grid needs 16 bits
    assert_eq!(
        Ship::<u8, 4>::new(2, Orientation::Horizontal, Coord::new(0, 0)).unwrap_err(),
        BoardError::BitBoardError(BitBoardError::SizeTooLarge { n: 4, capacity: 8 })
    );
}

#[test]
fn test_named() -> Result<(), BoardError> {
    let ship = Ship::<u16, 4>::new(2, Orientation::Vertical, Coord::new(1, 3))?;
    assert_eq!(ship.name(), None);
    let ship = ship.named("Destroyer");
    assert_eq!(ship.name(), Some("Destroyer"));
    assert_eq!(ship.cells().collect::<Vec<_>>(), vec![Coord::new(1, 3), Coord::new(2, 3)]);
    Ok(())
}
