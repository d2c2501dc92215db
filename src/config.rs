use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Ship lengths of the standard fleet, in placement order.
pub const SHIP_SIZES: [usize; NUM_SHIPS] = {
    let mut sizes = [0; NUM_SHIPS];
    let mut i = 0;
    while i < NUM_SHIPS {
        sizes[i] = SHIPS[i].length();
        i += 1;
    }
    sizes
};

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = {
    let mut total = 0;
    let mut i = 0;
    while i < NUM_SHIPS {
        total += SHIP_SIZES[i];
        i += 1;
    }
    total
};

/// Misses allowed before the game is lost.
pub const MISS_BUDGET: usize = 25;

/// The fleet table entries matching `sizes`, if `sizes` is the standard
/// fleet. Other fleets go unnamed.
pub fn fleet_for(sizes: &[usize]) -> Option<&'static [ShipType]> {
    const FLEET: &[ShipType] = &SHIPS;
    (sizes == &SHIP_SIZES[..]).then_some(FLEET)
}
