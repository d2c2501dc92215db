use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use solo_battleship::{
    Board, Cell, CellView, Coord, Direction, Event, Game, GuessOutcome, Orientation, Phase,
    BOARD_SIZE, MISS_BUDGET, SHIP_SIZES, TOTAL_SHIP_CELLS,
};

fn all_coords() -> impl Iterator<Item = Coord> {
    (0..BOARD_SIZE).flat_map(|r| (0..BOARD_SIZE).map(move |c| Coord::new(r, c)))
}

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    Board::place_ships(&SHIP_SIZES, &mut rng).unwrap()
}

fn event() -> impl Strategy<Value = Event> {
    prop_oneof![
        3 => Just(Event::Move(Direction::Up)),
        3 => Just(Event::Move(Direction::Down)),
        3 => Just(Event::Move(Direction::Left)),
        3 => Just(Event::Move(Direction::Right)),
        4 => Just(Event::Submit),
        1 => Just(Event::Restart),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placement_is_disjoint_contiguous_and_complete(seed in any::<u64>()) {
        let board = random_board(seed);
        let ships = board.ships();
        prop_assert_eq!(ships.len(), SHIP_SIZES.len());
        for (i, a) in ships.iter().enumerate() {
            for b in &ships[i + 1..] {
                prop_assert!(a.cells().all(|c| !b.contains(c)));
            }
            let cells: Vec<Coord> = a.cells().collect();
            let straight = match a.orientation() {
                Orientation::Horizontal => cells.windows(2).all(|w| w[0].row == w[1].row && w[0].col + 1 == w[1].col),
                Orientation::Vertical => cells.windows(2).all(|w| w[0].col == w[1].col && w[0].row + 1 == w[1].row),
            };
            prop_assert!(straight);
            prop_assert!(cells.iter().all(|&c| board.cell(c) == Ok(Cell::Ship)));
        }
        let ship_cells = all_coords().filter(|&c| board.cell(c) == Ok(Cell::Ship)).count();
        prop_assert_eq!(ship_cells, TOTAL_SHIP_CELLS);
    }

    #[test]
    fn placement_is_deterministic(seed in any::<u64>()) {
        prop_assert_eq!(random_board(seed), random_board(seed));
    }

    #[test]
    fn guess_idempotent(seed in any::<u64>(), row in 0..BOARD_SIZE, col in 0..BOARD_SIZE) {
        let mut board = random_board(seed);
        let coord = Coord::new(row, col);
        let before = board.clone();
        let first = board.resolve_guess(coord).unwrap();
        prop_assert_ne!(first, GuessOutcome::AlreadyGuessed);
        let after = board.clone();
        prop_assert_ne!(&before, &after);
        prop_assert_eq!(board.resolve_guess(coord).unwrap(), GuessOutcome::AlreadyGuessed);
        prop_assert_eq!(&board, &after);
    }

    #[test]
    fn sunk_iff_every_cell_hit(seed in any::<u64>(), guesses in 0..100usize) {
        let mut board = random_board(seed);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        for _ in 0..guesses {
            let coord = Coord::new(rng.random_range(0..BOARD_SIZE), rng.random_range(0..BOARD_SIZE));
            let was_sunk = board.ship_at(coord).map(|(_, s)| s.is_sunk());
            let outcome = board.resolve_guess(coord).unwrap();
            if let GuessOutcome::HitAndSunk { ship } = outcome {
                prop_assert_eq!(was_sunk, Some(false));
                prop_assert!(board.ships()[ship].is_sunk());
            }
        }
        for ship in board.ships() {
            let all_hit = ship.cells().all(|c| board.cell(c) == Ok(Cell::Hit));
            prop_assert_eq!(ship.is_sunk(), all_hit);
            for c in ship.cells() {
                prop_assert_eq!(board.is_cell_revealed_sunk(c), all_hit);
            }
        }
        // fog of war: an intact segment never shows up as anything but unknown
        for c in all_coords() {
            if board.cell(c) == Ok(Cell::Ship) {
                prop_assert_eq!(board.view(c), Ok(CellView::Unknown));
            }
        }
    }

    #[test]
    fn counters_track_the_board(seed in any::<u64>(), events in prop::collection::vec(event(), 0..400)) {
        let mut game = Game::new(SmallRng::seed_from_u64(seed)).unwrap();
        for ev in events {
            game.handle(ev).unwrap();
            let cursor = game.cursor();
            prop_assert!(cursor.row < BOARD_SIZE && cursor.col < BOARD_SIZE);

            let hits = all_coords().filter(|&c| game.board().cell(c) == Ok(Cell::Hit)).count();
            let misses = all_coords().filter(|&c| game.board().cell(c) == Ok(Cell::Miss)).count();
            prop_assert_eq!(game.hits(), hits);
            prop_assert_eq!(game.misses(), misses);
            prop_assert_eq!(game.ships_sunk(), game.board().ships_sunk());
            prop_assert!(game.misses() <= MISS_BUDGET);
            prop_assert_eq!(game.phase() == Phase::Won, game.hits() == TOTAL_SHIP_CELLS);
            prop_assert_eq!(game.phase() == Phase::Lost, game.misses() == MISS_BUDGET);
            if game.is_won() {
                prop_assert!(game.board().all_sunk());
            }
        }
    }
}
