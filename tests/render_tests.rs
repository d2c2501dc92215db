use rand::rngs::SmallRng;
use rand::SeedableRng;
use solo_battleship::{
    path_to, ui, ui::RenderMode, Board, Coord, Game, Orientation, Phase, BOARD_SIZE,
};

fn draw(game: &Game<SmallRng>, mode: RenderMode) -> String {
    let mut out = Vec::new();
    ui::render(&mut out, game, "Find the fleet.", mode).unwrap();
    String::from_utf8(out).unwrap()
}

fn fire(game: &mut Game<SmallRng>, target: Coord) {
    for event in path_to(game.cursor(), target) {
        game.handle(event).unwrap();
    }
}

/// Number of drawn cells showing `glyph`.
fn shown(frame: &str, glyph: char) -> usize {
    frame.matches(&format!(" {} ", glyph)).count()
}

#[test]
fn test_cursor_frame() {
    let game = Game::new(SmallRng::seed_from_u64(21)).unwrap();
    let frame = draw(&game, RenderMode::Cursor);
    assert!(frame.contains('\u{1b}'));
    // reverse video marks the cursor cell
    assert_eq!(frame.matches("\u{1b}[7m").count(), 1);
    assert_eq!(shown(&frame, '.'), BOARD_SIZE * BOARD_SIZE);
    assert!(frame.contains("Hits: 0/17   Misses: 0/25   Ships sunk: 0/5"));
    assert!(frame.contains("arrows/wasd/hjkl: move"));
    assert!(frame.contains("Find the fleet."));
    assert!(!frame.contains("> "));
}

#[test]
fn test_text_frame_has_no_escapes() {
    let game = Game::new(SmallRng::seed_from_u64(22)).unwrap();
    let frame = draw(&game, RenderMode::Text);
    assert!(!frame.contains('\u{1b}'));
    assert_eq!(shown(&frame, '.'), BOARD_SIZE * BOARD_SIZE);
    assert!(frame.contains("  J "));
    assert!(frame.ends_with("> "));
}

#[test]
fn test_intact_ship_cells_stay_hidden() {
    let mut game = Game::new(SmallRng::seed_from_u64(23)).unwrap();
    let carrier = game.board().ships()[0].cells().next().unwrap();
    fire(&mut game, carrier);
    let water = (0..BOARD_SIZE)
        .flat_map(|r| (0..BOARD_SIZE).map(move |c| Coord::new(r, c)))
        .find(|&c| game.board().ship_at(c).is_none())
        .unwrap();
    fire(&mut game, water);

    for mode in [RenderMode::Cursor, RenderMode::Text] {
        let frame = draw(&game, mode);
        assert_eq!(shown(&frame, 'X'), 1, "{:?}", mode);
        assert_eq!(shown(&frame, 'o'), 1, "{:?}", mode);
        assert_eq!(shown(&frame, '#'), 0, "{:?}", mode);
        assert_eq!(shown(&frame, '.'), BOARD_SIZE * BOARD_SIZE - 2, "{:?}", mode);
    }
}

#[test]
fn test_finished_frame() {
    let mut board = Board::empty();
    board.place(Coord::new(4, 4), 2, Orientation::Horizontal).unwrap();
    let mut game = Game::from_board(SmallRng::seed_from_u64(24), board).unwrap();
    fire(&mut game, Coord::new(4, 4));
    fire(&mut game, Coord::new(4, 5));
    assert_eq!(game.phase(), Phase::Won);

    let frame = draw(&game, RenderMode::Cursor);
    assert_eq!(shown(&frame, '#'), 2);
    assert!(!frame.contains("\u{1b}[7m"));
    assert!(frame.contains("r: play again   q: quit"));
}
