use engine::{Board, Color, Event, Game, Kind, Outcome, Piece, Position, Rejection, Role};

fn at(x: u8, y: u8) -> Position {
    Position::new(x, y).unwrap()
}

fn active(game: &Game) -> Option<Color> {
    game.active().map(|p| p.color())
}

fn kind_at(game: &Game, x: u8, y: u8) -> Option<Kind> {
    game.board().occupant(at(x, y)).map(Piece::kind)
}

#[test]
fn black_pawn_opens_with_double_step() {
    let mut game = Game::new();

    assert_eq!(game.handle(Event::PointerDown(at(0, 1))), Ok(Outcome::Selected(at(0, 1))));
    assert!(matches!(game.handle(Event::PointerDown(at(0, 3))), Ok(Outcome::Moved(_))));

    assert_eq!(kind_at(&game, 0, 3), Some(Kind::new(Color::Black, Role::Pawn)));
    assert_eq!(kind_at(&game, 0, 1), None);
    assert_eq!(active(&game), Some(Color::White));
    assert_eq!(game.selected(), None);
}

#[test]
fn white_replies_with_double_step() {
    let mut game = Game::new();
    game.click(at(0, 1)).unwrap();
    game.click(at(0, 3)).unwrap();

    game.click(at(1, 6)).unwrap();
    assert!(matches!(game.click(at(1, 4)), Ok(Outcome::Moved(_))));

    assert_eq!(kind_at(&game, 1, 4), Some(Kind::new(Color::White, Role::Pawn)));
    assert_eq!(active(&game), Some(Color::Black));
}

#[test]
fn rook_behind_own_pawn_cannot_move() {
    let mut game = Game::new();
    game.click(at(0, 0)).unwrap();

    assert_eq!(game.click(at(0, 3)), Ok(Outcome::Rejected(Rejection::Blocked)));
    assert_eq!(kind_at(&game, 0, 0), Some(Kind::new(Color::Black, Role::Rook)));
    assert_eq!(active(&game), Some(Color::Black));
}

#[test]
fn bishop_behind_pawn_row_cannot_move() {
    let mut game = Game::new();
    game.click(at(2, 0)).unwrap();

    assert_eq!(game.click(at(4, 2)), Ok(Outcome::Rejected(Rejection::Blocked)));
    assert_eq!(kind_at(&game, 2, 0), Some(Kind::new(Color::Black, Role::Bishop)));
}

#[test]
fn empty_cell_without_selection_is_a_no_op() {
    let mut game = Game::new();
    let before = game.snapshot();

    assert_eq!(game.click(at(4, 4)), Ok(Outcome::Ignored));
    assert_eq!(game.snapshot(), before);
}

#[test]
fn knight_queen_and_king_never_move() {
    let mut board = Board::new();
    board.place(Some(Kind::new(Color::Black, Role::Knight)), at(1, 3)).unwrap();
    board.place(Some(Kind::new(Color::Black, Role::Queen)), at(4, 4)).unwrap();
    board.place(Some(Kind::new(Color::Black, Role::King)), at(6, 6)).unwrap();
    let mut game = Game::with_board(board);

    for (from, to) in [(at(1, 3), at(2, 5)), (at(4, 4), at(4, 0)), (at(6, 6), at(6, 7))] {
        game.click(from).unwrap();
        let before = game.snapshot();
        let outcome = game.click(to).unwrap();

        assert!(matches!(outcome, Outcome::Rejected(Rejection::Unsupported(_))), "{outcome:?}");
        assert_eq!(game.snapshot(), before);
    }
}

#[test]
fn pawn_capture_feeds_the_score() {
    let mut game = Game::new();
    for (x, y) in [(3, 1), (3, 3), (4, 6), (4, 4)] {
        game.click(at(x, y)).unwrap();
    }

    let outcome = game.click(at(3, 3)).unwrap();
    assert_eq!(outcome, Outcome::Selected(at(3, 3)));

    let Outcome::Moved(mv) = game.click(at(4, 4)).unwrap() else {
        panic!("black pawn should capture on (4,4)");
    };

    assert_eq!(mv.captured, Some(Kind::new(Color::White, Role::Pawn)));
    assert_eq!(game.player(Color::Black).score(), &[Kind::new(Color::White, Role::Pawn)]);
    assert_eq!(game.board().pieces().count(), 31);
    assert!(game.board().is_consistent());
}
