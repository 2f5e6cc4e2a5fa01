//! Tests for the rule engine's public contract.

use tictactoe_engine::{
    BoardState, Cell, Move, Outcome, Player, Position, ReplayError, RuleEngine, RuleError,
};

fn play(moves: &[(Player, i32)]) -> Result<BoardState, RuleError> {
    moves.iter().try_fold(BoardState::new(), |state, (player, pos)| {
        RuleEngine::apply_move(&state, *pos, *player)
    })
}

#[test]
fn test_each_square_accepts_exactly_one_mark() {
    for pos in 0..9 {
        let fresh = BoardState::new();
        let after = RuleEngine::apply_move(&fresh, pos, Player::X).expect("Fresh square");
        assert_eq!(after.cell_at(pos), Ok(Cell::Occupied(Player::X)));

        let again = RuleEngine::apply_move(&after, pos, Player::O);
        assert!(
            matches!(again, Err(RuleError::OccupiedCell(p)) if p.to_index() == pos as usize),
            "square {pos} accepted a second mark"
        );
    }
}

#[test]
fn test_wrong_player_always_illegal() {
    let states = [
        BoardState::new(),
        play(&[(Player::X, 4)]).unwrap(),
        play(&[(Player::X, 4), (Player::O, 0)]).unwrap(),
    ];

    for state in states {
        let wrong = state.turn().opponent();
        for pos in 0..9 {
            assert_eq!(
                RuleEngine::apply_move(&state, pos, wrong),
                Err(RuleError::IllegalMove {
                    expected: state.turn(),
                    got: wrong
                }),
                "{wrong} at {pos} on\n{state}"
            );
        }
    }
}

#[test]
fn test_diagonal_win() {
    let state = play(&[
        (Player::X, 0),
        (Player::O, 1),
        (Player::X, 4),
        (Player::O, 2),
        (Player::X, 8),
    ])
    .unwrap();
    assert_eq!(RuleEngine::status(&state), Outcome::Win(Player::X));
}

#[test]
fn test_full_board_draw() {
    let state = play(&[
        (Player::X, 0),
        (Player::O, 1),
        (Player::X, 2),
        (Player::O, 4),
        (Player::X, 3),
        (Player::O, 5),
        (Player::X, 7),
        (Player::O, 6),
        (Player::X, 8),
    ])
    .unwrap();
    assert_eq!(RuleEngine::status(&state), Outcome::Draw);
}

#[test]
fn test_left_column_ends_game_before_board_fills() {
    // X:0, O:1, X:2, O:4, X:6, O:5, X:3 completes the left column, so the
    // game is over before O can answer at 7.
    let result = play(&[
        (Player::X, 0),
        (Player::O, 1),
        (Player::X, 2),
        (Player::O, 4),
        (Player::X, 6),
        (Player::O, 5),
        (Player::X, 3),
        (Player::O, 7),
        (Player::X, 8),
    ]);
    assert_eq!(result, Err(RuleError::GameOver(Outcome::Win(Player::X))));
}

#[test]
fn test_turn_alternates() {
    let order = [4, 0, 8, 2, 1, 7, 6, 3];
    let mut state = BoardState::new();
    for (n, pos) in order.into_iter().enumerate() {
        let expected = if n % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(state.turn(), expected, "after {n} moves");
        state = RuleEngine::apply_move(&state, pos, state.turn()).unwrap();
    }
    assert_eq!(state.turn(), Player::X);
}

#[test]
fn test_cell_at_out_of_range() {
    let state = BoardState::new();
    assert_eq!(state.cell_at(9), Err(RuleError::OutOfRange(9)));
    assert_eq!(state.cell_at(-1), Err(RuleError::OutOfRange(-1)));
}

#[test]
fn test_apply_leaves_input_unchanged() {
    let before = play(&[(Player::X, 4)]).unwrap();
    let copy = before;
    let _after = RuleEngine::apply_move(&before, 0, Player::O).unwrap();
    assert_eq!(before, copy);
    assert_eq!(before.cell_at(0), Ok(Cell::Empty));
}

#[test]
fn test_replay_matches_apply_move() {
    let moves = [
        Move::new(Player::X, Position::Center),
        Move::new(Player::O, Position::TopLeft),
        Move::new(Player::X, Position::BottomRight),
    ];
    let replayed = RuleEngine::replay(&moves).unwrap();
    let applied = play(&[(Player::X, 4), (Player::O, 0), (Player::X, 8)]).unwrap();
    assert_eq!(replayed, applied);
}

#[test]
fn test_replay_stops_after_win() {
    let moves = [
        Move::new(Player::X, Position::TopLeft),
        Move::new(Player::O, Position::Center),
        Move::new(Player::X, Position::TopCenter),
        Move::new(Player::O, Position::BottomLeft),
        Move::new(Player::X, Position::TopRight),
        Move::new(Player::O, Position::BottomRight),
    ];
    let err = RuleEngine::replay(&moves).unwrap_err();
    assert_eq!(
        err,
        ReplayError {
            index: 5,
            source: RuleError::GameOver(Outcome::Win(Player::X))
        }
    );
    assert_eq!(err.to_string(), "Move 5 rejected");
    let source = std::error::Error::source(&err).expect("Rule error as source");
    assert_eq!(source.to_string(), "Game is already over (Player X wins)");
}

#[test]
fn test_error_messages() {
    assert_eq!(
        RuleError::OutOfRange(12).to_string(),
        "Position 12 is out of range (must be 0-8)"
    );
    assert_eq!(
        RuleError::IllegalMove {
            expected: Player::X,
            got: Player::O
        }
        .to_string(),
        "It's X's turn, not O's"
    );
    assert_eq!(
        RuleError::OccupiedCell(Position::Center).to_string(),
        "Square Center is already occupied"
    );
}
