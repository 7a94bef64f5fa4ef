use super::square::*;
use super::*;
use crate::tictactoe_position;

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert!(board.is_empty());
    assert!(!board.is_full());
    assert_eq!(board.legal_moves().as_slice(), &Square::ALL[..]);
    assert_eq!(board.outcome(), Outcome::InProgress);
}

#[test]
fn test_put_rejects_occupied_square() {
    let mut board = Board::new();
    board.put(B2, Mark::X).unwrap();
    assert_eq!(
        board.put(B2, Mark::O),
        Err(BoardError::SquareOccupied { square: B2 })
    );
    assert_eq!(board.get(B2), Some(Mark::X));
}

#[test]
fn test_remove_is_inverse_of_put() {
    let original = tictactoe_position! {
        X . O
        . X .
        O . .
    };

    for square in original.legal_moves() {
        for mark in Mark::ALL.iter() {
            let mut board = original;
            board.put(square, *mark).unwrap();
            assert_ne!(board, original);
            assert_eq!(board.remove(square), Ok(*mark));
            assert_eq!(board, original);
        }
    }
}

#[test]
fn test_remove_empty_square() {
    let mut board = Board::new();
    assert_eq!(board.remove(A1), Err(BoardError::SquareEmpty { square: A1 }));
}

#[test]
fn test_with_move_leaves_original_untouched() {
    let board = Board::new();
    let next = board.with_move(C3, Mark::O).unwrap();
    assert!(board.is_empty());
    assert_eq!(next.get(C3), Some(Mark::O));
    assert!(next.with_move(C3, Mark::X).is_err());
}

#[test]
fn test_legal_moves_ascending() {
    let board = tictactoe_position! {
        X O X
        . O X
        O . X
    };
    let moves: Vec<usize> = board.legal_moves().iter().map(|s| s.index()).collect();
    assert_eq!(moves, vec![3, 7]);
}

#[test]
fn test_row_win() {
    let board = tictactoe_position! {
        . . .
        O O O
        X X .
    };
    assert_eq!(board.outcome(), Outcome::Win(Mark::O));
}

#[test]
fn test_column_win() {
    let board = tictactoe_position! {
        . X O
        . X O
        . X .
    };
    assert_eq!(board.outcome(), Outcome::Win(Mark::X));
}

#[test]
fn test_diagonal_wins() {
    let main_diagonal = tictactoe_position! {
        X O .
        O X .
        . . X
    };
    assert_eq!(main_diagonal.outcome(), Outcome::Win(Mark::X));

    let anti_diagonal = tictactoe_position! {
        X X O
        X O .
        O . .
    };
    assert_eq!(anti_diagonal.outcome(), Outcome::Win(Mark::O));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board = tictactoe_position! {
        X O X
        X O O
        O X X
    };
    assert!(board.is_full());
    assert!(!board.has_line(Mark::X));
    assert!(!board.has_line(Mark::O));
    assert_eq!(board.outcome(), Outcome::Draw);
}

#[test]
fn test_full_board_with_line_is_win() {
    let board = tictactoe_position! {
        X O X
        O X O
        O X X
    };
    assert!(board.is_full());
    assert_eq!(board.outcome(), Outcome::Win(Mark::X));
}

#[test]
fn test_turn_inference() {
    let board = tictactoe_position! {
        X . .
        . . .
        . . .
    };
    assert_eq!(board.turn(Mark::X), Mark::O);
    assert_eq!(Board::new().turn(Mark::O), Mark::O);
}

#[test]
fn test_consistency() {
    let board = tictactoe_position! {
        X X .
        O . .
        . . .
    };
    assert!(board.is_consistent(Mark::X));
    assert!(!board.is_consistent(Mark::O));

    let both_won = tictactoe_position! {
        X X X
        O O O
        . . .
    };
    assert!(!both_won.is_consistent(Mark::X));
}

#[test]
fn test_parse_notation() {
    let board: Board = "XX./.O./...".parse().unwrap();
    assert_eq!(board.get(A1), Some(Mark::X));
    assert_eq!(board.get(B1), Some(Mark::X));
    assert_eq!(board.get(B2), Some(Mark::O));
    assert_eq!(board.occupied_count(), 3);
    assert_eq!(board.to_notation(), "XX..O....");
    assert_eq!(board.to_notation().parse::<Board>().unwrap(), board);
}

#[test]
fn test_parse_rejects_bad_input() {
    assert!(matches!(
        "XX.".parse::<Board>(),
        Err(BoardError::InvalidBoardString { .. })
    ));
    assert!(matches!(
        "XX.O.Z...".parse::<Board>(),
        Err(BoardError::InvalidBoardString { .. })
    ));
}

#[test]
fn test_display() {
    let board = tictactoe_position! {
        X . .
        . O .
        . . X
    };
    let expected = " X | . | . \n---+---+---\n . | O | . \n---+---+---\n . | . | X \n";
    assert_eq!(board.to_string(), expected);
}
