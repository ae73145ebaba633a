//! Candidate walks shared by the piece rules.
//!
//! Each walk takes candidate squares in the order the piece produced them and yields
//! the reachable ones in that same order.

use std::iter;

use crate::board::{Board, Side};
use crate::square::Square;

/// Sliding walk along a single ray. Stops before the first square that is off the
/// board or holds an own piece, and stops after the first square holding an enemy.
pub fn blocking<'a, I>(
    board: &'a Board,
    side: Side,
    candidates: I,
) -> impl Iterator<Item = Square> + 'a
where
    I: IntoIterator<Item = Square> + 'a,
    I::IntoIter: 'a,
{
    let mut candidates = candidates.into_iter();
    let mut blocked = false;

    iter::from_fn(move || {
        if blocked {
            return None;
        }
        let square = candidates.next()?;
        if !board.is_valid_destination(square, side) {
            blocked = true;
            return None;
        }
        if board.is_occupied_by(square, side.opposite_side()) {
            blocked = true;
        }
        Some(square)
    })
}

/// Each candidate on its own: kept iff it is a valid destination.
pub fn unblocked<'a, I>(
    board: &'a Board,
    side: Side,
    candidates: I,
) -> impl Iterator<Item = Square> + 'a
where
    I: IntoIterator<Item = Square> + 'a,
    I::IntoIter: 'a,
{
    candidates
        .into_iter()
        .filter(move |&square| board.is_valid_destination(square, side))
}

/// Pawn advance. Stops before the first square that is off the board or holds only an
/// own piece. A square holding an enemy is always reached and never stops the walk,
/// even when an own piece shares it.
pub fn pawn_push<'a, I>(
    board: &'a Board,
    side: Side,
    candidates: I,
) -> impl Iterator<Item = Square> + 'a
where
    I: IntoIterator<Item = Square> + 'a,
    I::IntoIter: 'a,
{
    candidates
        .into_iter()
        .take_while(move |&square| {
            board.is_valid_destination(square, side)
                || board.is_occupied_by(square, side.opposite_side())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PieceKind};
    use testresult::TestResult;

    fn squares(coords: &[(i32, i32)]) -> Vec<Square> {
        coords.iter().map(|&c| Square::from(c)).collect()
    }

    fn board(first: &[(i32, i32)], second: &[(i32, i32)]) -> Board {
        let pieces = |coords: &[(i32, i32)]| -> Vec<Piece> {
            coords
                .iter()
                .map(|&c| Piece::new(PieceKind::King, c))
                .collect()
        };
        Board::new(4, pieces(first), pieces(second)).unwrap()
    }

    #[test]
    fn test_blocking_open_ray() {
        let board = board(&[(2, 0), (1, 0)], &[(0, 0)]);
        let got: Vec<Square> =
            blocking(&board, Side::Second, squares(&[(1, 1), (2, 2), (3, 3)])).collect();
        assert_eq!(got, squares(&[(1, 1), (2, 2), (3, 3)]));
    }

    #[test]
    fn test_blocking_stops_at_edge() {
        let board = board(&[(2, 0), (1, 0)], &[(1, 1)]);
        let got: Vec<Square> =
            blocking(&board, Side::Second, squares(&[(2, 2), (3, 3), (4, 4)])).collect();
        assert_eq!(got, squares(&[(2, 2), (3, 3)]));
    }

    #[test]
    fn test_blocking_includes_capture() {
        let board = board(&[(2, 0), (2, 2)], &[(1, 1)]);
        let got: Vec<Square> =
            blocking(&board, Side::Second, squares(&[(2, 2), (3, 3), (4, 4)])).collect();
        assert_eq!(got, squares(&[(2, 2)]));
    }

    #[test]
    fn test_blocking_excludes_own_piece() {
        let board = board(&[(2, 0)], &[(1, 1), (2, 2)]);
        let got: Vec<Square> =
            blocking(&board, Side::Second, squares(&[(2, 2), (3, 3), (4, 4)])).collect();
        assert!(got.is_empty());
    }

    #[test]
    fn test_blocking_discards_rest_after_edge() {
        // A candidate list that leaves and re-enters the board still stops at the edge.
        let board = board(&[], &[]);
        let got: Vec<Square> =
            blocking(&board, Side::First, squares(&[(3, 0), (4, 0), (2, 0)])).collect();
        assert_eq!(got, squares(&[(3, 0)]));
    }

    #[test]
    fn test_unblocked_checks_each_candidate() -> TestResult {
        let board = Board::new(
            4,
            vec![Piece::new(PieceKind::Pawn, (1, 2))],
            vec![Piece::new(PieceKind::Pawn, (0, 1))],
        )?;
        let got: Vec<Square> = unblocked(
            &board,
            Side::First,
            squares(&[(1, 2), (-1, 0), (0, 1), (2, 1)]),
        )
        .collect();
        assert_eq!(got, squares(&[(0, 1), (2, 1)]));
        Ok(())
    }

    #[test]
    fn test_pawn_push_single() {
        let board = board(&[(0, 0)], &[]);
        let got: Vec<Square> = pawn_push(&board, Side::First, squares(&[(1, 0)])).collect();
        assert_eq!(got, squares(&[(1, 0)]));

        let got: Vec<Square> = pawn_push(&board, Side::First, squares(&[(4, 0)])).collect();
        assert!(got.is_empty());
    }

    #[test]
    fn test_pawn_push_passes_enemy() {
        let board = board(&[(0, 1)], &[(0, 2)]);
        let got: Vec<Square> =
            pawn_push(&board, Side::First, squares(&[(0, 2), (0, 3)])).collect();
        assert_eq!(got, squares(&[(0, 2), (0, 3)]));
    }

    #[test]
    fn test_pawn_push_enemy_shares_own_square() {
        let board = board(&[(0, 1), (0, 2)], &[(0, 2)]);
        let got: Vec<Square> =
            pawn_push(&board, Side::First, squares(&[(0, 2), (0, 3)])).collect();
        assert_eq!(got, squares(&[(0, 2), (0, 3)]));
    }

    #[test]
    fn test_pawn_push_stops_at_own_piece() {
        let board = board(&[(0, 1), (0, 2)], &[]);
        let got: Vec<Square> =
            pawn_push(&board, Side::First, squares(&[(0, 2), (0, 3)])).collect();
        assert!(got.is_empty());
    }
}
