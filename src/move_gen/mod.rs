mod pieces;
pub mod traversal;
mod traits;

use crate::board::{Board, MoveList, Piece, Side};

pub use self::traits::GenerateMoves;

/// Geometry and occupancy only: no check, castling, en passant or promotion.
#[derive(Clone, Copy, Debug, Default)]
pub struct PseudoLegalMoveGen;

impl GenerateMoves for PseudoLegalMoveGen {
    fn gen_piece_moves(&self, piece: &Piece, board: &Board, side: Side) -> MoveList {
        piece.gen_moves(board, side)
    }
}

pub static PSEUDO_LEGAL_MOVE_GEN: PseudoLegalMoveGen = PseudoLegalMoveGen;

/// Every pseudo-legal move of `side`: each piece in board order, each piece's moves in
/// generation order. Nothing is sorted or deduplicated.
pub fn all_moves(board: &Board, side: Side) -> MoveList {
    PSEUDO_LEGAL_MOVE_GEN.gen_moves(board, side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;
    use test_case::test_case;
    use testresult::TestResult;

    fn names(moves: &MoveList) -> Vec<String> {
        moves.iter().map(|mve| mve.to_string()).collect()
    }

    #[test]
    fn test_all_moves_single_piece() -> TestResult {
        let board = Board::new(4, vec![Piece::new(PieceKind::Pawn, (0, 0))], vec![])?;
        assert_eq!(names(&all_moves(&board, Side::First)), vec!["(0, 1)"]);
        Ok(())
    }

    #[test]
    fn test_all_moves_keeps_piece_order() -> TestResult {
        let board = Board::new(
            4,
            vec![
                Piece::new(PieceKind::Pawn, (0, 1)),
                Piece::new(PieceKind::Knight, (0, 0)),
            ],
            vec![],
        )?;
        assert_eq!(
            names(&all_moves(&board, Side::First)),
            vec!["(0, 2)", "(0, 3)", "N(1, 2)", "N(2, 1)"]
        );
        Ok(())
    }

    #[test_case(Side::First ; "first")]
    #[test_case(Side::Second ; "second")]
    fn test_all_moves_is_concatenation(side: Side) {
        let board = Board::start();
        let want: MoveList = board
            .pieces(side)
            .iter()
            .flat_map(|piece| piece.gen_moves(&board, side))
            .collect();
        assert_eq!(all_moves(&board, side), want);
    }

    #[test]
    fn test_side_without_pieces() {
        let board = Board::start();
        let board = Board::new(8, board.pieces(Side::First).to_vec(), vec![]).unwrap();
        assert!(all_moves(&board, Side::Second).is_empty());
    }

    struct KingsOnly;

    impl GenerateMoves for KingsOnly {
        fn gen_piece_moves(&self, piece: &Piece, board: &Board, side: Side) -> MoveList {
            if piece.kind == PieceKind::King {
                piece.gen_moves(board, side)
            } else {
                MoveList::new()
            }
        }
    }

    #[test]
    fn test_gen_moves_uses_piece_generator() {
        let board = Board::start();
        assert!(KingsOnly.gen_moves(&board, Side::First).is_empty());
        assert_eq!(
            PSEUDO_LEGAL_MOVE_GEN.gen_moves(&board, Side::First).len(),
            20
        );
    }
}
