use log::trace;

use crate::board::{Board, MoveList, Piece, Side};

pub trait GenerateMoves {
    fn gen_piece_moves(&self, piece: &Piece, board: &Board, side: Side) -> MoveList;

    /// Moves of every piece of `side`, piece by piece in board order.
    fn gen_moves(&self, board: &Board, side: Side) -> MoveList {
        let mut moves = MoveList::new();
        for piece in board.pieces(side) {
            let piece_moves = self.gen_piece_moves(piece, board, side);
            trace!(
                "{} {:?} at {}: {} moves",
                side,
                piece.kind,
                piece.square,
                piece_moves.len()
            );
            moves.extend(piece_moves);
        }
        moves
    }
}
