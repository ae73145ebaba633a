use crate::board::{Board, Move, MoveList, Piece, PieceKind, Side};
use crate::square::{Offset, DIAGONAL_DIRS, KING_OFFSETS, KNIGHT_OFFSETS, STRAIGHT_DIRS};

use super::traversal;

impl Piece {
    /// Pseudo-legal moves of this piece for `side`, in generation order.
    pub fn gen_moves(&self, board: &Board, side: Side) -> MoveList {
        match self.kind {
            PieceKind::King => self.gen_leaping_moves(board, side, &KING_OFFSETS),
            PieceKind::Knight => self.gen_leaping_moves(board, side, &KNIGHT_OFFSETS),
            PieceKind::Bishop => self.gen_sliding_moves(board, side, &DIAGONAL_DIRS),
            PieceKind::Rook => self.gen_sliding_moves(board, side, &STRAIGHT_DIRS),
            PieceKind::Queen => self.gen_queen_moves(board, side),
            PieceKind::Pawn => self.gen_pawn_moves(board, side),
        }
    }

    fn gen_leaping_moves(&self, board: &Board, side: Side, offsets: &[Offset]) -> MoveList {
        traversal::unblocked(board, side, self.square.offsets(offsets))
            .map(|dest| Move::new(*self, dest))
            .collect()
    }

    fn gen_sliding_moves(&self, board: &Board, side: Side, dirs: &[Offset]) -> MoveList {
        let ray_len = board.size() - 1;
        dirs.iter()
            .flat_map(|&dir| traversal::blocking(board, side, self.square.ray(dir, ray_len)))
            .map(|dest| Move::new(*self, dest))
            .collect()
    }

    // A bishop's moves then a rook's, from the same square, claimed by the queen.
    fn gen_queen_moves(&self, board: &Board, side: Side) -> MoveList {
        let bishop = Piece::new(PieceKind::Bishop, self.square);
        let rook = Piece::new(PieceKind::Rook, self.square);

        bishop
            .gen_moves(board, side)
            .into_iter()
            .chain(rook.gen_moves(board, side))
            .map(|mve| Move::new(*self, mve.dest))
            .collect()
    }

    fn gen_pawn_moves(&self, board: &Board, side: Side) -> MoveList {
        let forward = side.forward();
        let push_len = if self.square.rank == side.pawn_start_rank(board.size()) {
            2
        } else {
            1
        };
        let pushes = self.square.ray(Offset::new(0, forward), push_len);

        // Diagonals are not bounds checked: no piece can stand off the board.
        let atks = [Offset::new(forward, forward), Offset::new(-forward, forward)];
        let captures = self
            .square
            .offsets(&atks)
            .filter(|&dest| board.is_occupied_by(dest, side.opposite_side()));

        traversal::pawn_push(board, side, pushes)
            .chain(captures)
            .map(|dest| Move::new(*self, dest))
            .collect()
    }
}
