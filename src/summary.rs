use std::fmt::Display;

use tabled::{Table, Tabled};

use crate::board::{Board, PieceKind, Side};
use crate::move_gen::GenerateMoves;
use crate::square::Square;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Tabled)]
pub struct PieceSummary {
    pub piece: PieceKind,
    pub square: Square,
    pub moves: usize,
    pub captures: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSummary {
    pub side: Side,
    pub pieces: Vec<PieceSummary>,
    pub tot_moves: usize,
    pub tot_captures: usize,
}

impl Display for MoveSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "side: {}", self.side)?;
        writeln!(f, "{}", Table::new(&self.pieces))?;
        writeln!(f, "total moves: {}", self.tot_moves)?;
        writeln!(f, "total captures: {}", self.tot_captures)?;
        Ok(())
    }
}

/// Per-piece move and capture counts for `side`, in board order.
pub fn summarize(board: &Board, side: Side, move_gen: &impl GenerateMoves) -> MoveSummary {
    let pieces: Vec<PieceSummary> = board
        .pieces(side)
        .iter()
        .map(|piece| {
            let moves = move_gen.gen_piece_moves(piece, board, side);
            PieceSummary {
                piece: piece.kind,
                square: piece.square,
                moves: moves.len(),
                captures: moves.iter().filter(|mve| mve.is_capture(board, side)).count(),
            }
        })
        .collect();

    let (tot_moves, tot_captures) = pieces.iter().fold((0, 0), |(moves, captures), curr| {
        (moves + curr.moves, captures + curr.captures)
    });

    MoveSummary {
        side,
        pieces,
        tot_moves,
        tot_captures,
    }
}
