//! Pseudo-legal move generation for chess pieces on an N×N board.

pub mod board;
pub mod move_gen;
pub mod square;
pub mod summary;

pub use board::{
    Board, BoardError, LayoutParseError, Move, MoveList, Piece, PieceKind, Side, MAX_BOARD_SIZE,
};
pub use move_gen::{all_moves, GenerateMoves, PseudoLegalMoveGen, PSEUDO_LEGAL_MOVE_GEN};
pub use square::{Offset, Square};
pub use summary::{summarize, MoveSummary, PieceSummary};
