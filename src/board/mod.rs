use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::square::Square;

mod layout;

pub use layout::LayoutParseError;

/// Largest accepted board side. Offsets applied during move generation reach at most
/// twice the board size away from a square, which keeps them within `i32`.
pub const MAX_BOARD_SIZE: i32 = i32::MAX / 4;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("board size: want 1..={} got {0}", MAX_BOARD_SIZE)]
    Size(i32),

    #[error("{side} {kind} at {square} is off a {size}x{size} board")]
    OutOfBounds {
        side: Side,
        kind: PieceKind,
        square: Square,
        size: i32,
    },

    #[error("{0} has more than one piece at {1}")]
    Overlap(Side, Square),
}

#[derive(Debug, PartialEq, Eq, EnumIter, Clone, Copy, Display, Hash, Deserialize, Serialize)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opposite_side(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Rank delta of a single pawn push.
    pub(crate) fn forward(self) -> i32 {
        match self {
            Side::First => 1,
            Side::Second => -1,
        }
    }

    /// Rank on which this side's pawns may advance two squares.
    pub(crate) fn pawn_start_rank(self, board_size: i32) -> i32 {
        match self {
            Side::First => 1,
            Side::Second => board_size - 2,
        }
    }
}

impl From<bool> for Side {
    /// `true` is the first side.
    fn from(is_first: bool) -> Self {
        if is_first {
            Side::First
        } else {
            Side::Second
        }
    }
}

#[derive(Debug, PartialEq, Eq, EnumIter, Clone, Copy, Display, Hash, Deserialize, Serialize)]
pub enum PieceKind {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceKind {
    /// Short prefix used when printing moves. Pawns have none.
    pub fn designator(self) -> &'static str {
        match self {
            PieceKind::King => "K",
            PieceKind::Queen => "Q",
            PieceKind::Bishop => "B",
            PieceKind::Knight => "N",
            PieceKind::Rook => "R",
            PieceKind::Pawn => "",
        }
    }
}

impl From<PieceKind> for char {
    fn from(kind: PieceKind) -> char {
        match kind {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Rook => 'r',
            PieceKind::Pawn => 'p',
        }
    }
}

impl TryFrom<char> for PieceKind {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'k' => Ok(PieceKind::King),
            'q' => Ok(PieceKind::Queen),
            'b' => Ok(PieceKind::Bishop),
            'n' => Ok(PieceKind::Knight),
            'r' => Ok(PieceKind::Rook),
            'p' => Ok(PieceKind::Pawn),
            _ => Err(value),
        }
    }
}

/// A piece standing on a square. Which side owns it is decided by the board list it
/// lives in, not by the piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub square: Square,
}

impl Piece {
    pub fn new(kind: PieceKind, square: impl Into<Square>) -> Self {
        Self {
            kind,
            square: square.into(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.designator())
    }
}

/// A destination reachable by `piece`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Move {
    pub piece: Piece,
    pub dest: Square,
}

impl Move {
    pub fn new(piece: Piece, dest: Square) -> Self {
        Self { piece, dest }
    }

    pub fn src(&self) -> Square {
        self.piece.square
    }

    /// Whether the destination holds a piece of the side opposite to `side`.
    pub fn is_capture(&self, board: &Board, side: Side) -> bool {
        board.is_occupied_by(self.dest, side.opposite_side())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.piece, self.dest)
    }
}

pub type MoveList = Vec<Move>;

/// Piece occupancy of an N×N board.
///
/// Each side keeps its pieces in insertion order, which is also the order in which
/// their moves are generated. Construction guarantees that every piece is on the
/// board and that no side has two pieces on one square. A piece of each side on the
/// same square is accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedBoard")]
pub struct Board {
    size: i32,
    first: Vec<Piece>,
    second: Vec<Piece>,
}

#[derive(Deserialize)]
struct UncheckedBoard {
    size: i32,
    first: Vec<Piece>,
    second: Vec<Piece>,
}

impl TryFrom<UncheckedBoard> for Board {
    type Error = BoardError;

    fn try_from(board: UncheckedBoard) -> Result<Self, Self::Error> {
        Board::new(board.size, board.first, board.second)
    }
}

impl Board {
    pub fn new(size: i32, first: Vec<Piece>, second: Vec<Piece>) -> Result<Self, BoardError> {
        if !(1..=MAX_BOARD_SIZE).contains(&size) {
            return Err(BoardError::Size(size));
        }

        let board = Board {
            size,
            first,
            second,
        };

        for side in Side::iter() {
            let pieces = board.pieces(side);
            for (idx, piece) in pieces.iter().enumerate() {
                if board.is_out_of_bounds(piece.square) {
                    return Err(BoardError::OutOfBounds {
                        side,
                        kind: piece.kind,
                        square: piece.square,
                        size,
                    });
                }
                if pieces[..idx].iter().any(|p| p.square == piece.square) {
                    return Err(BoardError::Overlap(side, piece.square));
                }
            }
        }

        debug!(
            "board {}x{}: {} first, {} second",
            size,
            size,
            board.first.len(),
            board.second.len()
        );
        Ok(board)
    }

    pub fn empty(size: i32) -> Result<Self, BoardError> {
        Board::new(size, Vec::new(), Vec::new())
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn pieces(&self, side: Side) -> &[Piece] {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }

    pub fn is_out_of_bounds(&self, square: Square) -> bool {
        square.is_out_of_bounds(self.size)
    }

    pub fn piece_at(&self, square: Square, side: Side) -> Option<&Piece> {
        self.pieces(side).iter().find(|p| p.square == square)
    }

    pub fn is_occupied_by(&self, square: Square, side: Side) -> bool {
        self.piece_at(square, side).is_some()
    }

    /// On the board and not holding one of `side`'s own pieces. Enemy pieces are fine:
    /// landing there is a capture.
    pub fn is_valid_destination(&self, square: Square, side: Side) -> bool {
        !self.is_out_of_bounds(square) && !self.is_occupied_by(square, side)
    }
}
