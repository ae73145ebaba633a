use log::debug;

use super::{Board, BoardError, Piece, PieceKind, Side, MAX_BOARD_SIZE};
use crate::square::Square;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LayoutParseError {
    #[error("layout is empty")]
    Empty,

    #[error("piece placement: got {0}, err at {1}")]
    Piece(String, usize),

    #[error("rank {rank}: want {size} files got {width}")]
    RankWidth { rank: i32, width: i32, size: i32 },

    #[error(transparent)]
    Board(#[from] BoardError),
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// Conventional 8x8 setup. Pieces are listed in layout reading order, so the first
    /// side's pawns come before its back rank.
    pub fn start() -> Self {
        let row = |kinds: &[PieceKind], rank: i32| -> Vec<Piece> {
            kinds
                .iter()
                .zip(0..)
                .map(|(&kind, file)| Piece::new(kind, (file, rank)))
                .collect()
        };
        let pawns = [PieceKind::Pawn; 8];

        Board {
            size: 8,
            first: [row(&pawns, 1), row(&BACK_RANK, 0)].concat(),
            second: [row(&BACK_RANK, 7), row(&pawns, 6)].concat(),
        }
    }

    /// Parses a piece-placement layout: ranks from the top of the board down separated
    /// by `/`, uppercase letters for the first side, lowercase for the second, and
    /// numbers for runs of empty files. The number of ranks sets the board size.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutParseError> {
        let layout = layout.trim();
        if layout.is_empty() {
            return Err(LayoutParseError::Empty);
        }

        let ranks: Vec<&str> = layout.split('/').collect();
        let size = ranks.len() as i32;

        let mut first = Vec::new();
        let mut second = Vec::new();
        let mut ch_idx = 0;

        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = size - 1 - row as i32;
            let mut file = 0;
            let mut empty_run: Option<i32> = None;

            for ch in rank_str.chars() {
                let bad_char = || LayoutParseError::Piece(layout.to_string(), ch_idx);

                if let Some(digit) = ch.to_digit(10) {
                    let run = empty_run
                        .unwrap_or(0)
                        .checked_mul(10)
                        .and_then(|run| run.checked_add(digit as i32))
                        .ok_or_else(bad_char)?;
                    empty_run = Some(run);
                } else {
                    file = advance(file, flush_empty_run(&mut empty_run, layout, ch_idx)?)
                        .ok_or_else(bad_char)?;

                    let kind =
                        PieceKind::try_from(ch.to_ascii_lowercase()).map_err(|_| bad_char())?;
                    let piece = Piece::new(kind, Square::new(file, rank));
                    if ch.is_uppercase() {
                        first.push(piece);
                    } else {
                        second.push(piece);
                    }
                    file = advance(file, 1).ok_or_else(bad_char)?;
                }
                ch_idx += 1;
            }
            file = advance(file, flush_empty_run(&mut empty_run, layout, ch_idx)?)
                .ok_or_else(|| LayoutParseError::Piece(layout.to_string(), ch_idx))?;

            if file != size {
                return Err(LayoutParseError::RankWidth {
                    rank,
                    width: file,
                    size,
                });
            }
            // Skip the `/` after the rank.
            ch_idx += 1;
        }

        debug!("parsed layout {}", layout);
        Ok(Board::new(size, first, second)?)
    }

    /// Inverse of [`Board::from_layout`] up to piece order. Where both sides hold the
    /// same square the first side's piece is written.
    pub fn to_layout(&self) -> String {
        let mut ranks = Vec::with_capacity(self.size as usize);

        for rank in (0..self.size).rev() {
            let mut rank_str = String::new();
            let mut empty_count = 0;

            for file in 0..self.size {
                let square = Square::new(file, rank);
                let piece_ch = if let Some(piece) = self.piece_at(square, Side::First) {
                    char::from(piece.kind).to_ascii_uppercase()
                } else if let Some(piece) = self.piece_at(square, Side::Second) {
                    char::from(piece.kind)
                } else {
                    empty_count += 1;
                    continue;
                };

                if empty_count != 0 {
                    rank_str += &empty_count.to_string();
                    empty_count = 0;
                }
                rank_str.push(piece_ch);
            }
            if empty_count != 0 {
                rank_str += &empty_count.to_string();
            }
            ranks.push(rank_str);
        }

        ranks.join("/")
    }
}

/// `None` once the file count no longer fits a board size.
fn advance(file: i32, by: i32) -> Option<i32> {
    file.checked_add(by).filter(|&file| file <= MAX_BOARD_SIZE)
}

fn flush_empty_run(
    empty_run: &mut Option<i32>,
    layout: &str,
    ch_idx: usize,
) -> Result<i32, LayoutParseError> {
    match empty_run.take() {
        None => Ok(0),
        // A run of zero empty files is never written by `to_layout`.
        Some(0) => Err(LayoutParseError::Piece(layout.to_string(), ch_idx)),
        Some(run) => Ok(run),
    }
}
