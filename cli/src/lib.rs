use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::debug;

use piece_moves::{all_moves, summarize, Board, Side, PSEUDO_LEGAL_MOVE_GEN};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SideArg {
    First,
    Second,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::First => Side::First,
            SideArg::Second => Side::Second,
        }
    }
}

fn parse_board(layout: &str) -> Result<Board> {
    let board = Board::from_layout(layout)
        .with_context(|| format!("Couldn't parse given layout: `{}`", layout))?;
    debug!("board {}x{}", board.size(), board.size());
    Ok(board)
}

/// One move per line, or a JSON array when `json` is set.
pub fn render_moves(layout: &str, side: Side, json: bool) -> Result<String> {
    let board = parse_board(layout)?;
    let moves = all_moves(&board, side);

    if json {
        return serde_json::to_string_pretty(&moves).context("Couldn't serialize moves");
    }

    let mut out = String::new();
    for mve in &moves {
        out += &mve.to_string();
        out.push('\n');
    }
    Ok(out)
}

pub fn render_summary(layout: &str, side: Side) -> Result<String> {
    let board = parse_board(layout)?;
    Ok(summarize(&board, side, &PSEUDO_LEGAL_MOVE_GEN).to_string())
}
