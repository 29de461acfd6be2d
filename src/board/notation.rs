//! Scripted-test notation.
//!
//! A compact text form for setting up boards in tests:
//!
//! ```text
//! rc 0 0, rs 1 0; bc 0 1; d: gd, gx
//! ```
//!
//! - turns are separated by `;`
//! - a play turn is a comma-separated list of `<piece> <x> <y>`
//! - a `d:` prefix marks a discard turn listing pieces only
//! - a piece is its color letter followed by its shape letter
//!
//! This is a test fixture format, not a save format.

use crate::core::{EngineError, Location, NotationError, Piece, Placement, Play};

use super::board::Board;

/// One turn of a script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptedTurn {
    /// Placements made together.
    Play(Vec<Placement>),
    /// Pieces returned to the bag.
    Discard(Vec<Piece>),
}

/// Parse a whole script. Blank turns are skipped.
pub fn parse_script(text: &str) -> Result<Vec<ScriptedTurn>, NotationError> {
    text.split(';')
        .map(str::trim)
        .filter(|turn| !turn.is_empty())
        .enumerate()
        .map(|(i, turn)| parse_turn(i + 1, turn))
        .collect()
}

fn parse_turn(turn: usize, text: &str) -> Result<ScriptedTurn, NotationError> {
    if let Some(rest) = text.strip_prefix("d:") {
        let pieces = rest
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| parse_piece(turn, item))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(ScriptedTurn::Discard(pieces));
    }

    let placements = text
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| parse_placement(turn, item))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ScriptedTurn::Play(placements))
}

fn parse_piece(turn: usize, text: &str) -> Result<Piece, NotationError> {
    Piece::from_abbreviation(text).ok_or_else(|| NotationError::UnknownPiece {
        turn,
        text: text.to_string(),
    })
}

fn parse_placement(turn: usize, text: &str) -> Result<Placement, NotationError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let [piece, x, y] = tokens.as_slice() else {
        return Err(NotationError::MalformedPlacement {
            turn,
            text: text.to_string(),
        });
    };
    let coordinate = |token: &str| {
        token.parse::<i32>().map_err(|_| NotationError::BadCoordinate {
            turn,
            text: token.to_string(),
        })
    };
    Ok(parse_piece(turn, *piece)?.at(Location::new(coordinate(*x)?, coordinate(*y)?)))
}

/// Parse a single play turn into a `Play`.
pub fn parse_play(text: &str) -> Result<Play, NotationError> {
    match parse_turn(1, text.trim())? {
        ScriptedTurn::Play(placements) => Ok(placements.into_iter().collect()),
        ScriptedTurn::Discard(_) => Ok(Play::empty()),
    }
}

/// Apply every play turn of a script to `board`.
///
/// Discard turns leave the board as it is; dealing and turn order belong to
/// the caller.
pub fn replay(board: &Board, turns: &[ScriptedTurn]) -> Result<Board, NotationError> {
    let mut board = board.clone();
    for (i, turn) in turns.iter().enumerate() {
        let ScriptedTurn::Play(placements) = turn else {
            continue;
        };
        let rejected = |source: EngineError| NotationError::Rejected { turn: i + 1, source };
        let play = board.validate_play(placements).map_err(rejected)?;
        board = board.play(&play).map_err(rejected)?;
    }
    Ok(board)
}

/// Parse and replay a script onto `board`.
pub fn replay_script(board: &Board, text: &str) -> Result<Board, NotationError> {
    replay(board, &parse_script(text)?)
}
