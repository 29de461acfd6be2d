//! The board: an immutable snapshot with legality and scoring.
//!
//! ## Persistence
//!
//! A `Board` never changes once built. `play` returns a new board that links
//! back to its predecessor, so the full game history is a chain of snapshots
//! ending at the empty board. Placements live in `im` collections, so each
//! snapshot shares structure with the one before it instead of copying.
//!
//! ## Rules
//!
//! Single-placement legality (`is_legal`) is the only rule. Multi-placement
//! legality (`is_legal_play`) checks the play's shape, then searches for an
//! order in which every placement is individually legal when applied.
//!
//! ## Scoring
//!
//! A play scores the sum of the lengths of the distinct multi-tile lines it
//! touches, plus the configured bonus per line it completes. A non-empty play
//! whose lines contribute nothing (a lone first tile) scores 1.

use im::Vector;
use log::debug;
use smallvec::SmallVec;
use std::collections::BTreeSet;
use std::sync::{Arc, OnceLock};

use crate::core::{Axis, Direction, EngineError, Location, Piece, Placement, Play, Settings};

use super::grid::{Bounds, Grid};
use super::line::Line;

/// An immutable board snapshot.
///
/// Cloning is cheap: settings and history are shared behind `Arc`, the grid
/// and placement list are persistent collections.
#[derive(Clone, Debug)]
pub struct Board {
    settings: Arc<Settings>,

    grid: Grid,

    /// Every placement, in the order it was played.
    placements: Vector<Placement>,

    /// What was played to reach this board.
    last_play: Play,

    /// The board before `last_play`. `None` only for a fresh board.
    previous: Option<Arc<Board>>,

    /// Number of plays committed so far.
    turn: u32,

    /// Points scored by `last_play`.
    score: u32,

    /// All lines, computed on first use.
    lines: Arc<OnceLock<Vec<Line>>>,
}

impl Board {
    /// An empty board for a game with these settings.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self::with_shared_settings(Arc::new(settings))
    }

    /// An empty board sharing already-wrapped settings.
    #[must_use]
    pub fn with_shared_settings(settings: Arc<Settings>) -> Self {
        Self {
            settings,
            grid: Grid::new(),
            placements: Vector::new(),
            last_play: Play::empty(),
            previous: None,
            turn: 0,
            score: 0,
            lines: Arc::new(OnceLock::new()),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The underlying location index.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Placements in the order they were played.
    pub fn placements(&self) -> impl Iterator<Item = &Placement> + '_ {
        self.placements.iter()
    }

    #[must_use]
    pub fn get(&self, location: Location) -> Option<&Placement> {
        self.grid.get(location)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        self.grid.bounds()
    }

    /// The play that produced this board.
    #[must_use]
    pub fn last_play(&self) -> &Play {
        &self.last_play
    }

    /// Points scored by the last play.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The board before the last play (undo).
    #[must_use]
    pub fn previous(&self) -> Option<&Board> {
        self.previous.as_deref()
    }

    /// This board followed by every predecessor, ending at the empty board.
    pub fn history(&self) -> impl Iterator<Item = &Board> + '_ {
        std::iter::successors(Some(self), |board| board.previous())
    }

    // === Lines ===

    /// Every maximal line on the board, both axes, including single tiles.
    ///
    /// Computed once per board and cached.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        self.lines.get_or_init(|| {
            let mut lines = Vec::new();
            for axis in Axis::BOTH {
                for cells in self.grid.axis_lines(axis, 1) {
                    let mut run: SmallVec<[Placement; 6]> = SmallVec::new();
                    for (_, cell) in cells {
                        match cell {
                            Some(placement) => run.push(placement),
                            None if !run.is_empty() => {
                                lines.push(Line::from_run(axis, std::mem::take(&mut run)));
                            }
                            None => {}
                        }
                    }
                }
            }
            lines
        })
    }

    /// The line through an occupied location along `axis`.
    #[must_use]
    pub fn line_through(&self, location: Location, axis: Axis) -> Option<Line> {
        let placement = *self.grid.get(location)?;
        let mut run: SmallVec<[Placement; 6]> = self.grid.walk(location, axis, Direction::Backward).collect();
        run.reverse();
        run.push(placement);
        run.extend(self.grid.walk(location, axis, Direction::Forward));
        Some(Line::from_run(axis, run))
    }

    /// Both lines (horizontal, vertical) through an occupied location.
    #[must_use]
    pub fn lines_at(&self, location: Location) -> Vec<Line> {
        Axis::BOTH
            .iter()
            .filter_map(|&axis| self.line_through(location, axis))
            .collect()
    }

    /// The line whose open endpoint is `location`, on the given side.
    fn line_ending_at(&self, location: Location, axis: Axis, direction: Direction) -> Option<Line> {
        let mut run: SmallVec<[Placement; 6]> = self.grid.walk(location, axis, direction).collect();
        if run.is_empty() {
            return None;
        }
        if direction == Direction::Backward {
            run.reverse();
        }
        Some(Line::from_run(axis, run))
    }

    // === Legality ===

    /// Whether a single placement is legal right now.
    ///
    /// Anything in the game's domain and the playable area is legal on an
    /// empty board. Otherwise the cell must be free and adjacent to a tile,
    /// every line ending at the cell must accept the piece, and any two
    /// colinear lines it would bridge must merge into a legal line.
    #[must_use]
    pub fn is_legal(&self, placement: Placement) -> bool {
        if !self.settings.contains(placement.piece) || !placement.location.in_range() {
            return false;
        }
        if self.grid.is_empty() {
            return true;
        }
        let location = placement.location;
        if self.grid.is_occupied(location) || !self.grid.has_neighbor(location) {
            return false;
        }
        Axis::BOTH.iter().all(|&axis| self.accepts_on_axis(placement, axis))
    }

    fn accepts_on_axis(&self, placement: Placement, axis: Axis) -> bool {
        let before = self.line_ending_at(placement.location, axis, Direction::Backward);
        let after = self.line_ending_at(placement.location, axis, Direction::Forward);
        match (before, after) {
            (None, None) => true,
            (Some(line), None) | (None, Some(line)) => line.extend(placement, &self.settings).is_some(),
            (Some(lower), Some(upper)) => lower.can_join_with(&upper, placement, &self.settings),
        }
    }

    /// Whether a play's targets form one gap-free straight run.
    ///
    /// Targets must be distinct free cells on a single row or column; cells
    /// between them may be filled by tiles already on the board.
    #[must_use]
    pub fn spans_one_line(&self, play: &Play) -> bool {
        let targets: BTreeSet<Location> = play.locations().collect();
        if targets.len() != play.len() || !targets.iter().all(|loc| loc.in_range()) {
            return false;
        }
        let Some(&first) = targets.first() else {
            return true;
        };
        if targets.iter().any(|&loc| self.grid.is_occupied(loc)) {
            return false;
        }

        let axis = if targets.iter().all(|loc| loc.y == first.y) {
            Axis::Horizontal
        } else if targets.iter().all(|loc| loc.x == first.x) {
            Axis::Vertical
        } else {
            return false;
        };

        let (lo, hi) = targets.iter().fold((i32::MAX, i32::MIN), |(lo, hi), loc| {
            let c = loc.along(axis);
            (lo.min(c), hi.max(c))
        });
        (lo..=hi)
            .map(|c| first.offset(axis, c - first.along(axis)))
            .all(|loc| targets.contains(&loc) || self.grid.is_occupied(loc))
    }

    /// Whether a whole play is legal.
    ///
    /// The empty play (a pass) is legal. Otherwise the targets must span one
    /// line and some application order must keep every step legal, found by
    /// repeatedly applying any placement that is currently legal.
    #[must_use]
    pub fn is_legal_play(&self, play: &Play) -> bool {
        if play.is_empty() {
            return true;
        }
        if !self.spans_one_line(play) {
            return false;
        }

        let mut board = self.clone();
        let mut remaining: Vec<Placement> = play.iter().copied().collect();
        while !remaining.is_empty() {
            let Some(index) = remaining.iter().position(|&p| board.is_legal(p)) else {
                return false;
            };
            board = board.with_placements(std::iter::once(&remaining.swap_remove(index)));
        }
        true
    }

    /// Every legal placement of `piece`, in location order.
    ///
    /// On an empty board this is exactly the origin.
    #[must_use]
    pub fn get_legal_placements(&self, piece: Piece) -> Vec<Placement> {
        if !self.settings.contains(piece) {
            return Vec::new();
        }
        if self.grid.is_empty() {
            return vec![piece.at(Location::ORIGIN)];
        }
        self.grid
            .frontier()
            .into_iter()
            .map(|loc| piece.at(loc))
            .filter(|&p| self.is_legal(p))
            .collect()
    }

    /// Legal placements for every distinct piece in a hand.
    #[must_use]
    pub fn get_legal_placements_for_hand(&self, hand: &[Piece]) -> Vec<Placement> {
        let distinct: BTreeSet<Piece> = hand.iter().copied().collect();
        distinct
            .into_iter()
            .flat_map(|piece| self.get_legal_placements(piece))
            .collect()
    }

    /// Check a raw submission and turn it into a play.
    ///
    /// Rejects repeated placements, two pieces on one cell, cells outside the
    /// playable area, and pieces whose color or shape is not in this game.
    pub fn validate_play(&self, placements: &[Placement]) -> Result<Play, EngineError> {
        let mut seen = BTreeSet::new();
        let mut cells = BTreeSet::new();
        for &placement in placements {
            if !self.settings.contains(placement.piece) {
                return Err(EngineError::PieceOutOfDomain(placement.piece));
            }
            if !placement.location.in_range() {
                return Err(EngineError::OutOfRange(placement.location));
            }
            if !seen.insert(placement) {
                return Err(EngineError::DuplicatePlacement(placement));
            }
            if !cells.insert(placement.location) {
                return Err(EngineError::DuplicateLocation(placement.location));
            }
        }
        Ok(placements.iter().copied().collect())
    }

    // === Commit ===

    /// Commit a play, returning the next board.
    ///
    /// Fails with `EngineError::IllegalPlay` if `is_legal_play` is false.
    pub fn play(&self, play: &Play) -> Result<Board, EngineError> {
        if let Some(piece) = play.pieces().find(|&p| !self.settings.contains(p)) {
            return Err(EngineError::PieceOutOfDomain(piece));
        }
        if let Some(location) = play.locations().find(|loc| !loc.in_range()) {
            return Err(EngineError::OutOfRange(location));
        }
        if !self.is_legal_play(play) {
            return Err(EngineError::IllegalPlay {
                play: play.to_string(),
            });
        }

        let mut next = self.with_placements(play.iter());
        next.last_play = play.clone();
        next.previous = Some(Arc::new(self.clone()));
        next.turn = self.turn + 1;
        next.score = next.score_of(play);

        debug!(
            "turn {}: {} placement(s) for {} point(s)",
            next.turn,
            play.len(),
            next.score
        );
        Ok(next)
    }

    /// Points a just-applied play earns on this board.
    fn score_of(&self, play: &Play) -> u32 {
        let mut touched: Vec<Line> = Vec::new();
        for placement in play {
            for axis in Axis::BOTH {
                if let Some(line) = self.line_through(placement.location, axis) {
                    if line.len() > 1 && !touched.contains(&line) {
                        touched.push(line);
                    }
                }
            }
        }

        let total: u32 = touched
            .iter()
            .map(|line| {
                let bonus = if line.is_complete(&self.settings) {
                    self.settings.completion_bonus
                } else {
                    0
                };
                line.score() + bonus
            })
            .sum();

        if total == 0 && !play.is_empty() {
            1
        } else {
            total
        }
    }

    /// This board with extra placements laid down, unchecked and outside the
    /// history chain. Used to evaluate hypothetical positions.
    pub(crate) fn with_placements<'a>(&self, placements: impl IntoIterator<Item = &'a Placement>) -> Board {
        let mut grid = self.grid.clone();
        let mut list = self.placements.clone();
        for &placement in placements {
            grid = grid.with(placement);
            list.push_back(placement);
        }
        Board {
            settings: Arc::clone(&self.settings),
            grid,
            placements: list,
            last_play: self.last_play.clone(),
            previous: self.previous.clone(),
            turn: self.turn,
            score: self.score,
            lines: Arc::new(OnceLock::new()),
        }
    }
}
