//! Lines: the rule primitive of the game.
//!
//! A line is a maximal straight run of placements along one axis. Its pieces
//! all share exactly one attribute (every tile the same color, or every tile
//! the same shape) and are all distinct in the other, so a line can never be
//! longer than the domain of the varying attribute.
//!
//! `forms_line` is the single validity check; `extend` and `join_with` only
//! build the hypothetical piece sequence and ask it.

use smallvec::SmallVec;

use crate::core::{Axis, Direction, Location, Piece, Placement, Settings, SharedAttribute};

/// Whether a sequence of pieces may sit together in one line.
///
/// True iff the pieces are pairwise distinct and either all share a color
/// (at most `|shapes|` of them) or all share a shape (at most `|colors|`).
/// Zero or one piece is always a line.
#[must_use]
pub fn forms_line(pieces: &[Piece], settings: &Settings) -> bool {
    let (first, second) = match pieces {
        [] | [_] => return true,
        [first, second, ..] => (*first, *second),
    };
    let Some(shared) = first.shared_with(second) else {
        return false;
    };
    if pieces.len() > settings.max_line_len(shared) {
        return false;
    }
    if !pieces.iter().all(|p| p.has(shared)) {
        return false;
    }
    let mut sorted: SmallVec<[Piece; 8]> = pieces.iter().copied().collect();
    sorted.sort_unstable();
    sorted.windows(2).all(|w| w[0] != w[1])
}

/// A maximal same-axis run of placements.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Line {
    axis: Axis,
    /// Ordered by coordinate along `axis`, contiguous.
    placements: SmallVec<[Placement; 6]>,
}

impl Line {
    /// Build a line from contiguous colinear placements in any order.
    ///
    /// Returns `None` if the placements are empty, not contiguous on `axis`,
    /// or break the line rules.
    #[must_use]
    pub fn new(axis: Axis, placements: impl IntoIterator<Item = Placement>, settings: &Settings) -> Option<Self> {
        let mut placements: SmallVec<[Placement; 6]> = placements.into_iter().collect();
        placements.sort_by_key(|p| p.location.along(axis));

        let first = placements.first()?;
        let across = first.location.across(axis);
        let start = first.location.along(axis);
        let contiguous = placements.iter().enumerate().all(|(i, p)| {
            p.location.across(axis) == across && i64::from(p.location.along(axis)) == i64::from(start) + i as i64
        });
        if !contiguous {
            return None;
        }

        let pieces: SmallVec<[Piece; 8]> = placements.iter().map(|p| p.piece).collect();
        if !forms_line(&pieces, settings) {
            return None;
        }
        Some(Self { axis, placements })
    }

    /// Build from an already-ordered run known to satisfy the rules.
    pub(crate) fn from_run(axis: Axis, placements: SmallVec<[Placement; 6]>) -> Self {
        debug_assert!(!placements.is_empty());
        Self { axis, placements }
    }

    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Always false; a line has at least one placement.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Placements in order along the axis.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.placements.iter().map(|p| p.piece)
    }

    #[must_use]
    pub fn contains_piece(&self, piece: Piece) -> bool {
        self.pieces().any(|p| p == piece)
    }

    #[must_use]
    pub fn contains_location(&self, location: Location) -> bool {
        self.placements.iter().any(|p| p.location == location)
    }

    /// The attribute every member shares. `None` for a single tile, which
    /// could still grow either way.
    #[must_use]
    pub fn shared(&self) -> Option<SharedAttribute> {
        match self.placements.as_slice() {
            [a, b, ..] => a.piece.shared_with(b.piece),
            _ => None,
        }
    }

    /// The two open cells just beyond each end: `(before first, after last)`.
    #[must_use]
    pub fn endpoints(&self) -> (Location, Location) {
        let first = self.placements[0].location;
        let last = self.placements[self.placements.len() - 1].location;
        (
            first.neighbor(self.axis, Direction::Backward),
            last.neighbor(self.axis, Direction::Forward),
        )
    }

    /// Points this line is worth: its length.
    #[must_use]
    pub fn score(&self) -> u32 {
        u32::try_from(self.len()).unwrap_or(u32::MAX)
    }

    /// Whether the line has reached the maximum length for its attribute.
    #[must_use]
    pub fn is_complete(&self, settings: &Settings) -> bool {
        match self.shared() {
            Some(shared) => self.len() == settings.max_line_len(shared),
            None => settings.colors.len().max(settings.shapes.len()) == 1,
        }
    }

    // === Extension ===

    /// Whether `piece` could be added at either end.
    #[must_use]
    pub fn can_extend(&self, piece: Piece, settings: &Settings) -> bool {
        let mut pieces: SmallVec<[Piece; 8]> = self.pieces().collect();
        pieces.push(piece);
        forms_line(&pieces, settings)
    }

    /// This line grown by `placement`, which must sit on one of the endpoints.
    ///
    /// Returns `None` if the placement is elsewhere or breaks the rules.
    #[must_use]
    pub fn extend(&self, placement: Placement, settings: &Settings) -> Option<Line> {
        let (before, after) = self.endpoints();
        if !self.can_extend(placement.piece, settings) {
            return None;
        }
        let mut placements = self.placements.clone();
        if placement.location == before {
            placements.insert(0, placement);
        } else if placement.location == after {
            placements.push(placement);
        } else {
            return None;
        }
        Some(Self::from_run(self.axis, placements))
    }

    /// Whether `self`, `placement`, and `other` laid end to end on one axis
    /// would form a legal line. `placement` must fill the single gap between
    /// the two lines.
    #[must_use]
    pub fn can_join_with(&self, other: &Line, placement: Placement, settings: &Settings) -> bool {
        self.join_with(other, placement, settings).is_some()
    }

    /// The merged line through `placement`, if legal.
    #[must_use]
    pub fn join_with(&self, other: &Line, placement: Placement, settings: &Settings) -> Option<Line> {
        if self.axis != other.axis {
            return None;
        }
        let (lower, upper) = if self.placements[0].location.along(self.axis) < other.placements[0].location.along(self.axis) {
            (self, other)
        } else {
            (other, self)
        };
        if lower.endpoints().1 != placement.location || upper.endpoints().0 != placement.location {
            return None;
        }

        let mut placements = lower.placements.clone();
        placements.push(placement);
        placements.extend(upper.placements.iter().copied());

        let pieces: SmallVec<[Piece; 8]> = placements.iter().map(|p| p.piece).collect();
        if !forms_line(&pieces, settings) {
            return None;
        }
        Some(Self::from_run(self.axis, placements))
    }

    /// Every piece in play that could legally extend this line.
    #[must_use]
    pub fn legal_extensions(&self, settings: &Settings) -> Vec<Piece> {
        settings.pieces().filter(|&p| self.can_extend(p, settings)).collect()
    }
}
