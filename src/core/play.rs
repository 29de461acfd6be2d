//! A play: the set of placements made together in one turn.
//!
//! Plays have value semantics. Two plays holding the same placements are equal
//! and hash identically no matter the order the placements were added, which
//! is what lets the move search recognise converging partial plays.
//!
//! Backed by `im::OrdSet` so extending a play by one placement during search
//! shares structure with the original.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::location::Location;
use super::piece::{Piece, Placement};

/// A canonical, order-independent set of placements.
///
/// Ordered by length first, then lexicographically by placements.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Play {
    placements: OrdSet<Placement>,
}

impl Play {
    /// The empty play (a pass).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A play of a single placement.
    #[must_use]
    pub fn single(placement: Placement) -> Self {
        Self {
            placements: OrdSet::unit(placement),
        }
    }

    /// This play with one more placement.
    #[must_use]
    pub fn with(&self, placement: Placement) -> Self {
        Self {
            placements: self.placements.update(placement),
        }
    }

    /// Number of placements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether this is the empty play.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Whether the play contains this exact placement.
    #[must_use]
    pub fn contains(&self, placement: &Placement) -> bool {
        self.placements.contains(placement)
    }

    /// Iterate placements in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Placement> + '_ {
        self.placements.iter()
    }

    /// Locations targeted by this play, in canonical order.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.placements.iter().map(|p| p.location)
    }

    /// Pieces used by this play, in canonical order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.placements.iter().map(|p| p.piece)
    }

    /// Whether some placement targets this location.
    #[must_use]
    pub fn occupies(&self, location: Location) -> bool {
        self.placements.iter().any(|p| p.location == location)
    }
}

impl PartialOrd for Play {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Play {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.placements.iter().cmp(other.placements.iter()))
    }
}

impl FromIterator<Placement> for Play {
    fn from_iter<I: IntoIterator<Item = Placement>>(iter: I) -> Self {
        Self {
            placements: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Play {
    type Item = &'a Placement;
    type IntoIter = im::ordset::Iter<'a, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}

impl std::fmt::Display for Play {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for placement in &self.placements {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", placement)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, Shape};
    use std::collections::HashSet;

    fn rc(x: i32, y: i32) -> Placement {
        Piece::new(Color::Red, Shape::Circle).at(Location::new(x, y))
    }

    fn rs(x: i32, y: i32) -> Placement {
        Piece::new(Color::Red, Shape::Square).at(Location::new(x, y))
    }

    #[test]
    fn test_order_independent_equality() {
        let a = Play::empty().with(rc(0, 0)).with(rs(1, 0));
        let b = Play::empty().with(rs(1, 0)).with(rc(0, 0));
        assert_eq!(a, b);

        let mut seen = HashSet::new();
        seen.insert(a);
        assert!(seen.contains(&b));
    }

    #[test]
    fn test_ordering_by_length_first() {
        let short = Play::single(rs(9, 9));
        let long = Play::empty().with(rc(0, 0)).with(rs(1, 0));
        assert!(short < long);
        assert!(Play::empty() < short);
    }

    #[test]
    fn test_ordering_lexicographic_on_ties() {
        let a = Play::single(rc(0, 0));
        let b = Play::single(rc(0, 1));
        assert!(a < b);
    }

    #[test]
    fn test_duplicate_placement_collapses() {
        let play: Play = vec![rc(0, 0), rc(0, 0)].into_iter().collect();
        assert_eq!(play.len(), 1);
    }

    #[test]
    fn test_display() {
        let play = Play::empty().with(rs(1, 0)).with(rc(0, 0));
        assert_eq!(play.to_string(), "rc 0 0, rs 1 0");
    }
}
