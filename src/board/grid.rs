//! Geometry: a persistent location index over placements.
//!
//! ## Grid
//!
//! Maps each occupied `Location` to its `Placement`. Backed by `im::OrdMap`,
//! so inserting into a grid returns a new grid sharing almost all structure
//! with the old one. The bounding box is maintained on insert.
//!
//! ## Iteration
//!
//! - `axis_iter`: one row or column across the bounding box, with blank
//!   padding at both ends so a consumer splitting on blanks always sees the
//!   end of the last run.
//! - `walk`: from a cell outwards in one direction until the first blank.
//!
//! Both iterators are lazy, finite, and `Clone` (restartable).

use im::OrdMap;
use std::collections::BTreeSet;

use crate::core::{Axis, Direction, Location, Placement};

/// Inclusive axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub min: Location,
    pub max: Location,
}

impl Bounds {
    /// A box covering a single cell.
    #[must_use]
    pub const fn single(location: Location) -> Self {
        Self {
            min: location,
            max: location,
        }
    }

    /// The smallest box covering `self` and `location`.
    #[must_use]
    pub fn including(self, location: Location) -> Self {
        Self {
            min: Location::new(self.min.x.min(location.x), self.min.y.min(location.y)),
            max: Location::new(self.max.x.max(location.x), self.max.y.max(location.y)),
        }
    }

    /// Columns covered.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.max.x.abs_diff(self.min.x) + 1
    }

    /// Rows covered.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.max.y.abs_diff(self.min.y) + 1
    }

    /// The box grown by `n` cells on every side.
    #[must_use]
    pub fn padded(self, n: i32) -> Self {
        Self {
            min: Location::new(self.min.x - n, self.min.y - n),
            max: Location::new(self.max.x + n, self.max.y + n),
        }
    }

    #[must_use]
    pub fn contains(&self, location: Location) -> bool {
        (self.min.x..=self.max.x).contains(&location.x) && (self.min.y..=self.max.y).contains(&location.y)
    }

    /// Range of the `along` coordinate for lines on `axis`.
    fn span(&self, axis: Axis) -> (i32, i32) {
        (self.min.along(axis), self.max.along(axis))
    }
}

/// Persistent map from location to placement.
#[derive(Clone, Debug, Default)]
pub struct Grid {
    cells: OrdMap<Location, Placement>,
    bounds: Option<Bounds>,
}

impl Grid {
    /// An empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A new grid with `placement` added. The location must be free.
    #[must_use]
    pub fn with(&self, placement: Placement) -> Self {
        debug_assert!(!self.is_occupied(placement.location));
        let bounds = match self.bounds {
            Some(b) => b.including(placement.location),
            None => Bounds::single(placement.location),
        };
        Self {
            cells: self.cells.update(placement.location, placement),
            bounds: Some(bounds),
        }
    }

    #[must_use]
    pub fn get(&self, location: Location) -> Option<&Placement> {
        self.cells.get(&location)
    }

    #[must_use]
    pub fn is_occupied(&self, location: Location) -> bool {
        self.cells.contains_key(&location)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bounding box of all placements; `None` when empty.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Placements in location order.
    pub fn placements(&self) -> impl Iterator<Item = &Placement> + '_ {
        self.cells.values()
    }

    /// Iterate one row (`Horizontal`) or column (`Vertical`) across the
    /// bounding box, extended by `padding` blank-or-not cells at each end.
    ///
    /// `across` selects the row's `y` or the column's `x`.
    #[must_use]
    pub fn axis_iter(&self, axis: Axis, across: i32, padding: i32) -> AxisIter<'_> {
        let (next, end) = match self.bounds {
            Some(b) => {
                let (lo, hi) = b.span(axis);
                (lo - padding, hi + padding)
            }
            None => (1, 0),
        };
        AxisIter {
            grid: self,
            axis,
            across,
            next,
            end,
        }
    }

    /// Every row (or column) of the bounding box as padded axis iterators.
    pub fn axis_lines(&self, axis: Axis, padding: i32) -> impl Iterator<Item = AxisIter<'_>> + '_ {
        self.bounds
            .map(|b| b.span(axis.other()))
            .into_iter()
            .flat_map(|(lo, hi)| lo..=hi)
            .map(move |across| self.axis_iter(axis, across, padding))
    }

    /// Placements from the neighbor of `from` outwards, stopping at the first
    /// blank. `from` itself is not yielded.
    #[must_use]
    pub fn walk(&self, from: Location, axis: Axis, direction: Direction) -> Walk<'_> {
        Walk {
            grid: self,
            current: from,
            axis,
            direction,
        }
    }

    /// Empty cells orthogonally adjacent to at least one placement.
    #[must_use]
    pub fn frontier(&self) -> BTreeSet<Location> {
        self.cells
            .keys()
            .flat_map(|loc| loc.neighbors())
            .filter(|loc| !self.is_occupied(*loc))
            .collect()
    }

    /// Whether `location` touches an occupied cell orthogonally.
    #[must_use]
    pub fn has_neighbor(&self, location: Location) -> bool {
        location.neighbors().iter().any(|n| self.is_occupied(*n))
    }
}

/// Lazy iterator over one padded row or column.
///
/// Yields every cell in order with its placement, if any.
#[derive(Clone, Debug)]
pub struct AxisIter<'a> {
    grid: &'a Grid,
    axis: Axis,
    across: i32,
    next: i32,
    end: i32,
}

impl AxisIter<'_> {
    /// The axis this iterator runs along.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }
}

impl Iterator for AxisIter<'_> {
    type Item = (Location, Option<Placement>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.end {
            return None;
        }
        let location = match self.axis {
            Axis::Horizontal => Location::new(self.next, self.across),
            Axis::Vertical => Location::new(self.across, self.next),
        };
        self.next += 1;
        Some((location, self.grid.get(location).copied()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next + 1).unwrap_or(0);
        (remaining, Some(remaining))
    }
}

/// Lazy iterator walking away from a cell until the first blank.
#[derive(Clone, Debug)]
pub struct Walk<'a> {
    grid: &'a Grid,
    current: Location,
    axis: Axis,
    direction: Direction,
}

impl Iterator for Walk<'_> {
    type Item = Placement;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.current.neighbor(self.axis, self.direction);
        let placement = self.grid.get(next).copied()?;
        self.current = next;
        Some(placement)
    }
}
