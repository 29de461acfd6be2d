//! Discard policy for hands with nothing worth playing.
//!
//! Groups the hand by shared color and by shared shape, keeps the largest
//! group, and throws everything else back.

use std::collections::BTreeSet;

use crate::core::{Color, Piece, Shape, SharedAttribute};

/// The largest group of distinct pieces sharing one attribute.
///
/// Colors are considered before shapes, each in canonical order; the first
/// largest group wins ties. Returns `None` for an empty hand.
#[must_use]
pub fn largest_group(hand: &[Piece]) -> Option<(SharedAttribute, BTreeSet<Piece>)> {
    let by_color = Color::ALL.iter().map(|&color| {
        let members: BTreeSet<Piece> = hand.iter().copied().filter(|p| p.color == color).collect();
        (SharedAttribute::Color(color), members)
    });
    let by_shape = Shape::ALL.iter().map(|&shape| {
        let members: BTreeSet<Piece> = hand.iter().copied().filter(|p| p.shape == shape).collect();
        (SharedAttribute::Shape(shape), members)
    });

    let mut best: Option<(SharedAttribute, BTreeSet<Piece>)> = None;
    for (attribute, members) in by_color.chain(by_shape) {
        if members.is_empty() {
            continue;
        }
        let better = best.as_ref().map_or(true, |(_, kept)| members.len() > kept.len());
        if better {
            best = Some((attribute, members));
        }
    }
    best
}

/// Pieces to discard from `hand`.
///
/// Every piece outside the largest group goes. Extra copies of a kept piece
/// stay only when the kept group has more than one member.
#[must_use]
pub fn discard_set(hand: &[Piece]) -> Vec<Piece> {
    let Some((_, kept)) = largest_group(hand) else {
        return Vec::new();
    };
    let keep_duplicates = kept.len() > 1;

    let mut seen = BTreeSet::new();
    hand.iter()
        .copied()
        .filter(|piece| {
            if !kept.contains(piece) {
                return true;
            }
            let first_copy = seen.insert(*piece);
            !(first_copy || keep_duplicates)
        })
        .collect()
}
