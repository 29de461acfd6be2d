//! Game settings.
//!
//! `Settings` is the configuration a game supplies to the engine:
//! - the deck multiplier (copies of each distinct tile)
//! - the ordered color and shape lists in play
//! - the player list
//! - an optional bonus for completing a line
//!
//! The engine reads the color and shape counts as the attribute domains that
//! bound line length. Hand size and the deck are derived from them.

use serde::{Deserialize, Serialize};

use super::attributes::{Color, Shape, SharedAttribute};
use super::error::SettingsError;
use super::piece::Piece;
use super::rng::GameRng;

/// Configuration for one game instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Copies of each distinct (color, shape) tile in the deck.
    pub multiplier: usize,

    /// Colors in play, in display order.
    pub colors: Vec<Color>,

    /// Shapes in play, in display order.
    pub shapes: Vec<Shape>,

    /// Player names, in seating order.
    pub players: Vec<String>,

    /// Extra points for each line a play brings to full length (0 = none).
    #[serde(default)]
    pub completion_bonus: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            multiplier: 3,
            colors: Color::STANDARD.to_vec(),
            shapes: Shape::STANDARD.to_vec(),
            players: vec!["Player 1".to_string(), "Player 2".to_string()],
            completion_bonus: 0,
        }
    }
}

impl Settings {
    /// Create validated settings.
    pub fn new(
        multiplier: usize,
        colors: Vec<Color>,
        shapes: Vec<Shape>,
        players: Vec<String>,
    ) -> Result<Self, SettingsError> {
        let settings = Self {
            multiplier,
            colors,
            shapes,
            players,
            completion_bonus: 0,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Standard settings restricted to the first `n` colors and shapes.
    pub fn with_domain_size(n: usize) -> Result<Self, SettingsError> {
        let defaults = Self::default();
        Self::new(
            defaults.multiplier,
            Color::ALL.iter().copied().take(n).collect(),
            Shape::ALL.iter().copied().take(n).collect(),
            defaults.players,
        )
    }

    /// Set the line completion bonus.
    #[must_use]
    pub fn with_completion_bonus(mut self, bonus: u32) -> Self {
        self.completion_bonus = bonus;
        self
    }

    /// Replace the player list.
    #[must_use]
    pub fn with_players(mut self, players: Vec<String>) -> Self {
        self.players = players;
        self
    }

    /// Check the settings are usable.
    ///
    /// `new` calls this; settings built by hand or deserialized should call it
    /// before use.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.colors.is_empty() || self.shapes.is_empty() {
            return Err(SettingsError::EmptyDomain);
        }
        if self.colors.len() != self.shapes.len() {
            return Err(SettingsError::UnequalDomains {
                colors: self.colors.len(),
                shapes: self.shapes.len(),
            });
        }
        let mut colors = self.colors.clone();
        colors.sort_unstable();
        colors.dedup();
        let mut shapes = self.shapes.clone();
        shapes.sort_unstable();
        shapes.dedup();
        if colors.len() != self.colors.len() || shapes.len() != self.shapes.len() {
            return Err(SettingsError::DuplicateAttribute);
        }
        if self.multiplier == 0 {
            return Err(SettingsError::ZeroMultiplier);
        }
        if self.players.is_empty() {
            return Err(SettingsError::NoPlayers);
        }
        Ok(())
    }

    // === Derived values ===

    /// Tiles each player holds: `ceil((|colors| + |shapes|) / 2)`.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        (self.colors.len() + self.shapes.len()).div_ceil(2)
    }

    /// Every (color, shape) pair, repeated `multiplier` times.
    ///
    /// Ordered by copy, then color order, then shape order.
    #[must_use]
    pub fn deck(&self) -> Vec<Piece> {
        let mut deck = Vec::with_capacity(self.multiplier * self.colors.len() * self.shapes.len());
        for _ in 0..self.multiplier {
            for &color in &self.colors {
                for &shape in &self.shapes {
                    deck.push(Piece::new(color, shape));
                }
            }
        }
        deck
    }

    /// The deck in random order.
    #[must_use]
    pub fn shuffled_deck(&self, rng: &mut GameRng) -> Vec<Piece> {
        let mut deck = self.deck();
        rng.shuffle(&mut deck);
        deck
    }

    /// Whether the piece's color and shape are both in play.
    #[must_use]
    pub fn contains(&self, piece: Piece) -> bool {
        self.colors.contains(&piece.color) && self.shapes.contains(&piece.shape)
    }

    /// Longest legal line sharing `attribute`.
    ///
    /// A same-color line varies shape, so it is capped by the shape count, and
    /// vice versa.
    #[must_use]
    pub fn max_line_len(&self, attribute: SharedAttribute) -> usize {
        match attribute {
            SharedAttribute::Color(_) => self.shapes.len(),
            SharedAttribute::Shape(_) => self.colors.len(),
        }
    }

    /// Every distinct piece in play, in color-then-shape order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.colors
            .iter()
            .flat_map(move |&color| self.shapes.iter().map(move |&shape| Piece::new(color, shape)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.hand_size(), 6);
        assert_eq!(settings.deck().len(), 108);
        assert_eq!(settings.pieces().count(), 36);
    }

    #[test]
    fn test_hand_size_rounds_up() {
        let settings = Settings::with_domain_size(3).unwrap();
        assert_eq!(settings.hand_size(), 3);

        let mut odd = Settings::with_domain_size(3).unwrap();
        odd.shapes.pop();
        assert_eq!(odd.hand_size(), 3);
    }

    #[test]
    fn test_deck_counts_each_piece() {
        let settings = Settings::with_domain_size(4).unwrap();
        let deck = settings.deck();
        assert_eq!(deck.len(), 3 * 16);

        let red_circle = Piece::new(Color::Red, Shape::Circle);
        assert_eq!(deck.iter().filter(|&&p| p == red_circle).count(), 3);
    }

    #[test]
    fn test_shuffled_deck_is_permutation() {
        let settings = Settings::default();
        let mut rng = GameRng::new(7);
        let mut shuffled = settings.shuffled_deck(&mut rng);
        assert_ne!(shuffled, settings.deck());

        let mut sorted = settings.deck();
        sorted.sort();
        shuffled.sort();
        assert_eq!(shuffled, sorted);
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(
            Settings::new(1, vec![], vec![Shape::Circle], vec!["a".into()]),
            Err(SettingsError::EmptyDomain)
        );
        assert_eq!(
            Settings::new(1, vec![Color::Red], vec![Shape::Circle, Shape::Square], vec!["a".into()]),
            Err(SettingsError::UnequalDomains { colors: 1, shapes: 2 })
        );
        assert_eq!(
            Settings::new(
                1,
                vec![Color::Red, Color::Red],
                vec![Shape::Circle, Shape::Square],
                vec!["a".into()]
            ),
            Err(SettingsError::DuplicateAttribute)
        );
        assert_eq!(
            Settings::new(0, vec![Color::Red], vec![Shape::Circle], vec!["a".into()]),
            Err(SettingsError::ZeroMultiplier)
        );
        assert_eq!(
            Settings::new(1, vec![Color::Red], vec![Shape::Circle], vec![]),
            Err(SettingsError::NoPlayers)
        );
    }

    #[test]
    fn test_max_line_len_uses_other_domain() {
        let mut settings = Settings::default();
        settings.colors.truncate(4);
        assert_eq!(settings.max_line_len(SharedAttribute::Shape(Shape::Circle)), 4);
        assert_eq!(settings.max_line_len(SharedAttribute::Color(Color::Red)), 6);
    }

    #[test]
    fn test_contains() {
        let settings = Settings::default();
        assert!(settings.contains(Piece::new(Color::Purple, Shape::Star)));
        assert!(!settings.contains(Piece::new(Color::White, Shape::Star)));
        assert!(!settings.contains(Piece::new(Color::Red, Shape::Moon)));
    }

    #[test]
    fn test_serialization() {
        let settings = Settings::default().with_completion_bonus(6);
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, deserialized);
    }
}
