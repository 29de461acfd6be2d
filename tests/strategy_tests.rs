//! Strategy integration tests.

use rust_qwirkle::board::{parse_play, replay_script, Board};
use rust_qwirkle::core::{GameRng, Piece, Settings};
use rust_qwirkle::search::SearchConfig;
use rust_qwirkle::strategy::{line_length_deviation, Decision, HarmonyStrategy, MaxStrategy, Strategy};

fn hand(text: &str) -> Vec<Piece> {
    text.split_whitespace()
        .map(|p| Piece::from_abbreviation(p).unwrap())
        .collect()
}

/// A red row of three with a blue circle hanging under its first tile.
///
/// `rt` stretches the row to 4 (score 4, lines 4 and 2); `gc` stretches the
/// column to 3 (score 3, lines 3 and 3).
fn lopsided() -> Board {
    replay_script(&Board::new(Settings::default()), "rc 0 0, rs 1 0, rd 2 0; bc 0 1").unwrap()
}

// =============================================================================
// Max Strategy
// =============================================================================

#[test]
fn test_max_takes_highest_score() {
    let board = lopsided();
    let decision = MaxStrategy::new(42).decide(&board, &hand("rt gc"));

    let play = decision.as_play().unwrap();
    assert_eq!(board.play(play).unwrap().score(), 4);
}

#[test]
fn test_max_deterministic_with_seed() {
    let board = replay_script(&Board::new(Settings::default()), "rc 0 0").unwrap();
    let pieces = hand("rs rd bc");

    let choices: Vec<Decision> = (0..3)
        .map(|_| MaxStrategy::new(12345).decide(&board, &pieces))
        .collect();
    assert!(choices.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_max_from_forked_rng() {
    let mut table = GameRng::new(9);
    let mut first = MaxStrategy::with_rng(table.fork());
    let mut second = MaxStrategy::with_rng(table.fork());

    let board = Board::new(Settings::default());
    let pieces = hand("rc");
    // Only one play exists, so any RNG picks it
    assert_eq!(first.decide(&board, &pieces), second.decide(&board, &pieces));
}

// =============================================================================
// Harmony Strategy
// =============================================================================

#[test]
fn test_harmony_trades_points_for_balance() {
    let board = lopsided();
    let decision = HarmonyStrategy::new(1).decide(&board, &hand("rt gc"));

    assert_eq!(decision, Decision::Play(parse_play("gc 0 -1").unwrap()));
    let next = board.play(decision.as_play().unwrap()).unwrap();
    assert_eq!(next.score(), 3);
    assert_eq!(line_length_deviation(&next), 0.0);
}

#[test]
fn test_harmony_without_bias_plays_best() {
    let board = lopsided();
    let decision = HarmonyStrategy::new(0).decide(&board, &hand("rt gc"));

    assert_eq!(decision, Decision::Play(parse_play("rt -1 0").unwrap()));
}

#[test]
fn test_harmony_discards_when_nothing_scores() {
    let board = lopsided();
    let decision = HarmonyStrategy::new(3).decide(&board, &hand("gt yx"));
    assert!(!decision.is_play());
}

// =============================================================================
// Trait Objects
// =============================================================================

#[test]
fn test_strategies_share_a_table() {
    let board = lopsided();
    let pieces = hand("rt gc");
    let config = SearchConfig::unlimited();

    let mut seats: Vec<Box<dyn Strategy>> = vec![
        Box::new(MaxStrategy::new(1).with_search(config.clone())),
        Box::new(HarmonyStrategy::new(1).with_search(config)),
    ];

    let names: Vec<&str> = seats.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["max", "harmony"]);

    for seat in &mut seats {
        let decision = seat.decide(&board, &pieces);
        assert!(board.is_legal_play(decision.as_play().unwrap()));
    }
}
