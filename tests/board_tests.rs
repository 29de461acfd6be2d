//! Board legality, scoring and history tests.

use proptest::prelude::*;
use rust_qwirkle::board::{forms_line, replay_script, Board};
use rust_qwirkle::core::{Color, EngineError, GameRng, Location, Piece, Placement, Play, Settings, Shape};
use rust_qwirkle::strategy::{Decision, MaxStrategy, Strategy};

fn piece(text: &str) -> Piece {
    Piece::from_abbreviation(text).unwrap()
}

fn at(text: &str, x: i32, y: i32) -> Placement {
    piece(text).at(Location::new(x, y))
}

fn board(script: &str) -> Board {
    replay_script(&Board::new(Settings::default()), script).unwrap()
}

/// Boards from a short self-play game: every snapshot, first to last.
fn self_play(seed: u64, turns: usize) -> Vec<Board> {
    let settings = Settings::default();
    let mut rng = GameRng::new(seed);
    let mut bag = settings.shuffled_deck(&mut rng);
    let mut strategy = MaxStrategy::with_rng(rng.fork());
    let hand_size = settings.hand_size();

    let mut hand: Vec<Piece> = bag.drain(..hand_size).collect();
    let mut boards = vec![Board::new(settings)];

    for _ in 0..turns {
        let current = boards.last().unwrap().clone();
        let used = match strategy.decide(&current, &hand) {
            Decision::Play(play) => {
                let next = current.play(&play).unwrap();
                boards.push(next);
                play.pieces().collect::<Vec<_>>()
            }
            Decision::Discard(pieces) => {
                bag.extend(pieces.iter().copied());
                pieces
            }
        };
        for piece in used {
            let index = hand.iter().position(|&p| p == piece).unwrap();
            hand.swap_remove(index);
        }
        let refill = (hand_size - hand.len()).min(bag.len());
        hand.extend(bag.drain(..refill));
        if hand.is_empty() {
            break;
        }
    }
    boards
}

// =============================================================================
// Placement Legality
// =============================================================================

#[test]
fn test_extend_single_tile_in_four_directions() {
    let board = board("rc 0 0");
    let rs = piece("rs");

    let legal = board.get_legal_placements(rs);
    let locations: Vec<Location> = legal.iter().map(|p| p.location).collect();
    assert_eq!(
        locations,
        vec![
            Location::new(-1, 0),
            Location::new(0, -1),
            Location::new(0, 1),
            Location::new(1, 0),
        ]
    );

    for placement in legal {
        let next = board.play(&Play::single(placement)).unwrap();
        assert_eq!(next.score(), 2);
    }
}

#[test]
fn test_completing_line_then_rejecting_repeat_color() {
    let board = board("rc 0 0, oc 1 0, yc 2 0, gc 3 0, bc 4 0");

    let sixth = at("pc", 5, 0);
    assert!(board.is_legal(sixth));
    let next = board.play(&Play::single(sixth)).unwrap();
    assert_eq!(next.score(), 6);
    assert_eq!(next.line_through(Location::new(0, 0), rust_qwirkle::Axis::Horizontal).unwrap().len(), 6);

    assert!(!next.is_legal(at("rc", 6, 0)));
    assert!(!next.is_legal(at("rc", -1, 0)));
}

#[test]
fn test_completion_bonus_added() {
    let settings = Settings::default().with_completion_bonus(6);
    let base = replay_script(&Board::new(settings), "rc 0 0, oc 1 0, yc 2 0, gc 3 0, bc 4 0").unwrap();
    let next = base.play(&Play::single(at("pc", 5, 0))).unwrap();
    assert_eq!(next.score(), 12);
}

#[test]
fn test_rejects_occupied_and_detached() {
    let board = board("rc 0 0");
    assert!(!board.is_legal(at("rs", 0, 0)));
    assert!(!board.is_legal(at("rs", 2, 0)));
    assert!(!board.is_legal(at("rs", 1, 1)));
}

#[test]
fn test_rejects_piece_outside_domain() {
    let board = Board::new(Settings::default());
    let white_circle = Piece::new(Color::White, Shape::Circle);
    assert!(!board.is_legal(white_circle.at(Location::ORIGIN)));
    assert!(board.get_legal_placements(white_circle).is_empty());
    assert_eq!(
        board.play(&Play::single(white_circle.at(Location::ORIGIN))).unwrap_err(),
        EngineError::PieceOutOfDomain(white_circle)
    );
}

#[test]
fn test_cross_line_must_also_accept() {
    // (1,1) extends the square column, so only a square of a new color fits
    let board = board("rc 0 0, rs 1 0; bs 1 -1");
    assert!(!board.is_legal(at("gd", 1, 1)));
    assert!(board.is_legal(at("gs", 1, 1)));
}

// =============================================================================
// Multi-Placement Legality
// =============================================================================

#[test]
fn test_multi_placement_must_be_colinear() {
    let board = board("rc 0 0");
    let bent: Play = [at("rs", 1, 0), at("rd", 0, 1)].into_iter().collect();
    assert!(!board.is_legal_play(&bent));
    assert!(matches!(board.play(&bent), Err(EngineError::IllegalPlay { .. })));
}

#[test]
fn test_multi_placement_gaps_filled_by_board() {
    let board = board("rc 0 0");
    let around: Play = [at("rs", -1, 0), at("rd", 1, 0)].into_iter().collect();
    assert!(board.is_legal_play(&around));
    assert_eq!(board.play(&around).unwrap().score(), 3);

    let gapped: Play = [at("rs", 1, 0), at("rd", 3, 0)].into_iter().collect();
    assert!(!board.is_legal_play(&gapped));
}

#[test]
fn test_multi_placement_order_independent() {
    // The far tile is only adjacent once the near one is down
    let board = board("rc 0 0");
    let play: Play = [at("rd", 2, 0), at("rs", 1, 0)].into_iter().collect();
    assert!(board.is_legal_play(&play));
}

#[test]
fn test_multi_placement_scores_both_axes() {
    let board = board("rc 0 0, rs 1 0");
    // bc under rc, bs under rs: new row (2) plus two new columns (2 each)
    let play: Play = [at("bc", 0, 1), at("bs", 1, 1)].into_iter().collect();
    assert_eq!(board.play(&play).unwrap().score(), 6);
}

#[test]
fn test_validate_play_reports_problems() {
    let board = board("rc 0 0");
    let rs = at("rs", 1, 0);
    assert_eq!(board.validate_play(&[rs, rs]), Err(EngineError::DuplicatePlacement(rs)));

    let clash = at("rd", 1, 0);
    assert_eq!(
        board.validate_play(&[rs, clash]),
        Err(EngineError::DuplicateLocation(Location::new(1, 0)))
    );

    let play = board.validate_play(&[rs, at("rd", 2, 0)]).unwrap();
    assert_eq!(play.len(), 2);
}

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn test_first_play_scores_one() {
    let board = Board::new(Settings::default());
    let next = board.play(&Play::single(at("rc", 0, 0))).unwrap();
    assert_eq!(next.score(), 1);
}

#[test]
fn test_empty_play_is_a_pass() {
    let board = board("rc 0 0");
    let next = board.play(&Play::empty()).unwrap();
    assert_eq!(next.score(), 0);
    assert_eq!(next.len(), board.len());
    assert_eq!(next.turn(), board.turn() + 1);
}

// =============================================================================
// History
// =============================================================================

#[test]
fn test_undo_chain() {
    let board = board("rc 0 0; rs 1 0; rd 2 0");
    assert_eq!(board.turn(), 3);

    let lengths: Vec<usize> = board.history().map(Board::len).collect();
    assert_eq!(lengths, vec![3, 2, 1, 0]);

    let previous = board.previous().unwrap();
    assert_eq!(previous.last_play(), &Play::single(at("rs", 1, 0)));
    assert!(previous.get(Location::new(2, 0)).is_none());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    /// A lone first tile of any piece in the game scores exactly 1.
    #[test]
    fn first_play_scores_one(color in 0usize..6, shape in 0usize..6) {
        let settings = Settings::default();
        let piece = Piece::new(settings.colors[color], settings.shapes[shape]);
        let board = Board::new(settings);

        let placements = board.get_legal_placements(piece);
        prop_assert_eq!(placements.clone(), vec![piece.at(Location::ORIGIN)]);
        let next = board.play(&Play::single(placements[0])).unwrap();
        prop_assert_eq!(next.score(), 1);
    }

    /// Once played, a cell accepts nothing else.
    #[test]
    fn played_cells_are_closed(seed in any::<u64>()) {
        let boards = self_play(seed, 6);
        let last = boards.last().unwrap();
        for placement in last.placements() {
            for candidate in last.settings().pieces() {
                prop_assert!(!last.is_legal(candidate.at(placement.location)));
            }
        }
    }

    /// Every committed board remembers what produced it and what came before.
    #[test]
    fn history_round_trips(seed in any::<u64>()) {
        let boards = self_play(seed, 6);
        for pair in boards.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            prop_assert_eq!(after.previous().unwrap().len(), before.len());
            let replayed = before.play(after.last_play()).unwrap();
            prop_assert_eq!(replayed.score(), after.score());
            prop_assert_eq!(replayed.len(), after.len());
        }
    }

    /// Queries do not change the board.
    #[test]
    fn queries_are_idempotent(seed in any::<u64>()) {
        let boards = self_play(seed, 4);
        let last = boards.last().unwrap();
        for piece in last.settings().pieces() {
            prop_assert_eq!(last.get_legal_placements(piece), last.get_legal_placements(piece));
        }
        prop_assert_eq!(last.lines().to_vec(), last.lines().to_vec());
    }

    /// Lines on a played board never break the line rule or the domain cap.
    #[test]
    fn lines_obey_domain(seed in any::<u64>()) {
        let boards = self_play(seed, 6);
        for board in &boards {
            for line in board.lines() {
                let pieces: Vec<Piece> = line.pieces().collect();
                prop_assert!(forms_line(&pieces, board.settings()));
                if let Some(shared) = line.shared() {
                    prop_assert!(line.len() <= board.settings().max_line_len(shared));
                }
            }
        }
    }
}

// =============================================================================
// Playable Area
// =============================================================================

#[test]
fn test_rejects_cells_outside_playable_area() {
    let far = at("rc", i32::MAX, 0);
    let empty = Board::new(Settings::default());
    assert!(!empty.is_legal(far));
    assert!(!empty.is_legal_play(&Play::single(far)));
    assert_eq!(
        empty.play(&Play::single(far)).unwrap_err(),
        EngineError::OutOfRange(far.location)
    );
    assert_eq!(empty.validate_play(&[far]), Err(EngineError::OutOfRange(far.location)));

    let err = replay_script(&empty, "rc 2147483647 0").unwrap_err();
    assert_eq!(
        err,
        rust_qwirkle::NotationError::Rejected {
            turn: 1,
            source: EngineError::OutOfRange(far.location)
        }
    );
}

#[test]
fn test_play_at_edge_of_playable_area() {
    let edge = Location::LIMIT;
    let board = board(&format!("rc {edge} {edge}"));

    let legal = board.get_legal_placements(piece("rs"));
    assert_eq!(legal.len(), 2);
    assert!(legal.iter().all(|p| p.location.in_range()));

    let next = board.play(&Play::single(legal[0])).unwrap();
    assert_eq!(next.score(), 2);
    assert_eq!(next.lines().iter().filter(|line| line.len() == 2).count(), 1);
}
