//! Move generation and ranking.
//!
//! ## Overview
//!
//! - `enumerator`: every maximal play a hand can make, by depth-first search
//!   with value-based deduplication of partial plays and an optional time
//!   budget
//! - `ranker`: scores candidate plays and orders them best first
//!
//! ## Usage
//!
//! ```rust
//! use rust_qwirkle::board::{replay_script, Board};
//! use rust_qwirkle::core::{Color, Piece, Settings, Shape};
//! use rust_qwirkle::search::{enumerate_moves, rank_plays, SearchConfig};
//!
//! let board = replay_script(&Board::new(Settings::default()), "rc 0 0").unwrap();
//! let hand = [Piece::new(Color::Red, Shape::Square)];
//!
//! let moves = enumerate_moves(&board, &hand, &SearchConfig::unlimited());
//! assert_eq!(moves.len(), 4);
//!
//! let ranked = rank_plays(&board, moves.into_plays());
//! assert_eq!(ranked.best_score(), 2);
//! ```
//!
//! ## Concurrency
//!
//! Boards are immutable and `Send + Sync`, so independent enumerations may
//! run on separate threads against the same board. Each enumeration is
//! single-threaded and owns its result set.

pub mod config;
pub mod enumerator;
pub mod ranker;
pub mod stats;

pub use config::SearchConfig;
pub use enumerator::{enumerate_moves, MoveEnumerator, MoveSet};
pub use ranker::{rank_plays, RankedPlay, RankedPlays};
pub use stats::SearchStats;
