//! heads-up-holdem: a two-player Texas Hold'em engine
//!
//! Goals:
//! - A betting state machine that keeps every chip and every card accounted for
//! - A deterministic 7-card evaluator shared by both players
//! - No panics for invalid input; use `Result` for recoverable errors
//! - No rendering or sleeping in the core; front ends replay [`events::GameEvent`]s
//!
//! ## Quick start: compare two Hold'em hands
//! ```
//! use heads_up_holdem::evaluator::{compare_holdem, evaluate_holdem, Category};
//! use heads_up_holdem::hand::{Board, HoleCards};
//! use std::cmp::Ordering;
//!
//! let board: Board = "Qh Jh Th 9h 3c".parse().unwrap();
//! let royal: HoleCards = "Ah Kh".parse().unwrap();
//! let deuces: HoleCards = "2s 2d".parse().unwrap();
//!
//! assert_eq!(evaluate_holdem(&royal, &board).unwrap().category, Category::RoyalFlush);
//! assert_eq!(compare_holdem(&royal, &deuces, &board).unwrap(), Ordering::Greater);
//! ```
//!
//! ## Quick start: play a phase
//! ```
//! use heads_up_holdem::config::GameConfig;
//! use heads_up_holdem::game::{Game, Phase};
//!
//! let mut game = Game::new(GameConfig::default().with_seed(7)).unwrap();
//! let dealer = game.dealer();
//! game.call(dealer).unwrap();
//! game.check(1 - dealer).unwrap();
//! assert_eq!(game.phase(), Phase::Flop);
//! assert_eq!(game.community().len(), 3);
//! ```
//!
//! ## TUI
//! Run the hot-seat table with:
//! ```sh
//! cargo run --bin heads-up
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod events;
pub mod game;
pub mod hand;
pub mod player;
pub mod session;
pub mod showdown;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
