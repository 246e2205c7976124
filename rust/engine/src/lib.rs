//! # holdem-engine: No-Limit Hold'em Table Engine
//!
//! Game logic for a single no-limit Texas Hold'em table: one human seat
//! (seat 0) against a configurable number of scripted bots, with the human
//! bank persisted between hands through an injected store.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Seeded 52-card deck with Fisher-Yates shuffling
//! - [`hand`] - Best-of-seven hand evaluation and score comparison
//! - [`player`] - Seat state and player actions
//! - [`rules`] - Action validation into chip transfers
//! - [`game`] - Per-hand state, turn order and street settlement
//! - [`engine`] - Hand lifecycle, action submission and the bot turn loop
//! - [`showdown`] - Showdown evaluation and pot splitting
//! - [`policy`] - Decision seam for bot seats
//! - [`bankroll`] - Persistence seam for the human bank
//! - [`config`] - Table stakes and seating
//! - [`logger`] - Hand history records (JSONL)
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::Card;
//! use holdem_engine::hand::{evaluate_hand, Category};
//!
//! let cards: Vec<Card> = ["As", "Ks", "Qs", "Js", "10s", "2c", "3d"]
//!     .iter()
//!     .map(|c| c.parse().unwrap())
//!     .collect();
//!
//! let score = evaluate_hand(&cards).unwrap();
//! assert_eq!(score.category, Category::StraightFlush);
//! assert_eq!(score.values(), vec![8, 14]);
//! ```

pub mod bankroll;
pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod policy;
pub mod rules;
pub mod showdown;
