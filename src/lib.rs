//! # ludo-sim
//!
//! A deterministic rules engine for a four-seat, two-token Ludo variant.
//! Given the seats in play and a fixed list of dice rolls, it replays the
//! game and reports where every token ends up.
//!
//! ## Rules in brief
//!
//! - Tokens start in the home yard ("H") and enter on the ready square
//!   ("R"), which is safe for everyone.
//! - Each seat walks 50 squares of a shared 56-square ring from its own
//!   offset, then six squares of a private home column, then finishes ("E").
//! - Overshooting the finish bounces the token back by the excess.
//! - Landing on an opposing token sends it home; landing on your own
//!   other token stacks the pair, and from then on they move together.
//! - Which token takes a roll is decided by a fixed list of priority rules.
//!
//! ## Modules
//!
//! - `core`: Seats, tokens, step counts, players, turns, config, errors
//! - `board`: Spaces and the per-seat step count tables
//! - `rules`: Priority resolution and token movement
//! - `game`: The driver that replays a turn list
//!
//! ## Example
//!
//! ```
//! use ludo_sim::{run_labels, turns_from_pairs, Seat};
//!
//! let turns = turns_from_pairs(&[('A', 6), ('A', 4), ('B', 6), ('B', 2)]).unwrap();
//! let labels = run_labels(&[Seat::A, Seat::B], &turns).unwrap();
//! assert_eq!(labels, vec!["4", "H", "16", "H"]);
//! ```

pub mod board;
pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    turns_from_pairs, Completion, GameConfig, GameError, Player, Seat, Stacking, StepCount, Token,
    Turn,
};

pub use crate::board::{space_for, Space};

pub use crate::rules::{advance, choose, Capture, Choice, MoveOutcome, PriorityRule};

pub use crate::game::{run, run_labels, run_with_config, Game, Report, TurnRecord};
