//! Per-seat player state.
//!
//! ## Player
//!
//! A seat's two tokens plus the stacking and completion flags. Each token
//! keeps its step count and the space derived from it side by side; both
//! change together through `set_step`, so they can never disagree.
//!
//! Only the step counts are serialized. Spaces and the completion flag are
//! rebuilt on the way back in, and a stacking flag that does not match
//! the tokens (shared square past the ready square) is rejected.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::seat::{Seat, Token};
use super::step::StepCount;
use crate::board::{space_for, Space};

/// Whether a player's two tokens travel as one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stacking {
    #[default]
    NotStacked,
    Stacked,
}

/// Whether a player has brought both tokens home.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Completion {
    #[default]
    StillPlaying,
    Finished,
}

/// A token's step count and the space it maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenState {
    step: StepCount,
    space: Space,
}

impl TokenState {
    fn at(seat: Seat, step: StepCount) -> Self {
        Self {
            step,
            space: space_for(seat, step),
        }
    }

    /// Get the step count.
    #[must_use]
    pub const fn step(&self) -> StepCount {
        self.step
    }

    /// Get the current space.
    #[must_use]
    pub const fn space(&self) -> Space {
        self.space
    }
}

/// State for one seat.
///
/// ## Example
///
/// ```
/// use ludo_sim::board::Space;
/// use ludo_sim::core::{Player, Seat, Token};
///
/// let player = Player::new(Seat::B);
/// assert_eq!(player.space(Token::P), Space::Home);
/// assert!(!player.is_finished());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PlayerRepr", into = "PlayerRepr")]
pub struct Player {
    seat: Seat,
    tokens: [TokenState; 2],
    stacking: Stacking,
    completion: Completion,
}

/// Serialized form of a `Player`: step counts only.
#[derive(Serialize, Deserialize)]
struct PlayerRepr {
    seat: Seat,
    p: StepCount,
    q: StepCount,
    #[serde(default)]
    stacking: Stacking,
}

impl From<Player> for PlayerRepr {
    fn from(player: Player) -> Self {
        Self {
            seat: player.seat,
            p: player.step(Token::P),
            q: player.step(Token::Q),
            stacking: player.stacking,
        }
    }
}

impl TryFrom<PlayerRepr> for Player {
    type Error = GameError;

    fn try_from(repr: PlayerRepr) -> Result<Self, Self::Error> {
        let mut player = Self::new(repr.seat);
        player.set_step(Token::P, repr.p);
        player.set_step(Token::Q, repr.q);
        let shared = repr.p == repr.q && repr.p > StepCount::READY;
        let stacked = repr.stacking == Stacking::Stacked;
        if stacked != shared {
            return Err(GameError::InvalidState(format!(
                "seat {} has tokens at {} and {} but stacking is {:?}",
                repr.seat, repr.p, repr.q, repr.stacking
            )));
        }
        if stacked {
            player.stack();
        }
        player.mark_completed_if_done();
        Ok(player)
    }
}

impl Player {
    /// Create a player with both tokens in the home yard.
    #[must_use]
    pub fn new(seat: Seat) -> Self {
        let home = TokenState::at(seat, StepCount::HOME);
        Self {
            seat,
            tokens: [home, home],
            stacking: Stacking::NotStacked,
            completion: Completion::StillPlaying,
        }
    }

    /// Create a player with tokens already placed.
    ///
    /// Tokens sharing a space past the ready square start stacked, the
    /// same as if one had moved onto the other.
    #[must_use]
    pub fn with_steps(seat: Seat, p: StepCount, q: StepCount) -> Self {
        let mut player = Self::new(seat);
        player.set_step(Token::P, p);
        player.set_step(Token::Q, q);
        if p == q && p > StepCount::READY {
            player.stacking = Stacking::Stacked;
        }
        player.mark_completed_if_done();
        player
    }

    /// Get the player's seat.
    #[must_use]
    pub const fn seat(&self) -> Seat {
        self.seat
    }

    /// Get a token's step count.
    #[must_use]
    pub const fn step(&self, token: Token) -> StepCount {
        self.tokens[token.index()].step
    }

    /// Get a token's space.
    #[must_use]
    pub const fn space(&self, token: Token) -> Space {
        self.tokens[token.index()].space
    }

    /// Get a token's full state.
    #[must_use]
    pub const fn token(&self, token: Token) -> &TokenState {
        &self.tokens[token.index()]
    }

    /// The space this seat's tokens occupy at `steps`.
    #[must_use]
    pub const fn space_of(&self, steps: StepCount) -> Space {
        space_for(self.seat, steps)
    }

    /// Check if `space` holds either of this player's tokens.
    #[must_use]
    pub fn occupies(&self, space: Space) -> bool {
        Token::ALL.iter().any(|&t| self.space(t) == space)
    }

    /// Get the stacking flag.
    #[must_use]
    pub const fn stacking(&self) -> Stacking {
        self.stacking
    }

    /// Check if the tokens travel together.
    #[must_use]
    pub fn is_stacked(&self) -> bool {
        self.stacking == Stacking::Stacked
    }

    /// Get the completion flag.
    #[must_use]
    pub const fn completion(&self) -> Completion {
        self.completion
    }

    /// Check if both tokens have finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.completion == Completion::Finished
    }

    /// Move a token to `step`, updating its space in the same write.
    pub(crate) fn set_step(&mut self, token: Token, step: StepCount) {
        self.tokens[token.index()] = TokenState::at(self.seat, step);
    }

    /// Send a token back to the home yard. Breaks any stack.
    pub(crate) fn send_home(&mut self, token: Token) {
        self.set_step(token, StepCount::HOME);
        self.stacking = Stacking::NotStacked;
    }

    pub(crate) fn stack(&mut self) {
        self.stacking = Stacking::Stacked;
    }

    /// Recompute the completion flag from the step counts.
    ///
    /// Idempotent. Call after anything that changes a step count, including
    /// captures made on another seat's turn.
    pub fn mark_completed_if_done(&mut self) {
        self.completion = if Token::ALL.iter().all(|&t| self.step(t).is_finished()) {
            Completion::Finished
        } else {
            Completion::StillPlaying
        };
    }
}
