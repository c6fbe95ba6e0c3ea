//! Move priority: which of a seat's two tokens takes the roll.
//!
//! The rules are checked in a fixed order and the first one that applies
//! decides:
//!
//! 1. `Finished`: a finished player answers P (the move is a no-op).
//! 2. `OnlyTokenOut`: one token out of the yard, one in, roll not a 6:
//!    the token that is out.
//! 3. `SixLeavesHome`: a 6 brings a yard token out, P first.
//! 4. `ExactFinish`: a token in its home column that reaches the finish
//!    exactly. P is tested first; Q is only tested when P is not in a
//!    home column at all.
//! 5. `Capture`: exactly one token's landing space holds an opposing token.
//! 6. `Trailing`: the token with the lower step count, ties to P.

use serde::{Deserialize, Serialize};

use crate::board::Space;
use crate::core::{GameError, Player, Seat, StepCount, Token};

use super::seat_index;

/// The rule that produced a choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriorityRule {
    Finished,
    OnlyTokenOut,
    SixLeavesHome,
    ExactFinish,
    Capture,
    Trailing,
}

/// A resolved token choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Token to move.
    pub token: Token,
    /// Rule that picked it.
    pub rule: PriorityRule,
}

impl Choice {
    const fn new(token: Token, rule: PriorityRule) -> Self {
        Self { token, rule }
    }
}

/// Roll that lets a token leave the home yard by priority.
pub const SIX: u32 = 6;

/// Pick the token `seat` should move for `roll`.
///
/// ```
/// use ludo_sim::core::{Player, Seat, Token};
/// use ludo_sim::rules::choose;
///
/// let players = vec![Player::new(Seat::A)];
/// assert_eq!(choose(&players, Seat::A, 6).unwrap(), Token::P);
/// ```
pub fn choose(players: &[Player], seat: Seat, roll: u32) -> Result<Token, GameError> {
    decide(players, seat, roll).map(|choice| choice.token)
}

/// Pick the token `seat` should move for `roll`, along with the deciding rule.
pub fn decide(players: &[Player], seat: Seat, roll: u32) -> Result<Choice, GameError> {
    let mover = seat_index(players, seat)?;
    let player = &players[mover];
    let choice = resolve(players, mover, player, roll);
    log::debug!(
        "seat {seat} rolls {roll}: {} by {:?}",
        choice.token,
        choice.rule
    );
    Ok(choice)
}

fn resolve(players: &[Player], mover: usize, player: &Player, roll: u32) -> Choice {
    use PriorityRule::*;

    if player.is_finished() {
        return Choice::new(Token::P, Finished);
    }

    let p_home = player.space(Token::P).is_home();
    let q_home = player.space(Token::Q).is_home();

    if roll != SIX {
        if !p_home && q_home {
            return Choice::new(Token::P, OnlyTokenOut);
        }
        if !q_home && p_home {
            return Choice::new(Token::Q, OnlyTokenOut);
        }
    }

    if roll == SIX {
        if p_home {
            return Choice::new(Token::P, SixLeavesHome);
        }
        if q_home {
            return Choice::new(Token::Q, SixLeavesHome);
        }
    }

    if let Some(token) = exact_finish(player, roll) {
        return Choice::new(token, ExactFinish);
    }

    log::trace!("seat {} rolls {roll}: no exact finish", player.seat());

    let p_captures = threatens(players, mover, player, Token::P, roll);
    let q_captures = threatens(players, mover, player, Token::Q, roll);
    match (p_captures, q_captures) {
        (true, false) => return Choice::new(Token::P, Capture),
        (false, true) => return Choice::new(Token::Q, Capture),
        _ => log::trace!("seat {} rolls {roll}: no single capture", player.seat()),
    }

    if player.step(Token::P) <= player.step(Token::Q) {
        Choice::new(Token::P, Trailing)
    } else {
        Choice::new(Token::Q, Trailing)
    }
}

/// Rule 4. Q is only considered when P is outside every home column.
fn exact_finish(player: &Player, roll: u32) -> Option<Token> {
    let reaches = |token: Token| player.step(token).plus(roll) == i64::from(StepCount::FINISH.get());

    if player.space(Token::P).is_column() {
        reaches(Token::P).then_some(Token::P)
    } else if player.space(Token::Q).is_column() {
        reaches(Token::Q).then_some(Token::Q)
    } else {
        None
    }
}

/// Space `token` would land on after `roll`, if it stays within the finish.
///
/// This is plain `step + roll`; it does not apply the yard exit rule.
#[must_use]
pub fn prospective_space(player: &Player, token: Token, roll: u32) -> Option<Space> {
    player
        .step(token)
        .within_finish(roll)
        .map(|step| player.space_of(step))
}

/// Rule 5 test: does `token`'s landing space hold any opposing token?
fn threatens(players: &[Player], mover: usize, player: &Player, token: Token, roll: u32) -> bool {
    let Some(target) = prospective_space(player, token, roll) else {
        return false;
    };
    players
        .iter()
        .enumerate()
        .any(|(idx, other)| idx != mover && other.occupies(target))
}
