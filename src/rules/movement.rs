//! Token movement: bounce-back, stacking and capture.
//!
//! `advance` applies one roll to one seat. It does not decide which token
//! moves (see `priority::choose`) and it does not police the roll value;
//! a token leaving the home yard goes to the ready square whatever was
//! rolled.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Space;
use crate::core::{GameError, Player, Seat, StepCount, Token};

use super::seat_index;

/// An opposing token sent back to its home yard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// Seat that lost the token.
    pub seat: Seat,
    /// Token that went home.
    pub token: Token,
    /// Step count the token had before the capture.
    pub from: StepCount,
}

/// A move that was applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Tokens that moved: one, or both when stacked.
    pub tokens: SmallVec<[Token; 2]>,

    /// Step count before the move.
    pub from: StepCount,

    /// Step count after the move.
    pub to: StepCount,

    /// Space the token(s) landed on.
    pub landed: Space,

    /// The move left the player's tokens stacked.
    pub stacked: bool,

    /// Opposing tokens sent home by this move.
    /// SmallVec keeps the usual zero or one capture inline.
    pub captured: SmallVec<[Capture; 4]>,
}

/// Result of `advance`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The player had already finished; nothing changed.
    Skipped,
    /// Tokens moved.
    Moved(Move),
}

impl MoveOutcome {
    /// Get the applied move, if any.
    #[must_use]
    pub fn as_move(&self) -> Option<&Move> {
        match self {
            MoveOutcome::Moved(m) => Some(m),
            MoveOutcome::Skipped => None,
        }
    }

    /// Opposing tokens captured by this move.
    #[must_use]
    pub fn captured(&self) -> &[Capture] {
        match self {
            MoveOutcome::Moved(m) => m.captured.as_slice(),
            MoveOutcome::Skipped => &[],
        }
    }
}

/// Move `token` of `seat` by `roll` steps.
///
/// In order:
/// 1. A finished player does not move.
/// 2. Stacked tokens move together, ignoring `token`.
/// 3. Otherwise the selected token moves. From the home yard it goes to
///    the ready square; elsewhere it moves `roll` steps, bouncing back off
///    the finish, and stacks if it lands on its sibling.
/// 4. Opposing tokens on the landing space go home, unless the landing
///    space is the ready square.
///
/// Completion is recomputed for the mover and for every captured seat.
///
/// ```
/// use ludo_sim::board::Space;
/// use ludo_sim::core::{Player, Seat, StepCount, Token};
/// use ludo_sim::rules::advance;
///
/// let step = |n| StepCount::new(n).unwrap();
/// let mut players = vec![
///     Player::with_steps(Seat::A, step(14), StepCount::HOME),
///     Player::with_steps(Seat::B, step(1), StepCount::HOME),
/// ];
///
/// // A lands on square 15, where B's P token sits.
/// let outcome = advance(&mut players, Seat::A, Token::P, 1).unwrap();
/// assert_eq!(outcome.captured().len(), 1);
/// assert_eq!(players[1].space(Token::P), Space::Home);
/// ```
pub fn advance(
    players: &mut [Player],
    seat: Seat,
    token: Token,
    roll: u32,
) -> Result<MoveOutcome, GameError> {
    let mover = seat_index(players, seat)?;
    let player = &mut players[mover];

    if player.is_finished() {
        log::debug!("seat {seat} has finished; roll {roll} ignored");
        return Ok(MoveOutcome::Skipped);
    }

    let (tokens, from, to): (SmallVec<[Token; 2]>, _, _) = if player.is_stacked() {
        let from = player.step(Token::P);
        let to = from.bounced(roll);
        for t in Token::ALL {
            player.set_step(t, to);
        }
        (SmallVec::from_slice(&Token::ALL), from, to)
    } else {
        let from = player.step(token);
        let to = if from.is_home() {
            StepCount::READY
        } else {
            from.bounced(roll)
        };
        player.set_step(token, to);
        if !from.is_home() && player.space(token) == player.space(token.other()) {
            player.stack();
        }
        (SmallVec::from_slice(&[token]), from, to)
    };

    let landed = player.space_of(to);
    let stacked = player.is_stacked();
    player.mark_completed_if_done();
    log::debug!("seat {seat} moves {tokens:?} {from} -> {to} ({landed}) on roll {roll}");

    let mut captured = SmallVec::new();
    if landed.is_capture_square() {
        for (idx, other) in players.iter_mut().enumerate() {
            if idx == mover {
                continue;
            }
            for t in Token::ALL {
                if other.space(t) == landed {
                    let capture = Capture {
                        seat: other.seat(),
                        token: t,
                        from: other.step(t),
                    };
                    log::debug!("seat {seat} captures {}{} on {landed}", capture.seat, t);
                    other.send_home(t);
                    captured.push(capture);
                }
            }
            other.mark_completed_if_done();
        }
    }

    Ok(MoveOutcome::Moved(Move {
        tokens,
        from,
        to,
        landed,
        stacked,
        captured,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(n: i8) -> StepCount {
        StepCount::new(n).unwrap()
    }

    #[test]
    fn test_leaving_home_ignores_roll() {
        for roll in [1, 3, 6, 40] {
            let mut players = vec![Player::new(Seat::A)];
            advance(&mut players, Seat::A, Token::Q, roll).unwrap();
            assert_eq!(players[0].step(Token::Q), StepCount::READY);
            assert_eq!(players[0].space(Token::Q), Space::Ready);
            assert_eq!(players[0].step(Token::P), StepCount::HOME);
        }
    }

    #[test]
    fn test_plain_move() {
        let mut players = vec![Player::with_steps(Seat::B, step(3), StepCount::HOME)];
        let outcome = advance(&mut players, Seat::B, Token::P, 4).unwrap();

        let m = outcome.as_move().unwrap();
        assert_eq!(m.from, step(3));
        assert_eq!(m.to, step(7));
        assert_eq!(m.landed, Space::Ring(21));
        assert!(!m.stacked);
        assert!(m.captured.is_empty());
    }

    #[test]
    fn test_overshoot_bounces_back() {
        let mut players = vec![Player::with_steps(Seat::A, step(55), StepCount::HOME)];
        advance(&mut players, Seat::A, Token::P, 4).unwrap();
        assert_eq!(players[0].step(Token::P), step(55));
        assert_eq!(players[0].space(Token::P).label(), "A5");
    }

    #[test]
    fn test_landing_on_sibling_stacks() {
        let mut players = vec![Player::with_steps(Seat::C, step(4), step(7))];
        let outcome = advance(&mut players, Seat::C, Token::P, 3).unwrap();
        assert!(outcome.as_move().unwrap().stacked);
        assert!(players[0].is_stacked());
    }

    #[test]
    fn test_both_on_ready_do_not_stack() {
        let mut players = vec![Player::with_steps(Seat::A, StepCount::READY, StepCount::HOME)];
        advance(&mut players, Seat::A, Token::Q, 6).unwrap();
        assert_eq!(players[0].space(Token::Q), Space::Ready);
        assert!(!players[0].is_stacked());
    }

    #[test]
    fn test_stacked_tokens_move_together() {
        let mut players = vec![Player::with_steps(Seat::A, step(10), step(10))];
        let outcome = advance(&mut players, Seat::A, Token::Q, 5).unwrap();

        assert_eq!(outcome.as_move().unwrap().tokens.as_slice(), &Token::ALL);
        assert_eq!(players[0].step(Token::P), step(15));
        assert_eq!(players[0].step(Token::Q), step(15));
        assert!(players[0].is_stacked());
    }

    #[test]
    fn test_stacked_tokens_bounce_together() {
        let mut players = vec![Player::with_steps(Seat::D, step(54), step(54))];
        advance(&mut players, Seat::D, Token::P, 6).unwrap();
        assert_eq!(players[0].step(Token::P), step(54));
        assert_eq!(players[0].step(Token::Q), step(54));
    }

    #[test]
    fn test_finished_player_is_skipped() {
        let mut players = vec![Player::with_steps(Seat::A, StepCount::FINISH, StepCount::FINISH)];
        let before = players.clone();
        let outcome = advance(&mut players, Seat::A, Token::P, 3).unwrap();
        assert_eq!(outcome, MoveOutcome::Skipped);
        assert_eq!(players, before);
    }

    #[test]
    fn test_finishing_marks_completion() {
        let mut players = vec![Player::with_steps(Seat::B, step(54), StepCount::FINISH)];
        advance(&mut players, Seat::B, Token::P, 3).unwrap();
        assert!(players[0].is_finished());
    }

    #[test]
    fn test_capture_sends_opponent_home() {
        let mut players = vec![
            Player::with_steps(Seat::A, step(13), StepCount::HOME),
            Player::with_steps(Seat::B, step(1), step(6)),
        ];
        let outcome = advance(&mut players, Seat::A, Token::P, 2).unwrap();

        assert_eq!(
            outcome.captured(),
            &[Capture { seat: Seat::B, token: Token::P, from: step(1) }]
        );
        assert_eq!(players[1].step(Token::P), StepCount::HOME);
        assert_eq!(players[1].step(Token::Q), step(6));
    }

    #[test]
    fn test_capture_breaks_opponent_stack() {
        let mut players = vec![
            Player::with_steps(Seat::A, step(2), step(2)),
            Player::with_steps(Seat::D, step(15), StepCount::HOME),
        ];
        assert!(players[0].is_stacked());

        let outcome = advance(&mut players, Seat::D, Token::P, 1).unwrap();
        assert_eq!(outcome.captured().len(), 2);
        assert_eq!(players[0].space(Token::P), Space::Home);
        assert_eq!(players[0].space(Token::Q), Space::Home);
        assert!(!players[0].is_stacked());
    }

    #[test]
    fn test_ready_square_is_safe() {
        let mut players = vec![
            Player::with_steps(Seat::A, StepCount::READY, StepCount::HOME),
            Player::new(Seat::C),
        ];
        let outcome = advance(&mut players, Seat::C, Token::P, 6).unwrap();
        assert!(outcome.captured().is_empty());
        assert_eq!(players[0].space(Token::P), Space::Ready);
    }

    #[test]
    fn test_own_tokens_are_never_captured() {
        let mut players = vec![Player::with_steps(Seat::A, step(8), step(10))];
        advance(&mut players, Seat::A, Token::P, 2).unwrap();
        assert_eq!(players[0].step(Token::Q), step(10));
    }

    #[test]
    fn test_seat_d_column_collides_with_seat_c() {
        let mut players = vec![
            Player::with_steps(Seat::C, step(53), StepCount::HOME),
            Player::with_steps(Seat::D, step(50), StepCount::HOME),
        ];
        let outcome = advance(&mut players, Seat::D, Token::P, 3).unwrap();
        assert_eq!(outcome.as_move().unwrap().landed.label(), "C3");
        assert_eq!(players[0].space(Token::P), Space::Home);
    }

    #[test]
    fn test_unknown_seat() {
        let mut players = vec![Player::new(Seat::A)];
        assert_eq!(
            advance(&mut players, Seat::B, Token::P, 6),
            Err(GameError::SeatNotFound(Seat::B))
        );
    }
}
