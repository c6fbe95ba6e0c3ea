//! Property-based tests for the rule engine.
//!
//! Run with: cargo test --release property

use proptest::prelude::*;

use ludo_sim::board::Space;
use ludo_sim::core::{Player, Seat, StepCount, Token, Turn};
use ludo_sim::game::{run, Game};
use ludo_sim::rules::{advance, decide, MoveOutcome, PriorityRule};

fn seat() -> impl Strategy<Value = Seat> {
    (0usize..4).prop_map(|i| Seat::ALL[i])
}

fn token() -> impl Strategy<Value = Token> {
    prop_oneof![Just(Token::P), Just(Token::Q)]
}

fn step() -> impl Strategy<Value = StepCount> {
    (-1i8..=57).prop_map(|n| StepCount::new(n).unwrap())
}

/// All four seats with arbitrary token placements.
fn table() -> impl Strategy<Value = Vec<Player>> {
    prop::collection::vec((step(), step()), 4).prop_map(|steps| {
        Seat::ALL
            .iter()
            .zip(steps)
            .map(|(&seat, (p, q))| Player::with_steps(seat, p, q))
            .collect()
    })
}

fn turn_list(max_len: usize) -> impl Strategy<Value = Vec<Turn>> {
    prop::collection::vec((seat(), 1i32..=6).prop_map(Turn::from), 0..max_len)
}

/// Stacked exactly when both tokens share a space other than the home yard
/// and the ready square. Tokens leaving the yard never stack, so a shared
/// ready square is the one unstacked pairing.
fn assert_stacking_consistent(player: &Player) -> Result<(), TestCaseError> {
    let (p, q) = (player.space(Token::P), player.space(Token::Q));
    let shared = p == q && !p.is_home() && p != Space::Ready;
    prop_assert_eq!(player.is_stacked(), shared);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { max_global_rejects: 4096, ..ProptestConfig::with_cases(2000) })]

    /// An overshoot reflects off 57 and stays on the track.
    #[test]
    fn prop_bounce_symmetry(count in 51i8..=57, roll in 1u32..=6, seat in seat()) {
        let raw = i64::from(count) + i64::from(roll);
        prop_assume!(raw > 57);

        let start = StepCount::new(count).unwrap();
        let mut players = vec![Player::with_steps(seat, start, StepCount::HOME)];
        advance(&mut players, seat, Token::P, roll).unwrap();

        let landed = i64::from(players[0].step(Token::P).get());
        prop_assert_eq!(landed, 57 - (raw - 57));
        prop_assert!((1..=57).contains(&landed));
    }

    /// Leaving the home yard always lands on the ready square.
    #[test]
    fn prop_exit_from_home(roll in 1u32..10_000, seat in seat(), token in token()) {
        let mut players = vec![Player::new(seat)];
        advance(&mut players, seat, token, roll).unwrap();
        prop_assert_eq!(players[0].step(token), StepCount::READY);
        prop_assert_eq!(players[0].space(token), Space::Ready);
    }

    /// After a move no other seat shares the landing square, unless it is
    /// the ready square.
    #[test]
    fn prop_capture_exclusivity(
        mut players in table(),
        mover in seat(),
        token in token(),
        roll in 1u32..=6,
    ) {
        let outcome = advance(&mut players, mover, token, roll).unwrap();
        if let MoveOutcome::Moved(m) = outcome {
            if m.landed != Space::Ready {
                for other in players.iter().filter(|p| p.seat() != mover) {
                    prop_assert!(!other.occupies(m.landed));
                }
            }
            for capture in &m.captured {
                prop_assert_ne!(capture.seat, mover);
            }
        }
    }

    /// The stacking flag matches the token spaces after every turn, and a
    /// capture of a stacked pair unstacks it.
    #[test]
    fn prop_stacking_consistency(turns in turn_list(300)) {
        let mut game = Game::new(&Seat::ALL);
        for turn in turns {
            let record = game.play_turn(turn).unwrap();
            for player in game.players() {
                assert_stacking_consistent(player)?;
            }
            for capture in record.outcome.captured() {
                let victim = game.player(capture.seat).unwrap();
                prop_assert!(!victim.is_stacked());
                prop_assert!(victim.space(capture.token).is_home());
            }
        }
    }

    /// A finished player never moves again.
    #[test]
    fn prop_finish_monotonicity(
        mut players in table(),
        seat in seat(),
        token in token(),
        roll in 1u32..=6,
    ) {
        let idx = seat.index();
        players[idx] = Player::with_steps(seat, StepCount::FINISH, StepCount::FINISH);
        let before = players[idx].clone();

        let outcome = advance(&mut players, seat, token, roll).unwrap();
        prop_assert_eq!(outcome, MoveOutcome::Skipped);
        prop_assert_eq!(&players[idx], &before);
    }

    /// Completion always matches the step counts after a turn.
    #[test]
    fn prop_completion_tracks_counts(turns in turn_list(300)) {
        let mut game = Game::new(&Seat::ALL);
        for turn in turns {
            game.play_turn(turn).unwrap();
            for player in game.players() {
                let done = Token::ALL.iter().all(|&t| player.step(t) == StepCount::FINISH);
                prop_assert_eq!(player.is_finished(), done);
            }
        }
    }

    /// Replaying the same input gives the same board.
    #[test]
    fn prop_run_is_deterministic(turns in turn_list(200)) {
        let first = run(&Seat::ALL, &turns).unwrap();
        let second = run(&Seat::ALL, &turns).unwrap();
        prop_assert_eq!(first.len(), 8);
        prop_assert_eq!(first, second);
    }

    /// An exact finish from the home column wins over any capture.
    #[test]
    fn prop_exact_finish_beats_capture(p_count in 51i8..=56, q_count in 1i8..=40) {
        let roll = (57 - p_count) as u32;
        let p = StepCount::new(p_count).unwrap();
        let q = StepCount::new(q_count).unwrap();
        let a = Player::with_steps(Seat::A, p, q);

        // Park an opposing token where A's Q would land.
        let target = Space::Ring((q_count + roll as i8) as u8);
        let (seat, count) = [Seat::B, Seat::C, Seat::D]
            .into_iter()
            .flat_map(|s| (1..=50i8).map(move |n| (s, StepCount::new(n).unwrap())))
            .find(|&(s, n)| Player::new(s).space_of(n) == target)
            .unwrap();
        let opponent = Player::with_steps(seat, count, StepCount::HOME);

        let players = vec![a, opponent];
        let choice = decide(&players, Seat::A, roll).unwrap();
        prop_assert_eq!(choice.token, Token::P);
        prop_assert_eq!(choice.rule, PriorityRule::ExactFinish);
    }
}
