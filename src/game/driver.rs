//! The game driver: seats, turn replay and reporting.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Space;
use crate::core::{GameConfig, GameError, Player, Seat, Token, Turn};
use crate::rules::{advance, decide, seat_index};

use super::record::{Report, TurnRecord};

/// A single playthrough.
///
/// Owns one `Player` per seat, in the order the seats were first named.
/// Seats are fixed at construction; the rule engine borrows the players
/// for each turn.
///
/// Deserializing checks what the constructors guarantee: a valid config,
/// one player per seat, and a history that matches the turn count.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "GameRepr", into = "GameRepr")]
pub struct Game {
    config: GameConfig,

    /// At most one player per seat.
    players: SmallVec<[Player; 4]>,

    /// Turns applied so far.
    turns_played: usize,

    /// Applied turns, when `config.record_history` is set.
    history: Vec<TurnRecord>,
}

#[derive(Serialize, Deserialize)]
struct GameRepr {
    config: GameConfig,
    players: SmallVec<[Player; 4]>,
    turns_played: usize,
    history: Vec<TurnRecord>,
}

impl From<Game> for GameRepr {
    fn from(game: Game) -> Self {
        Self {
            config: game.config,
            players: game.players,
            turns_played: game.turns_played,
            history: game.history,
        }
    }
}

impl TryFrom<GameRepr> for Game {
    type Error = GameError;

    fn try_from(repr: GameRepr) -> Result<Self, Self::Error> {
        let seats: Vec<Seat> = repr.players.iter().map(Player::seat).collect();
        let mut game = Self::with_config(&seats, repr.config)?;
        if game.players.len() != repr.players.len() {
            return Err(GameError::InvalidState(format!(
                "seat named more than once in {seats:?}"
            )));
        }
        let expected = if game.config.record_history {
            repr.turns_played
        } else {
            0
        };
        if repr.history.len() != expected {
            return Err(GameError::InvalidState(format!(
                "{} history records for {} turns played",
                repr.history.len(),
                repr.turns_played
            )));
        }
        game.players = repr.players;
        game.turns_played = repr.turns_played;
        game.history = repr.history;
        Ok(game)
    }
}

impl Game {
    /// Create a game for `seats` with the default configuration.
    ///
    /// A seat named twice is only seated once, at its first position.
    #[must_use]
    pub fn new(seats: &[Seat]) -> Self {
        Self::seated(seats, GameConfig::default())
    }

    /// Create a game with a custom configuration.
    pub fn with_config(seats: &[Seat], config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::seated(seats, config))
    }

    fn seated(seats: &[Seat], config: GameConfig) -> Self {
        let mut players: SmallVec<[Player; 4]> = SmallVec::new();
        for &seat in seats {
            if players.iter().any(|p| p.seat() == seat) {
                log::warn!("seat {seat} named more than once; keeping the first");
                continue;
            }
            players.push(Player::new(seat));
        }
        Self {
            config,
            players,
            turns_played: 0,
            history: Vec::new(),
        }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// All players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Get the player at `seat`, or `None` if that seat is not playing.
    #[must_use]
    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players.iter().find(|p| p.seat() == seat)
    }

    /// Seats in play order.
    pub fn seats(&self) -> impl Iterator<Item = Seat> + '_ {
        self.players.iter().map(Player::seat)
    }

    /// Number of turns applied.
    #[must_use]
    pub fn turns_played(&self) -> usize {
        self.turns_played
    }

    /// Recorded turns (empty when history is disabled).
    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Check a turn against this game, returning the validated roll.
    ///
    /// `index` is only used for error reporting.
    pub fn check_turn(&self, index: usize, turn: Turn) -> Result<u32, GameError> {
        if self.player(turn.seat).is_none() {
            return Err(GameError::UnknownSeat {
                seat: turn.seat,
                turn: index,
            });
        }
        let roll = u32::try_from(turn.roll)
            .ok()
            .filter(|&r| r > 0)
            .ok_or(GameError::NonPositiveRoll {
                roll: turn.roll,
                turn: index,
            })?;
        if let Some(max) = self.config.max_roll {
            if roll > max {
                return Err(GameError::RollTooHigh {
                    roll: turn.roll,
                    max,
                    turn: index,
                });
            }
        }
        Ok(roll)
    }

    /// Check every turn without applying any.
    pub fn validate(&self, turns: &[Turn]) -> Result<(), GameError> {
        for (offset, &turn) in turns.iter().enumerate() {
            self.check_turn(self.turns_played + offset, turn)?;
        }
        Ok(())
    }

    /// Apply a single turn.
    ///
    /// The turn is checked first; on error nothing changes.
    pub fn play_turn(&mut self, turn: Turn) -> Result<TurnRecord, GameError> {
        let roll = self.check_turn(self.turns_played, turn)?;
        self.apply(turn.seat, roll)
    }

    /// Apply a list of turns in order.
    ///
    /// The whole list is checked before the first turn is applied, so an
    /// invalid entry anywhere leaves the game untouched.
    pub fn play(&mut self, turns: &[Turn]) -> Result<(), GameError> {
        self.validate(turns)?;
        log::info!(
            "playing {} turns for seats {:?}",
            turns.len(),
            self.seats().collect::<Vec<_>>()
        );
        for &turn in turns {
            self.play_turn(turn)?;
        }
        log::info!(
            "finished after {} turns; finished seats {:?}",
            self.turns_played,
            self.finished_seats()
        );
        Ok(())
    }

    fn apply(&mut self, seat: Seat, roll: u32) -> Result<TurnRecord, GameError> {
        let mover = seat_index(&self.players, seat)?;
        self.players[mover].mark_completed_if_done();

        let choice = decide(&self.players, seat, roll)?;
        let outcome = advance(&mut self.players, seat, choice.token, roll)?;

        // Captures can change any seat's counts.
        for player in &mut self.players {
            player.mark_completed_if_done();
        }

        let record = TurnRecord {
            index: self.turns_played,
            seat,
            roll,
            choice,
            outcome,
        };
        self.turns_played += 1;
        if self.config.record_history {
            self.history.push(record.clone());
        }
        Ok(record)
    }

    /// Current token spaces, (P, Q) per seat in seat order.
    #[must_use]
    pub fn board(&self) -> Vec<Space> {
        self.players
            .iter()
            .flat_map(|p| Token::ALL.map(|t| p.space(t)))
            .collect()
    }

    /// Current token labels, (P, Q) per seat in seat order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.board().into_iter().map(Space::label).collect()
    }

    /// Seats with both tokens finished.
    #[must_use]
    pub fn finished_seats(&self) -> Vec<Seat> {
        self.players
            .iter()
            .filter(|p| p.is_finished())
            .map(Player::seat)
            .collect()
    }

    /// Check if every seat has finished.
    #[must_use]
    pub fn is_over(&self) -> bool {
        !self.players.is_empty() && self.players.iter().all(Player::is_finished)
    }

    /// Snapshot of the current positions.
    #[must_use]
    pub fn report(&self) -> Report {
        Report {
            seats: self.seats().collect(),
            spaces: self.board(),
            labels: self.labels(),
            finished: self.finished_seats(),
            turns_played: self.turns_played,
        }
    }
}

/// Play `turns` for `seats` and return every token's final space.
///
/// Spaces are listed (P, Q) per seat, seats in the order given.
///
/// ```
/// use ludo_sim::board::Space;
/// use ludo_sim::core::{Seat, Turn};
/// use ludo_sim::game::run;
///
/// let turns = [Turn::new(Seat::A, 6), Turn::new(Seat::A, 5)];
/// let spaces = run(&[Seat::A], &turns).unwrap();
/// assert_eq!(spaces, vec![Space::Ring(5), Space::Home]);
/// ```
pub fn run(seats: &[Seat], turns: &[Turn]) -> Result<Vec<Space>, GameError> {
    let mut game = Game::new(seats);
    game.play(turns)?;
    Ok(game.board())
}

/// Same as `run`, with board labels.
pub fn run_labels(seats: &[Seat], turns: &[Turn]) -> Result<Vec<String>, GameError> {
    let mut game = Game::new(seats);
    game.play(turns)?;
    Ok(game.labels())
}

/// Play `turns` under `config` and return the full report.
pub fn run_with_config(
    seats: &[Seat],
    turns: &[Turn],
    config: GameConfig,
) -> Result<Report, GameError> {
    let mut game = Game::with_config(seats, config)?;
    game.play(turns)?;
    Ok(game.report())
}
