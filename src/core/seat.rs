//! Seat and token identification.
//!
//! ## Seat
//!
//! One of the four board colors, A through D. A seat fixes where its tokens
//! enter the shared ring and which letter its home column carries.
//!
//! ## Token
//!
//! Every seat plays exactly two tokens, P and Q.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::GameError;

/// A seat at the board.
///
/// Seats are ordered A, B, C, D; `index()` gives the 0-based position used
/// by the board tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seat {
    A,
    B,
    C,
    D,
}

impl Seat {
    /// All four seats in board order.
    pub const ALL: [Seat; 4] = [Seat::A, Seat::B, Seat::C, Seat::D];

    /// Get the 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::A => 0,
            Seat::B => 1,
            Seat::C => 2,
            Seat::D => 3,
        }
    }

    /// The seat's letter as used in board labels.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Seat::A => 'A',
            Seat::B => 'B',
            Seat::C => 'C',
            Seat::D => 'D',
        }
    }

    /// Parse a seat from its letter. Lowercase is accepted.
    ///
    /// ```
    /// use ludo_sim::core::Seat;
    ///
    /// assert_eq!(Seat::from_letter('c'), Some(Seat::C));
    /// assert_eq!(Seat::from_letter('E'), None);
    /// ```
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Seat> {
        match letter.to_ascii_uppercase() {
            'A' => Some(Seat::A),
            'B' => Some(Seat::B),
            'C' => Some(Seat::C),
            'D' => Some(Seat::D),
            _ => None,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl TryFrom<char> for Seat {
    type Error = GameError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        Seat::from_letter(letter).ok_or_else(|| GameError::InvalidSeat(letter.to_string()))
    }
}

impl FromStr for Seat {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Seat::try_from(letter),
            _ => Err(GameError::InvalidSeat(s.to_string())),
        }
    }
}

/// One of a seat's two tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    P,
    Q,
}

impl Token {
    /// Both tokens, P first.
    pub const ALL: [Token; 2] = [Token::P, Token::Q];

    /// Index into a player's token array.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Token::P => 0,
            Token::Q => 1,
        }
    }

    /// The sibling token.
    #[must_use]
    pub const fn other(self) -> Token {
        match self {
            Token::P => Token::Q,
            Token::Q => Token::P,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::P => write!(f, "P"),
            Token::Q => write!(f, "Q"),
        }
    }
}
