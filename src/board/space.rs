//! Board spaces.

use serde::{Deserialize, Serialize};

use crate::core::Seat;

/// A space on the board.
///
/// Captures and stacking compare `Space` values directly; the text label
/// ("H", "R", "17", "B3", "E") only exists at the boundary via `Display`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Space {
    /// Home yard, "H".
    Home,
    /// Ready square, "R". Shared by every seat and never a capture target.
    Ready,
    /// Shared ring square, numbered 1..=56 in absolute terms.
    Ring(u8),
    /// Home column square 1..=6, labelled with `letter`.
    Column { letter: Seat, square: u8 },
    /// Finished, "E".
    Finished,
}

impl Space {
    /// Check if this is a home column square.
    #[must_use]
    pub const fn is_column(self) -> bool {
        matches!(self, Space::Column { .. })
    }

    /// Check if this is the home yard.
    #[must_use]
    pub const fn is_home(self) -> bool {
        matches!(self, Space::Home)
    }

    /// Check if a token landing here can capture.
    #[must_use]
    pub const fn is_capture_square(self) -> bool {
        !matches!(self, Space::Ready)
    }

    /// The board label.
    ///
    /// ```
    /// use ludo_sim::board::Space;
    /// use ludo_sim::core::Seat;
    ///
    /// assert_eq!(Space::Ring(17).label(), "17");
    /// assert_eq!(Space::Column { letter: Seat::B, square: 3 }.label(), "B3");
    /// ```
    #[must_use]
    pub fn label(self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Space {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Space::Home => write!(f, "H"),
            Space::Ready => write!(f, "R"),
            Space::Ring(square) => write!(f, "{square}"),
            Space::Column { letter, square } => write!(f, "{letter}{square}"),
            Space::Finished => write!(f, "E"),
        }
    }
}
