//! Token step counts.
//!
//! A step count is how far a token has travelled from its home yard:
//!
//! | Count    | Meaning                         |
//! |----------|---------------------------------|
//! | `-1`     | home yard                       |
//! | `0`      | ready square                    |
//! | `1..=50` | shared ring                     |
//! | `51..=56`| the seat's private home column  |
//! | `57`     | finished                        |
//!
//! `StepCount` can only hold values in that range, so every board lookup
//! is total.

use serde::{Deserialize, Serialize};

/// A validated step count in `-1..=57`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub struct StepCount(i8);

impl StepCount {
    /// Token is still in the home yard.
    pub const HOME: StepCount = StepCount(-1);

    /// Token sits on the ready square.
    pub const READY: StepCount = StepCount(0);

    /// Last step on the shared ring.
    pub const RING_END: StepCount = StepCount(50);

    /// Token has reached the end.
    pub const FINISH: StepCount = StepCount(57);

    /// Create a step count, or `None` if out of range.
    #[must_use]
    pub const fn new(steps: i8) -> Option<Self> {
        if steps >= Self::HOME.0 && steps <= Self::FINISH.0 {
            Some(Self(steps))
        } else {
            None
        }
    }

    /// Get the raw count.
    #[must_use]
    pub const fn get(self) -> i8 {
        self.0
    }

    /// Check if the token is in the home yard.
    #[must_use]
    pub const fn is_home(self) -> bool {
        self.0 == Self::HOME.0
    }

    /// Check if the token has finished.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        self.0 == Self::FINISH.0
    }

    /// Raw count after `roll` more steps, without any bounce.
    #[must_use]
    pub fn plus(self, roll: u32) -> i64 {
        i64::from(self.0) + i64::from(roll)
    }

    /// Count after `roll` steps if the token would not pass the finish.
    ///
    /// ```
    /// use ludo_sim::core::StepCount;
    ///
    /// let near = StepCount::new(54).unwrap();
    /// assert_eq!(near.within_finish(3), Some(StepCount::FINISH));
    /// assert_eq!(near.within_finish(4), None);
    /// ```
    #[must_use]
    pub fn within_finish(self, roll: u32) -> Option<StepCount> {
        let raw = self.plus(roll);
        if raw <= i64::from(Self::FINISH.0) {
            i8::try_from(raw).ok().and_then(StepCount::new)
        } else {
            None
        }
    }

    /// Count after moving `roll` steps along the track.
    ///
    /// A token that overshoots the finish bounces back by the excess:
    /// 55 + 4 lands on 55, 53 + 6 lands on 55. Rolls large enough to
    /// bounce past the ready square fold back again, keeping the result
    /// on the track.
    #[must_use]
    pub fn bounced(self, roll: u32) -> StepCount {
        let finish = i64::from(Self::FINISH.0);
        // Reflecting off 57 and 0 repeats every 114 steps.
        let folded = self.plus(roll).rem_euclid(2 * finish);
        let landed = if folded > finish {
            2 * finish - folded
        } else {
            folded
        };
        // landed is within 0..=57 here
        StepCount(landed as i8)
    }
}

impl TryFrom<i8> for StepCount {
    type Error = String;

    fn try_from(steps: i8) -> Result<Self, Self::Error> {
        StepCount::new(steps).ok_or_else(|| format!("step count {steps} outside -1..=57"))
    }
}

impl From<StepCount> for i8 {
    fn from(step: StepCount) -> Self {
        step.0
    }
}

impl std::fmt::Display for StepCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
