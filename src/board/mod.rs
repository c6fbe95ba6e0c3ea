//! Board topology: spaces and the per-seat step count tables.
//!
//! Pure lookups with no state. Every other module goes through
//! `space_for` to turn a step count into a comparable position.

pub mod space;
pub mod topology;

pub use space::Space;
pub use topology::{label_for, space_for, COLUMN_SQUARES, RING_SQUARES};
