//! Game driver.
//!
//! `Game` seats the requested players, replays the turn list through the
//! priority rules and the movement engine, and reports where every token
//! ended up. `run` and `run_labels` wrap the whole thing in one call.

mod driver;
mod record;

pub use driver::{run, run_labels, run_with_config, Game};
pub use record::{Report, TurnRecord};
