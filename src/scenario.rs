//! Scenario level data: the uncompressed file header, player slots, and the
//! structured view of a decoded scenario.
//!
//! Decoding a scenario body (map tiles, unit records, trigger records) is the
//! job of the scenario editing library. This crate only consumes its output
//! through the [ScenarioHandle] trait. With the `json` feature, [ScenarioDump]
//! implements the trait over a JSON export of that library's decoded model.

mod handle;
mod header;
mod player;

pub use handle::*;
pub use header::*;
pub use player::*;
