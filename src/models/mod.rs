//! Core data models for the league archive.

mod ids;
mod league;
mod matchup;
mod records;
mod rivalry;
mod snapshot;
mod stats;
mod value;
mod views;

pub use ids::*;
pub use league::*;
pub use matchup::*;
pub use records::*;
pub use rivalry::*;
pub use snapshot::*;
pub use stats::*;
pub use value::*;
pub use views::*;
