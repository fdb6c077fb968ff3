//! UDisc Ladder
//!
//! Season standings and handicaps for a small group of disc golfers, derived
//! from UDisc scorecard exports.
//!
//! This library provides:
//! - `scorecard`: Reading raw export rows from CSV
//! - `normalize`: Canonical names, timestamps and the full-round filter
//! - `season`: Floating Winter/Summer season calendar
//! - `rounds`, `ladder`, `handicap`, `players`: The four published projections
//! - `pipeline`: End-to-end build used by the binary
//!
//! Binaries:
//! - `build-data`: Regenerate the JSON documents from an export

pub mod handicap;
pub mod ladder;
pub mod normalize;
pub mod pipeline;
pub mod players;
pub mod roster;
pub mod rounds;
pub mod scorecard;
pub mod season;

pub use normalize::NormalizedRound;
pub use roster::{HandicapRules, Roster};
pub use scorecard::RawRow;
pub use season::{Season, SeasonType};
