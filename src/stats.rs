//! Stats module for parsing number lists and computing summary statistics
//!
//! The statistics result is the only piece of state derived on demand: it is
//! recomputed when the calculate action fires and rendered as plain text for
//! the `stats_output` slot.

mod parser;
mod stats_state;
mod summary;
mod types;

// Re-export public types
pub use parser::{NumberParser, ParseError};
pub use stats_state::{STATS_PROMPT, StatsState};
pub use summary::summarize;
pub use types::{StatValue, StatsRecord, StatsResult, StatsSource};
