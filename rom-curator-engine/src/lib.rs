//! Decision engine for ROM collection curation.
//!
//! Takes the tagged records produced by `rom-curator-core`, groups them by
//! game identity, scores each candidate against user preferences, and
//! routes every record to exactly one destination: kept winner, regional
//! variant, prototype, hack, or duplicate. All functions here are pure and
//! synchronous over in-memory values; groups are independent, so callers
//! may process them in parallel if they wish.

pub mod classify;
pub mod error;
pub mod grouper;
pub mod pipeline;
pub mod preferences;
pub mod score;

pub use classify::{Classification, classify, has_preferred_language, has_preferred_region, should_ignore};
pub use error::EngineError;
pub use grouper::{GroupKey, IdentityGroup, group_records};
pub use pipeline::{CurationReport, GroupOutcome, RunStats, curate};
pub use preferences::Preferences;
pub use score::score;
