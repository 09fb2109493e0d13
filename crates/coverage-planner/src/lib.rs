//! Coverage search pattern generation
//!
//! Produces the ordered waypoint sequence for a systematic sweep of a square
//! search area: the four corners in sweep order followed by the area center.
//! Deliberately a fixed pattern rather than a general coverage solver - it
//! guarantees perimeter coverage plus a center pass with a predictable,
//! bounded waypoint count.

pub mod sweep;

pub use sweep::{plan, SweepParams, PATTERN_NAME};
