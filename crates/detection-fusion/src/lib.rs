//! Multi-sensor detection fusion
//!
//! Takes the raw per-waypoint sensor output - zero or more visual events and
//! at most one audio cue - and normalizes it into [`VictimRecord`]s, deciding
//! at the same time whether the mission should abort systematic search in
//! favor of an immediate response.
//!
//! This layer only classifies already-collected data: it never calls a
//! sensor and never fails.

pub mod fusion;
pub mod records;

pub use fusion::{DetectionFusion, FusionConfig, FusionOutcome};
pub use records::{DetectionKind, VictimRecord};
