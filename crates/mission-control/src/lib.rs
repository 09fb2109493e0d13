//! Search-and-rescue mission state machine
//!
//! Owns the full mission lifecycle: connect and arm, takeoff, systematic
//! coverage search with per-waypoint sensing and fusion, rescue-mode abort
//! on a close-range audio cue, return to base, and the guaranteed
//! land-then-disarm sequence before the final report.
//!
//! The mission only talks to its collaborators through the capability
//! traits (`FlightLink`, `VisionDetector`, `ProximitySensor`), so the whole
//! state machine runs against simulated adapters in tests and demos.

pub mod config;
pub mod mission;
pub mod phase;
pub mod report;

pub use config::MissionConfig;
pub use mission::{InterruptFlag, Mission};
pub use phase::MissionPhase;
pub use report::{MissionOutcome, MissionReport};

use flight_link::FlightError;
use thiserror::Error;

/// Mission-fatal error types.
///
/// Per-waypoint navigation and sensing failures are not represented here -
/// they degrade into "no detection at this waypoint" inside the search loop.
#[derive(Error, Debug)]
pub enum MissionError {
    #[error("flight stack failure: {0}")]
    Flight(#[from] FlightError),

    #[error("mission interrupted by operator")]
    Interrupted,
}
