//! Flight stack capability interface
//!
//! Abstracts the vehicle's flight backend behind a single async trait:
//! - Connect and arm
//! - Takeoff to altitude
//! - Blocking waypoint navigation
//! - Return, land, disarm
//!
//! The mission layer only ever talks to [`FlightLink`]; the simulated
//! adapter in [`sim`] stands in for a live autopilot during tests and demos.

pub mod link;
pub mod sim;
pub mod types;

pub use link::{FlightLink, LinkStatus};
pub use sim::SimulatedLink;
pub use types::{Position, Waypoint};

use thiserror::Error;

/// Flight stack error types
#[derive(Error, Debug)]
pub enum FlightError {
    #[error("Connection to flight stack failed: {0}")]
    Connect(String),

    #[error("Arming rejected: {0}")]
    Arm(String),

    #[error("Takeoff failed: {0}")]
    Takeoff(String),

    #[error("Navigation command failed: {0}")]
    Navigation(String),

    #[error("Landing failed: {0}")]
    Landing(String),

    #[error("Disarm failed: {0}")]
    Disarm(String),

    #[error("Link not connected")]
    NotConnected,
}
