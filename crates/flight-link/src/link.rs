//! The flight capability trait

use crate::types::{Position, Waypoint};
use crate::FlightError;
use serde::{Deserialize, Serialize};

/// Link health reported after connect/arm
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LinkStatus {
    /// Motors armed
    pub armed: bool,
    /// Battery state of charge (percent)
    pub battery_percent: f32,
    /// GPS fix acquired
    pub gps_fix: bool,
}

/// Capability interface to the flight backend.
///
/// All commands are issued strictly sequentially by the mission layer;
/// `move_to` does not return until the vehicle has arrived (or the command
/// has failed), so sensing always happens at a stable position.
#[allow(async_fn_in_trait)]
pub trait FlightLink {
    /// Establish the link and arm the motors
    async fn connect_and_arm(&mut self) -> Result<LinkStatus, FlightError>;

    /// Take off and hover at the given altitude; returns the hover position
    async fn takeoff(&mut self, altitude_m: f64) -> Result<Position, FlightError>;

    /// Fly to a waypoint, blocking until arrival
    async fn move_to(&mut self, waypoint: &Waypoint) -> Result<(), FlightError>;

    /// Current vehicle position
    async fn position(&mut self) -> Result<Position, FlightError>;

    /// Land at the current horizontal position
    async fn land(&mut self) -> Result<(), FlightError>;

    /// Disarm the motors and release control
    async fn disarm(&mut self) -> Result<(), FlightError>;
}
