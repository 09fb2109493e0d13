//! Simulated flight backend
//!
//! Deterministic stand-in for a live autopilot. Tracks pose and battery,
//! optionally paces cruise legs in scaled real time, and exposes fault
//! injection points so mission-level failure handling can be exercised
//! without hardware.

use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::link::{FlightLink, LinkStatus};
use crate::types::{Position, Waypoint};
use crate::FlightError;

/// Battery drain per meter flown (percent)
const BATTERY_DRAIN_PER_M: f32 = 0.005;

/// Simulated flight link with injectable faults
#[derive(Debug)]
pub struct SimulatedLink {
    connected: bool,
    armed: bool,
    pose: Position,
    battery_percent: f32,
    /// Wall-clock seconds simulated per second of flight; 0 = instant
    realtime_factor: f64,
    /// Fail the initial connect/arm handshake
    fail_connect: bool,
    /// move_to call ordinals (0-based) that fail with a navigation error
    move_faults: HashSet<usize>,
    /// Fail the land command
    fail_land: bool,
    /// Fail the disarm command
    fail_disarm: bool,
    moves_issued: usize,
    land_attempts: usize,
    disarm_attempts: usize,
}

impl Default for SimulatedLink {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedLink {
    /// Create a healthy simulated link at the origin
    pub fn new() -> Self {
        Self {
            connected: false,
            armed: false,
            pose: Position::default(),
            battery_percent: 100.0,
            realtime_factor: 0.0,
            fail_connect: false,
            move_faults: HashSet::new(),
            fail_land: false,
            fail_disarm: false,
            moves_issued: 0,
            land_attempts: 0,
            disarm_attempts: 0,
        }
    }

    /// Pace cruise legs at the given fraction of real time
    pub fn with_realtime_factor(mut self, factor: f64) -> Self {
        self.realtime_factor = factor;
        self
    }

    /// Make connect/arm fail
    pub fn with_connect_fault(mut self) -> Self {
        self.fail_connect = true;
        self
    }

    /// Make the Nth move_to call (0-based) fail
    pub fn with_move_fault(mut self, ordinal: usize) -> Self {
        self.move_faults.insert(ordinal);
        self
    }

    /// Make the land command fail
    pub fn with_land_fault(mut self) -> Self {
        self.fail_land = true;
        self
    }

    /// Make the disarm command fail
    pub fn with_disarm_fault(mut self) -> Self {
        self.fail_disarm = true;
        self
    }

    /// Number of move_to commands issued so far
    pub fn moves_issued(&self) -> usize {
        self.moves_issued
    }

    /// Remaining battery (percent)
    pub fn battery_percent(&self) -> f32 {
        self.battery_percent
    }

    /// Whether the motors are currently armed
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Number of land commands received, including failed ones
    pub fn land_attempts(&self) -> usize {
        self.land_attempts
    }

    /// Number of disarm commands received, including failed ones
    pub fn disarm_attempts(&self) -> usize {
        self.disarm_attempts
    }

    fn require_connected(&self) -> Result<(), FlightError> {
        if !self.connected {
            return Err(FlightError::NotConnected);
        }
        Ok(())
    }

    async fn cruise(&mut self, target: Position, speed: f64) {
        let dist = self.pose.distance_to(&target);
        if self.realtime_factor > 0.0 && speed > 0.0 {
            let secs = dist / speed * self.realtime_factor;
            tokio::time::sleep(Duration::from_secs_f64(secs)).await;
        }
        self.battery_percent =
            (self.battery_percent - dist as f32 * BATTERY_DRAIN_PER_M).max(0.0);
        self.pose = target;
    }
}

impl FlightLink for SimulatedLink {
    async fn connect_and_arm(&mut self) -> Result<LinkStatus, FlightError> {
        if self.fail_connect {
            warn!("simulated connect fault tripped");
            return Err(FlightError::Connect("simulated link refused".into()));
        }
        self.connected = true;
        self.armed = true;
        let status = LinkStatus {
            armed: true,
            battery_percent: self.battery_percent,
            gps_fix: true,
        };
        info!(
            battery = status.battery_percent,
            "simulated link connected and armed"
        );
        Ok(status)
    }

    async fn takeoff(&mut self, altitude_m: f64) -> Result<Position, FlightError> {
        self.require_connected()?;
        let hover = Position::new(self.pose.x, self.pose.y, -altitude_m);
        self.cruise(hover, altitude_m.max(1.0)).await;
        debug!(%hover, "takeoff complete");
        Ok(self.pose)
    }

    async fn move_to(&mut self, waypoint: &Waypoint) -> Result<(), FlightError> {
        self.require_connected()?;
        let ordinal = self.moves_issued;
        self.moves_issued += 1;
        if self.move_faults.contains(&ordinal) {
            warn!(ordinal, "simulated navigation fault tripped");
            return Err(FlightError::Navigation(format!(
                "simulated loss of position lock on leg {ordinal}"
            )));
        }
        self.cruise(waypoint.position(), waypoint.speed).await;
        debug!(pose = %self.pose, "arrived at waypoint");
        Ok(())
    }

    async fn position(&mut self) -> Result<Position, FlightError> {
        self.require_connected()?;
        Ok(self.pose)
    }

    async fn land(&mut self) -> Result<(), FlightError> {
        self.land_attempts += 1;
        self.require_connected()?;
        if self.fail_land {
            warn!("simulated landing fault tripped");
            return Err(FlightError::Landing("simulated descent abort".into()));
        }
        let ground = Position::new(self.pose.x, self.pose.y, 0.0);
        self.cruise(ground, self.pose.altitude_m().max(1.0)).await;
        info!(pose = %self.pose, "landed");
        Ok(())
    }

    async fn disarm(&mut self) -> Result<(), FlightError> {
        self.disarm_attempts += 1;
        self.require_connected()?;
        if self.fail_disarm {
            warn!("simulated disarm fault tripped");
            return Err(FlightError::Disarm("simulated motor lockout".into()));
        }
        self.armed = false;
        info!("disarmed, control released");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_takeoff_records_hover_position() {
        let mut link = SimulatedLink::new();
        link.connect_and_arm().await.unwrap();
        let home = link.takeoff(10.0).await.unwrap();
        assert_eq!(home, Position::new(0.0, 0.0, -10.0));
    }

    #[tokio::test]
    async fn test_commands_require_connection() {
        let mut link = SimulatedLink::new();
        let err = link.takeoff(10.0).await.unwrap_err();
        assert!(matches!(err, FlightError::NotConnected));
    }

    #[tokio::test]
    async fn test_move_fault_fires_on_ordinal() {
        let mut link = SimulatedLink::new().with_move_fault(1);
        link.connect_and_arm().await.unwrap();
        let wp = Waypoint::new(10.0, 0.0, -30.0, 10.0);
        assert!(link.move_to(&wp).await.is_ok());
        assert!(link.move_to(&wp).await.is_err());
        assert!(link.move_to(&wp).await.is_ok());
        assert_eq!(link.moves_issued(), 3);
    }

    #[tokio::test]
    async fn test_battery_drains_with_distance() {
        let mut link = SimulatedLink::new();
        link.connect_and_arm().await.unwrap();
        link.takeoff(10.0).await.unwrap();
        let before = link.battery_percent();
        link.move_to(&Waypoint::new(100.0, 0.0, -10.0, 10.0))
            .await
            .unwrap();
        assert!(link.battery_percent() < before);
    }
}
