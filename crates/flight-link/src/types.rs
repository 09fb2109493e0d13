//! Position and waypoint types
//!
//! Coordinates use the NED-style convention shared with the flight stack:
//! negative z is above the ground reference, so an aircraft at 30 m altitude
//! reports z = -30.0.

use serde::{Deserialize, Serialize};

/// Vehicle position in the mission frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    /// Negative above ground reference
    pub z: f64,
}

impl Position {
    /// Create a new position
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Altitude above ground reference in meters
    pub fn altitude_m(&self) -> f64 {
        -self.z
    }

    /// Euclidean distance to another position
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

/// A navigation target with commanded cruise speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
    /// Negative above ground reference
    pub z: f64,
    /// Commanded cruise speed (m/s)
    pub speed: f64,
}

impl Waypoint {
    /// Create a new waypoint
    pub fn new(x: f64, y: f64, z: f64, speed: f64) -> Self {
        Self { x, y, z, speed }
    }

    /// The waypoint's position without the speed component
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y, self.z)
    }

    /// Altitude above ground reference in meters
    pub fn altitude_m(&self) -> f64 {
        -self.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 0.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_altitude_convention() {
        let wp = Waypoint::new(10.0, 20.0, -30.0, 10.0);
        assert_eq!(wp.altitude_m(), 30.0);
        assert_eq!(wp.position().altitude_m(), 30.0);
    }
}
