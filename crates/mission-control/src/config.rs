//! Mission configuration

use coverage_planner::SweepParams;
use detection_fusion::FusionConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Mission configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionConfig {
    /// Side length of the square search area (m)
    pub area_size_m: f64,

    /// Altitude flown during the coverage sweep (m)
    pub search_altitude_m: f64,

    /// Hover altitude reached on takeoff, before climbing out to the
    /// search pattern (m)
    pub takeoff_altitude_m: f64,

    /// Cruise speed between search waypoints (m/s)
    pub search_speed_mps: f64,

    /// Cruise speed on the return-to-base leg (m/s)
    pub return_speed_mps: f64,

    /// Pause after takeoff, return, and landing to let the vehicle settle
    /// (seconds; 0 in tests)
    pub settle_secs: f64,

    /// Fusion thresholds
    pub fusion: FusionConfig,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            area_size_m: 100.0,
            search_altitude_m: 30.0,
            takeoff_altitude_m: 10.0,
            search_speed_mps: 10.0,
            return_speed_mps: 10.0,
            settle_secs: 2.0,
            fusion: FusionConfig::default(),
        }
    }
}

impl MissionConfig {
    /// Config with no settle pauses, for tests and fast simulation
    pub fn immediate() -> Self {
        Self {
            settle_secs: 0.0,
            ..Default::default()
        }
    }

    /// The sweep parameters this mission plans with
    pub fn sweep_params(&self) -> SweepParams {
        SweepParams {
            area_size_m: self.area_size_m,
            altitude_m: self.search_altitude_m,
            speed_mps: self.search_speed_mps,
        }
    }

    /// Settle pause as a duration
    pub fn settle(&self) -> Duration {
        Duration::from_secs_f64(self.settle_secs.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_mission() {
        let config = MissionConfig::default();
        assert_eq!(config.area_size_m, 100.0);
        assert_eq!(config.search_altitude_m, 30.0);
        assert_eq!(config.takeoff_altitude_m, 10.0);
        assert_eq!(config.fusion.audio_threshold_m, 15.0);
    }

    #[test]
    fn test_immediate_has_no_settle() {
        assert_eq!(MissionConfig::immediate().settle(), Duration::ZERO);
    }
}
