//! Sweep pattern planner

use flight_link::Waypoint;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Human-readable name of the generated pattern, for mission logs
pub const PATTERN_NAME: &str = "lawnmower";

/// Parameters for one sweep plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SweepParams {
    /// Side length of the square search area (m)
    pub area_size_m: f64,
    /// Search altitude above ground reference (m, positive)
    pub altitude_m: f64,
    /// Cruise speed between waypoints (m/s)
    pub speed_mps: f64,
}

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            area_size_m: 100.0,
            altitude_m: 30.0,
            speed_mps: 10.0,
        }
    }
}

/// Generate the coverage sweep for a square area.
///
/// Returns exactly five waypoints: the corners in sweep order
/// `(0,0) -> (s,0) -> (s,s) -> (0,s)`, then the area center. All carry
/// z = `-altitude` and the commanded speed. Pure - any positive inputs
/// are valid and produce the same sequence every time.
pub fn plan(params: &SweepParams) -> Vec<Waypoint> {
    let s = params.area_size_m;
    let z = -params.altitude_m;
    let v = params.speed_mps;

    let waypoints = vec![
        Waypoint::new(0.0, 0.0, z, v),
        Waypoint::new(s, 0.0, z, v),
        Waypoint::new(s, s, z, v),
        Waypoint::new(0.0, s, z, v),
        Waypoint::new(s / 2.0, s / 2.0, z, v),
    ];

    debug!(
        pattern = PATTERN_NAME,
        area_size_m = s,
        count = waypoints.len(),
        "sweep plan generated"
    );
    waypoints
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reference_sweep() {
        let wps = plan(&SweepParams {
            area_size_m: 100.0,
            altitude_m: 30.0,
            speed_mps: 10.0,
        });
        let expected = [
            (0.0, 0.0),
            (100.0, 0.0),
            (100.0, 100.0),
            (0.0, 100.0),
            (50.0, 50.0),
        ];
        assert_eq!(wps.len(), 5);
        for (wp, (x, y)) in wps.iter().zip(expected) {
            assert_eq!((wp.x, wp.y), (x, y));
            assert_eq!(wp.z, -30.0);
            assert_eq!(wp.speed, 10.0);
        }
    }

    proptest! {
        #[test]
        fn plan_is_five_corners_then_center(
            s in 1.0f64..10_000.0,
            alt in 1.0f64..500.0,
            speed in 0.5f64..50.0,
        ) {
            let wps = plan(&SweepParams {
                area_size_m: s,
                altitude_m: alt,
                speed_mps: speed,
            });
            prop_assert_eq!(wps.len(), 5);
            prop_assert_eq!((wps[0].x, wps[0].y), (0.0, 0.0));
            prop_assert_eq!((wps[1].x, wps[1].y), (s, 0.0));
            prop_assert_eq!((wps[2].x, wps[2].y), (s, s));
            prop_assert_eq!((wps[3].x, wps[3].y), (0.0, s));
            prop_assert_eq!((wps[4].x, wps[4].y), (s / 2.0, s / 2.0));
            for wp in &wps {
                prop_assert_eq!(wp.z, -alt);
                prop_assert_eq!(wp.speed, speed);
            }
        }
    }
}
