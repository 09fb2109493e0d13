//! Mission phases

use serde::{Deserialize, Serialize};

/// The mission lifecycle.
///
/// Exactly one phase is active at a time. Transitions are one-directional -
/// `Searching` loops across successive waypoints but otherwise the sequence
/// only moves forward, ending at `Reported`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MissionPhase {
    #[default]
    Idle,
    Connected,
    Airborne,
    Searching,
    /// Immediate response to an accepted proximity cue; remaining waypoints
    /// are skipped
    RescueMode,
    Returning,
    Landed,
    Reported,
}

impl MissionPhase {
    /// Whether the mission has produced its report and is finished
    pub fn is_terminal(&self) -> bool {
        matches!(self, MissionPhase::Reported)
    }
}

impl std::fmt::Display for MissionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MissionPhase::Idle => "Idle",
            MissionPhase::Connected => "Connected",
            MissionPhase::Airborne => "Airborne",
            MissionPhase::Searching => "Searching",
            MissionPhase::RescueMode => "RescueMode",
            MissionPhase::Returning => "Returning",
            MissionPhase::Landed => "Landed",
            MissionPhase::Reported => "Reported",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_reported_is_terminal() {
        assert!(MissionPhase::Reported.is_terminal());
        assert!(!MissionPhase::Idle.is_terminal());
        assert!(!MissionPhase::RescueMode.is_terminal());
    }
}
