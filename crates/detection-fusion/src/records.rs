//! Fused victim records

use flight_link::Position;
use serde::{Deserialize, Serialize};

/// Which channel produced a record, with its channel-specific measurement.
///
/// A closed set: every consumer can match exhaustively, and a record can
/// never carry both a confidence and a distance or neither.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetectionKind {
    /// Person seen by the vision pipeline
    Visual { confidence: f32 },
    /// Cue heard by the proximity sensor
    Audio { distance_m: f64 },
}

impl DetectionKind {
    /// Uppercase channel label for operator-facing output
    pub fn label(&self) -> &'static str {
        match self {
            DetectionKind::Visual { .. } => "VISUAL",
            DetectionKind::Audio { .. } => "AUDIO",
        }
    }
}

/// One accepted sighting, normalized across channels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VictimRecord {
    /// Channel and measurement
    #[serde(flatten)]
    pub kind: DetectionKind,
    /// Index of the waypoint being sensed when the record was made (0-based)
    pub waypoint_index: usize,
    /// Where the vehicle was when the record was made
    pub position: Position,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(DetectionKind::Visual { confidence: 0.9 }.label(), "VISUAL");
        assert_eq!(DetectionKind::Audio { distance_m: 7.0 }.label(), "AUDIO");
    }
}
