//! Mission report

use chrono::{DateTime, Utc};
use detection_fusion::{DetectionKind, VictimRecord};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How the mission ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum MissionOutcome {
    /// Full search completed (or rescue mode cut it short by design)
    Completed,
    /// Operator interrupt tripped the fail-safe
    Interrupted,
    /// A fatal error ended the mission early
    Failed(String),
}

impl std::fmt::Display for MissionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissionOutcome::Completed => f.write_str("COMPLETED"),
            MissionOutcome::Interrupted => f.write_str("INTERRUPTED"),
            MissionOutcome::Failed(reason) => write!(f, "FAILED: {reason}"),
        }
    }
}

/// Final mission record: one per run, emitted exactly once at the
/// `Reported` phase. Victim entries are in append order, which is
/// waypoint-visit order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionReport {
    pub mission_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub outcome: MissionOutcome,
    /// Whether an accepted audio cue forced rescue mode
    pub rescue_triggered: bool,
    pub waypoints_planned: usize,
    pub waypoints_visited: usize,
    pub victims: Vec<VictimRecord>,
}

impl MissionReport {
    /// Number of victim entries
    pub fn victim_count(&self) -> usize {
        self.victims.len()
    }

    /// JSON rendering for export
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for MissionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bar = "=".repeat(60);
        writeln!(f, "{bar}")?;
        writeln!(f, "SEARCH & RESCUE MISSION REPORT")?;
        writeln!(f, "{bar}")?;
        writeln!(f, "Mission:   {}", self.mission_id)?;
        writeln!(f, "Outcome:   {}", self.outcome)?;
        writeln!(
            f,
            "Duration:  {:.1}s",
            (self.ended_at - self.started_at).num_milliseconds() as f64 / 1000.0
        )?;
        writeln!(
            f,
            "Waypoints: {} visited of {} planned",
            self.waypoints_visited, self.waypoints_planned
        )?;
        if self.rescue_triggered {
            writeln!(f, "Rescue mode was triggered by a close-range audio cue")?;
        }
        writeln!(f, "Victims Found: {}", self.victim_count())?;

        if self.victims.is_empty() {
            writeln!(f, "\nNo victims detected during search mission")?;
        } else {
            for (i, victim) in self.victims.iter().enumerate() {
                writeln!(f, "\n{}. Detection Type: {}", i + 1, victim.kind.label())?;
                writeln!(f, "   Waypoint: {}", victim.waypoint_index + 1)?;
                writeln!(f, "   Position: {}", victim.position)?;
                match victim.kind {
                    DetectionKind::Visual { confidence } => {
                        writeln!(f, "   Confidence: {:.2}%", confidence * 100.0)?;
                    }
                    DetectionKind::Audio { distance_m } => {
                        writeln!(f, "   Distance: {distance_m:.2}m")?;
                    }
                }
            }
        }
        write!(f, "{bar}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flight_link::Position;

    fn sample_report() -> MissionReport {
        MissionReport {
            mission_id: Uuid::new_v4(),
            started_at: Utc::now(),
            ended_at: Utc::now(),
            outcome: MissionOutcome::Completed,
            rescue_triggered: true,
            waypoints_planned: 5,
            waypoints_visited: 3,
            victims: vec![
                VictimRecord {
                    kind: DetectionKind::Visual { confidence: 0.87 },
                    waypoint_index: 1,
                    position: Position::new(100.0, 0.0, -30.0),
                },
                VictimRecord {
                    kind: DetectionKind::Audio { distance_m: 7.32 },
                    waypoint_index: 2,
                    position: Position::new(100.0, 100.0, -30.0),
                },
            ],
        }
    }

    #[test]
    fn test_display_lists_entries_in_order() {
        let rendered = sample_report().to_string();
        let visual = rendered.find("VISUAL").unwrap();
        let audio = rendered.find("AUDIO").unwrap();
        assert!(visual < audio);
        assert!(rendered.contains("Victims Found: 2"));
        assert!(rendered.contains("Confidence: 87.00%"));
        assert!(rendered.contains("Distance: 7.32m"));
    }

    #[test]
    fn test_json_round_trip() {
        let report = sample_report();
        let json = report.to_json().unwrap();
        let back: MissionReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.victim_count(), 2);
        assert_eq!(back.outcome, MissionOutcome::Completed);
    }
}
