//! Fusion rules and thresholds

use audio_ranging::AudioEvent;
use flight_link::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use vision_detect::VisualEvent;

use crate::records::{DetectionKind, VictimRecord};

/// Fusion configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FusionConfig {
    /// Audio cue accept threshold (m). A cue is accepted only when its
    /// distance is strictly below this value.
    pub audio_threshold_m: f64,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            audio_threshold_m: 15.0,
        }
    }
}

/// Result of fusing one waypoint's sensor output
#[derive(Debug, Clone, Default)]
pub struct FusionOutcome {
    /// New records, in report order (visual events first, then any
    /// accepted audio cue)
    pub records: Vec<VictimRecord>,
    /// Leave systematic search and respond immediately
    pub abort: bool,
}

/// The fusion engine
#[derive(Debug, Clone, Default)]
pub struct DetectionFusion {
    config: FusionConfig,
}

impl DetectionFusion {
    /// Create a fusion engine
    pub fn new(config: FusionConfig) -> Self {
        Self { config }
    }

    /// Normalize one waypoint's sensor output into victim records.
    ///
    /// Every visual event converts 1:1 in reported order - the detector is
    /// trusted, no confidence gate is applied here. An audio cue is accepted
    /// only when strictly inside the threshold, and an accepted cue always
    /// demands abort: a close-range cry outranks any remaining waypoint.
    pub fn evaluate(
        &self,
        waypoint_index: usize,
        position: Position,
        visual: &[VisualEvent],
        audio: Option<AudioEvent>,
    ) -> FusionOutcome {
        let mut outcome = FusionOutcome::default();

        for event in visual {
            debug!(
                waypoint_index,
                confidence = event.confidence,
                "visual sighting recorded"
            );
            outcome.records.push(VictimRecord {
                kind: DetectionKind::Visual {
                    confidence: event.confidence,
                },
                waypoint_index,
                position,
            });
        }

        if let Some(cue) = audio {
            if cue.distance_m < self.config.audio_threshold_m {
                info!(
                    waypoint_index,
                    distance_m = cue.distance_m,
                    "audio cue accepted, requesting search abort"
                );
                outcome.records.push(VictimRecord {
                    kind: DetectionKind::Audio {
                        distance_m: cue.distance_m,
                    },
                    waypoint_index,
                    position,
                });
                outcome.abort = true;
            } else {
                debug!(
                    waypoint_index,
                    distance_m = cue.distance_m,
                    threshold_m = self.config.audio_threshold_m,
                    "audio cue outside accept threshold"
                );
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn here() -> Position {
        Position::new(50.0, 50.0, -30.0)
    }

    #[test]
    fn test_visual_pass_through_preserves_order_and_confidence() {
        let fusion = DetectionFusion::default();
        let events = vec![
            VisualEvent::with_confidence(0.91),
            VisualEvent::with_confidence(0.62),
            VisualEvent::with_confidence(0.77),
        ];
        let outcome = fusion.evaluate(2, here(), &events, None);

        assert_eq!(outcome.records.len(), 3);
        assert!(!outcome.abort);
        for (record, event) in outcome.records.iter().zip(&events) {
            assert_eq!(record.waypoint_index, 2);
            assert_eq!(
                record.kind,
                DetectionKind::Visual {
                    confidence: event.confidence
                }
            );
        }
    }

    #[test]
    fn test_audio_inside_threshold_accepts_and_aborts() {
        let fusion = DetectionFusion::default();
        let outcome = fusion.evaluate(1, here(), &[], Some(AudioEvent::at_distance(14.999)));

        assert!(outcome.abort);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(
            outcome.records[0].kind,
            DetectionKind::Audio { distance_m: 14.999 }
        );
    }

    #[test]
    fn test_audio_at_threshold_is_rejected() {
        let fusion = DetectionFusion::default();
        let outcome = fusion.evaluate(1, here(), &[], Some(AudioEvent::at_distance(15.0)));

        assert!(!outcome.abort);
        assert!(outcome.records.is_empty());
    }

    #[test]
    fn test_visual_records_precede_accepted_audio() {
        let fusion = DetectionFusion::default();
        let outcome = fusion.evaluate(
            3,
            here(),
            &[VisualEvent::with_confidence(0.8)],
            Some(AudioEvent::at_distance(6.5)),
        );

        assert!(outcome.abort);
        assert_eq!(outcome.records.len(), 2);
        assert!(matches!(
            outcome.records[0].kind,
            DetectionKind::Visual { .. }
        ));
        assert!(matches!(
            outcome.records[1].kind,
            DetectionKind::Audio { .. }
        ));
    }

    #[test]
    fn test_no_events_no_records() {
        let fusion = DetectionFusion::default();
        let outcome = fusion.evaluate(0, here(), &[], None);
        assert!(outcome.records.is_empty());
        assert!(!outcome.abort);
    }

    proptest! {
        #[test]
        fn audio_accept_iff_strictly_inside(distance in 0.0f64..30.0) {
            let fusion = DetectionFusion::default();
            let outcome =
                fusion.evaluate(0, Position::default(), &[], Some(AudioEvent::at_distance(distance)));
            let accepted = distance < 15.0;
            prop_assert_eq!(outcome.abort, accepted);
            prop_assert_eq!(outcome.records.len(), usize::from(accepted));
        }

        #[test]
        fn visual_count_always_matches(confidences in proptest::collection::vec(0.0f32..1.0, 0..8)) {
            let fusion = DetectionFusion::default();
            let events: Vec<_> = confidences
                .iter()
                .map(|&c| VisualEvent::with_confidence(c))
                .collect();
            let outcome = fusion.evaluate(0, Position::default(), &events, None);
            prop_assert_eq!(outcome.records.len(), events.len());
            prop_assert!(!outcome.abort);
        }
    }
}
