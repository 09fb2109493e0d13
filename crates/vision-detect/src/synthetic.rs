//! Synthetic detection backend
//!
//! Stands in for a live person-detection model during demos and tests.
//! Every probabilistic choice comes from an injected, seeded RNG so runs
//! are reproducible; the mission core never sees the randomness, only the
//! resulting events.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::detector::{FrameRequest, VisionDetector};
use crate::event::VisualEvent;
use crate::VisionError;

/// Nominal confidence for the demo-only injected detection
const FALLBACK_CONFIDENCE: f32 = 0.87;

/// Tuning for the synthetic backend
#[derive(Debug, Clone)]
pub struct SyntheticVisionConfig {
    /// Probability that a person is staged in the scene
    pub person_chance: f64,
    /// Probability that the detector catches a staged person
    pub hit_chance: f64,
    /// Sampled confidence range for real hits
    pub confidence_min: f32,
    pub confidence_max: f32,
    /// Demo-only: when a staged person goes undetected, inject one event at
    /// a fixed nominal confidence. Must stay off outside demo scenarios -
    /// a real sensing context must never fabricate detections.
    pub fallback_on_staged_miss: bool,
}

impl Default for SyntheticVisionConfig {
    fn default() -> Self {
        Self {
            person_chance: 0.40,
            hit_chance: 0.75,
            confidence_min: 0.55,
            confidence_max: 0.95,
            fallback_on_staged_miss: false,
        }
    }
}

/// Seeded synthetic detector
#[derive(Debug)]
pub struct SyntheticDetector {
    config: SyntheticVisionConfig,
    rng: ChaCha8Rng,
}

impl SyntheticDetector {
    /// Create a synthetic detector from a seed
    pub fn new(config: SyntheticVisionConfig, seed: u64) -> Self {
        info!(seed, "synthetic vision backend ready");
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn sample_bbox(&mut self) -> [f32; 4] {
        let x = self.rng.gen_range(40.0..440.0);
        let y = self.rng.gen_range(40.0..280.0);
        [x, y, self.rng.gen_range(30.0..90.0), self.rng.gen_range(80.0..180.0)]
    }
}

impl VisionDetector for SyntheticDetector {
    async fn detect(&mut self, request: &FrameRequest) -> Result<Vec<VisualEvent>, VisionError> {
        let staged = self.rng.gen_bool(self.config.person_chance);
        if !staged {
            debug!(camera = request.camera_id, "no person in synthetic scene");
            return Ok(Vec::new());
        }

        if self.rng.gen_bool(self.config.hit_chance) {
            let confidence = self
                .rng
                .gen_range(self.config.confidence_min..self.config.confidence_max);
            let bbox = self.sample_bbox();
            debug!(confidence, "synthetic person detected");
            return Ok(vec![VisualEvent {
                confidence,
                bbox: Some(bbox),
            }]);
        }

        if self.config.fallback_on_staged_miss {
            // Demo realism only: the staged person was missed, report it
            // anyway at the nominal confidence.
            debug!("staged person missed, injecting fallback detection");
            return Ok(vec![VisualEvent::with_confidence(FALLBACK_CONFIDENCE)]);
        }

        debug!("staged person missed by synthetic detector");
        Ok(Vec::new())
    }
}
