//! Simulated proximity sensing
//!
//! Two stand-ins for live hardware: [`StagedCueField`] ranges against cue
//! positions staged in the simulated world (deterministic), and
//! [`RandomCueSensor`] reproduces the standalone demo's seeded coin-flip
//! behavior where no world model exists.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::sensor::{AudioEvent, ProximitySensor};
use crate::AudioError;
use flight_link::Position;

/// Ranges against cues staged at known world positions
#[derive(Debug, Clone)]
pub struct StagedCueField {
    cues: Vec<Position>,
    /// Maximum range at which a cue is heard (m)
    hearing_range_m: f64,
}

impl StagedCueField {
    /// Create a field with the given staged cue positions
    pub fn new(cues: Vec<Position>, hearing_range_m: f64) -> Self {
        Self {
            cues,
            hearing_range_m,
        }
    }

    /// A field with no staged cues (silent world)
    pub fn silent() -> Self {
        Self::new(Vec::new(), 15.0)
    }
}

impl ProximitySensor for StagedCueField {
    async fn sense(&mut self, position: &Position) -> Result<Option<AudioEvent>, AudioError> {
        let nearest = self
            .cues
            .iter()
            .map(|cue| position.distance_to(cue))
            .min_by(|a, b| a.total_cmp(b));

        match nearest {
            Some(distance_m) if distance_m < self.hearing_range_m => {
                debug!(distance_m, "staged cue within hearing range");
                Ok(Some(AudioEvent::at_distance(distance_m)))
            }
            _ => Ok(None),
        }
    }
}

/// Seeded coin-flip cue source for the standalone demo
#[derive(Debug)]
pub struct RandomCueSensor {
    /// Probability of hearing a cue on any one reading
    cue_chance: f64,
    /// Range band the reported distance is drawn from
    distance_min_m: f64,
    distance_max_m: f64,
    rng: ChaCha8Rng,
}

impl RandomCueSensor {
    /// Create a sensor from a seed with the demo's stock tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, 0.30, 5.0, 15.0)
    }

    /// Create a sensor with explicit chance and distance band
    pub fn with_tuning(seed: u64, cue_chance: f64, min_m: f64, max_m: f64) -> Self {
        Self {
            cue_chance,
            distance_min_m: min_m,
            distance_max_m: max_m,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl ProximitySensor for RandomCueSensor {
    async fn sense(&mut self, _position: &Position) -> Result<Option<AudioEvent>, AudioError> {
        if !self.rng.gen_bool(self.cue_chance) {
            return Ok(None);
        }
        let distance_m = self.rng.gen_range(self.distance_min_m..self.distance_max_m);
        debug!(distance_m, "random cue heard");
        Ok(Some(AudioEvent::at_distance(distance_m)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_staged_cue_heard_in_range() {
        let cue = Position::new(10.0, 0.0, -30.0);
        let mut field = StagedCueField::new(vec![cue], 15.0);
        let event = field
            .sense(&Position::new(0.0, 0.0, -30.0))
            .await
            .unwrap()
            .expect("cue at 10 m should be heard");
        assert!((event.distance_m - 10.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_staged_cue_out_of_range_is_silent() {
        let cue = Position::new(100.0, 100.0, -30.0);
        let mut field = StagedCueField::new(vec![cue], 15.0);
        assert!(field
            .sense(&Position::new(0.0, 0.0, -30.0))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_nearest_cue_wins() {
        let near = Position::new(5.0, 0.0, -30.0);
        let far = Position::new(12.0, 0.0, -30.0);
        let mut field = StagedCueField::new(vec![far, near], 15.0);
        let event = field
            .sense(&Position::new(0.0, 0.0, -30.0))
            .await
            .unwrap()
            .unwrap();
        assert!((event.distance_m - 5.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_random_sensor_is_reproducible() {
        let here = Position::default();
        let mut a = RandomCueSensor::new(9);
        let mut b = RandomCueSensor::new(9);
        for _ in 0..20 {
            assert_eq!(a.sense(&here).await.unwrap(), b.sense(&here).await.unwrap());
        }
    }

    #[tokio::test]
    async fn test_random_distance_stays_in_band() {
        let here = Position::default();
        let mut sensor = RandomCueSensor::with_tuning(3, 1.0, 5.0, 15.0);
        for _ in 0..50 {
            let event = sensor.sense(&here).await.unwrap().unwrap();
            assert!(event.distance_m >= 5.0 && event.distance_m < 15.0);
        }
    }
}
