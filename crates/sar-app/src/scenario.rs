//! Simulated demo scenario
//!
//! Recreates the standalone demo world: a staged victim somewhere in the
//! search area, a synthetic vision backend with a seeded detection chance,
//! and either staged-cue or coin-flip audio. The seed drives every random
//! choice, so two runs with the same settings produce the same mission.

use audio_ranging::{AudioError, AudioEvent, ProximitySensor, RandomCueSensor, StagedCueField};
use flight_link::{Position, SimulatedLink};
use serde::{Deserialize, Serialize};
use vision_detect::{SyntheticDetector, SyntheticVisionConfig};

/// Demo scenario configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Seed for every random choice in the scenario
    pub seed: u64,

    /// Ground (x, y) positions of staged victims
    pub staged_victims: Vec<(f64, f64)>,

    /// Chance a person appears in a synthetic frame
    pub person_chance: f64,

    /// Chance the synthetic detector catches a staged person
    pub hit_chance: f64,

    /// Demo realism: report a staged person even when the detector misses
    pub fallback_on_staged_miss: bool,

    /// Range at which the staged cue becomes audible (m)
    pub hearing_range_m: f64,

    /// Use the coin-flip audio source instead of staged-cue ranging
    pub random_audio: bool,

    /// Pace simulated flight legs at this fraction of real time (0 = instant)
    pub realtime_factor: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            // Just off the area center, inside hearing range of the final
            // center waypoint
            staged_victims: vec![(52.0, 48.0)],
            person_chance: 0.40,
            hit_chance: 0.75,
            fallback_on_staged_miss: true,
            hearing_range_m: 15.0,
            random_audio: false,
            realtime_factor: 0.0,
        }
    }
}

/// Audio source selected by the scenario
#[derive(Debug)]
pub enum DemoAudio {
    Staged(StagedCueField),
    Random(RandomCueSensor),
}

impl ProximitySensor for DemoAudio {
    async fn sense(&mut self, position: &Position) -> Result<Option<AudioEvent>, AudioError> {
        match self {
            DemoAudio::Staged(field) => field.sense(position).await,
            DemoAudio::Random(sensor) => sensor.sense(position).await,
        }
    }
}

/// Simulated flight link for the scenario
pub fn build_flight_link(scenario: &ScenarioConfig) -> SimulatedLink {
    SimulatedLink::new().with_realtime_factor(scenario.realtime_factor)
}

/// Synthetic vision backend for the scenario
pub fn build_vision(scenario: &ScenarioConfig) -> SyntheticDetector {
    let config = SyntheticVisionConfig {
        person_chance: scenario.person_chance,
        hit_chance: scenario.hit_chance,
        fallback_on_staged_miss: scenario.fallback_on_staged_miss,
        ..Default::default()
    };
    SyntheticDetector::new(config, scenario.seed)
}

/// Audio source for the scenario. Staged cues sit at search altitude so
/// ranging happens against the sweep plane.
pub fn build_audio(scenario: &ScenarioConfig, search_altitude_m: f64) -> DemoAudio {
    if scenario.random_audio {
        // Offset the seed so vision and audio draw independent streams
        DemoAudio::Random(RandomCueSensor::new(scenario.seed.wrapping_add(1)))
    } else {
        let cues = scenario
            .staged_victims
            .iter()
            .map(|&(x, y)| Position::new(x, y, -search_altitude_m))
            .collect();
        DemoAudio::Staged(StagedCueField::new(cues, scenario.hearing_range_m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_scenario_cue_audible_at_center() {
        let scenario = ScenarioConfig::default();
        let mut audio = build_audio(&scenario, 30.0);
        let center = Position::new(50.0, 50.0, -30.0);
        let event = audio.sense(&center).await.unwrap();
        assert!(event.is_some(), "staged victim should be audible at center");
    }

    #[tokio::test]
    async fn test_random_audio_variant_selected() {
        let scenario = ScenarioConfig {
            random_audio: true,
            ..Default::default()
        };
        assert!(matches!(build_audio(&scenario, 30.0), DemoAudio::Random(_)));
    }
}
