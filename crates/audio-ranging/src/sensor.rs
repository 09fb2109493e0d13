//! The proximity sensing capability trait

use crate::AudioError;
use flight_link::Position;
use serde::{Deserialize, Serialize};

/// A ranged audio cue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudioEvent {
    /// Estimated range to the cue source (m, non-negative)
    pub distance_m: f64,
}

impl AudioEvent {
    /// Create a cue at the given range
    pub fn at_distance(distance_m: f64) -> Self {
        Self { distance_m }
    }
}

/// Capability interface to the proximity cue sensor.
///
/// `None` means no cue within sensing range at this position - the common
/// case. Errors mean the read itself failed and the caller should treat the
/// waypoint as unsensed.
#[allow(async_fn_in_trait)]
pub trait ProximitySensor {
    /// Take one proximity reading at the current position
    async fn sense(&mut self, position: &Position) -> Result<Option<AudioEvent>, AudioError>;
}
