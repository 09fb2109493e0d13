//! Normalized detection events

use serde::{Deserialize, Serialize};

/// One person sighting reported by the vision pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualEvent {
    /// Detection confidence in [0, 1]
    pub confidence: f32,

    /// Bounding box [x, y, width, height] in frame pixels, when the
    /// backend reports geometry. Carried for operator display only -
    /// fusion ignores it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<[f32; 4]>,
}

impl VisualEvent {
    /// Event with confidence only
    pub fn with_confidence(confidence: f32) -> Self {
        Self {
            confidence,
            bbox: None,
        }
    }
}
